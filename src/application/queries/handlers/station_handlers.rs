//! Station Query Handlers

use std::sync::Arc;

use crate::application::queries::GetStation;
use crate::application::station::{Station, StationState};

/// 电台品牌信息（来自配置，随查询原样返回给前端）
#[derive(Debug, Clone)]
pub struct Branding {
    pub name: String,
    pub tagline: String,
    pub stream_url: String,
}

/// 电台状态视图
#[derive(Debug, Clone)]
pub struct StationView {
    pub state: StationState,
    pub name: String,
    pub tagline: String,
    pub stream_url: String,
}

/// GetStation Handler
pub struct GetStationHandler {
    station: Arc<Station>,
    branding: Branding,
}

impl GetStationHandler {
    pub fn new(station: Arc<Station>, branding: Branding) -> Self {
        Self { station, branding }
    }

    pub async fn handle(&self, _query: GetStation) -> StationView {
        StationView {
            state: self.station.state().await,
            name: self.branding.name.clone(),
            tagline: self.branding.tagline.clone(),
            stream_url: self.branding.stream_url.clone(),
        }
    }
}
