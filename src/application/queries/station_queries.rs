//! Station Queries

/// 获取电台状态与品牌信息查询
#[derive(Debug, Clone)]
pub struct GetStation;
