//! 几何构造错误定义
//!
//! 所有构造错误都是可恢复的：调用方放弃当前构造并通知用户，
//! 不会有无效形状进入文档。

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// 三点共线，无法确定唯一的圆
    #[error("three points are collinear, no unique circle exists")]
    CollinearPoints,

    /// 半径小于圆心到弦端点的距离，弦放不进圆里
    #[error("radius {radius} is smaller than chord distance {distance}")]
    RadiusTooSmall { radius: f64, distance: f64 },

    /// 点数不足以完成形状
    #[error("shape requires at least {required} points, got {actual}")]
    InvalidShapeArity { required: usize, actual: usize },
}
