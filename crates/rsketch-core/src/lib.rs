//! RSketch 核心几何引擎
//!
//! 提供2D草图的几何构造、形状模型和视觉属性。
//!
//! # 架构设计
//!
//! 分层：
//! - `kernel`: 纯构造算法（三点圆、半径+弦圆弧、正多边形、贝塞尔）
//! - `shape`: 封闭的形状联合类型，保存定义点和派生参数
//! - `entity`: 标识符 + 形状 + 属性，文档所有权的基本单位
//!
//! 所有构造不变量在可失败构造函数里检查，构造错误
//! (`GeometryError`) 在调用点可恢复。
//!
//! # 示例
//!
//! ```rust
//! use rsketch_core::prelude::*;
//!
//! let line = Line::new(Point2::origin(), Point2::new(100.0, 50.0));
//! println!("Length: {}", line.length());
//! ```

pub mod entity;
pub mod error;
pub mod kernel;
pub mod math;
pub mod properties;
pub mod shape;
pub mod spline;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::entity::{Entity, EntityId};
    pub use crate::error::GeometryError;
    pub use crate::kernel::{ArcParams, PolygonMode};
    pub use crate::math::{BoundingBox2, Point2, Vector2};
    pub use crate::properties::{Color, DashParameters, LineType, Properties, ThicknessClass};
    pub use crate::shape::{
        ArcByRadiusChord, ArcByThreePoints, BezierSpline, Circle, CircleByThreePoints, Line,
        Polygon, Rectangle, RenderPrimitive, SegmentSpline, Shape,
    };
    pub use crate::spline::SplineSampler;
}
