//! 基础数学类型与工具
//!
//! 基于 nalgebra 的2D点/向量别名，以及角度、旋转和包围盒工具。
//! 所有坐标都在绘图平面坐标系（模型空间，y轴向上）。

use serde::{Deserialize, Serialize};

/// 2D点
pub type Point2 = nalgebra::Point2<f64>;
/// 2D向量
pub type Vector2 = nalgebra::Vector2<f64>;

/// 通用几何容差（平面单位）
pub const EPSILON: f64 = 1e-6;

/// 两点间距离
pub fn distance(a: Point2, b: Point2) -> f64 {
    (b - a).norm()
}

/// 两点中点
pub fn midpoint(a: Point2, b: Point2) -> Point2 {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// 从 `from` 指向 `to` 的方向角（度，atan2 约定，范围 (-180, 180]）
pub fn angle_deg(from: Point2, to: Point2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// 角度归一化到 [0, 360)
pub fn normalize_angle_deg(angle: f64) -> f64 {
    let mut a = angle % 360.0;
    if a < 0.0 {
        a += 360.0;
    }
    // 极小负角加 360 会凑整回 360.0，必须折回 0 保住半开区间
    if a >= 360.0 {
        a = 0.0;
    }
    a
}

/// 极坐标偏移量（角度制）
pub fn polar_offset(radius: f64, angle_deg: f64) -> Vector2 {
    let rad = angle_deg.to_radians();
    Vector2::new(radius * rad.cos(), radius * rad.sin())
}

/// 绕枢轴点逆时针旋转一个点（角度制）
///
/// 平移到枢轴、应用旋转矩阵、再平移回去。所有形状的旋转都必须走这
/// 一个函数，保证整体旋转逐点结果一致。
pub fn rotate_point(point: Point2, pivot: Point2, angle_deg: f64) -> Point2 {
    let rad = angle_deg.to_radians();
    let (sin, cos) = rad.sin_cos();
    let tx = point.x - pivot.x;
    let ty = point.y - pivot.y;
    Point2::new(
        cos * tx - sin * ty + pivot.x,
        sin * tx + cos * ty + pivot.y,
    )
}

/// 2D轴对齐包围盒
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox2 {
    pub min: Point2,
    pub max: Point2,
}

impl BoundingBox2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// 空包围盒（min > max，任何 expand 都会覆盖它）
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::MAX, f64::MAX),
            max: Point2::new(f64::MIN, f64::MIN),
        }
    }

    /// 从点集构建
    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Self {
        let mut bbox = Self::empty();
        for p in points {
            bbox.expand_to_include(&p);
        }
        bbox
    }

    /// 扩展以包含一个点
    pub fn expand_to_include(&mut self, point: &Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// 点是否在包围盒内
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// 包围盒中心
    pub fn center(&self) -> Point2 {
        midpoint(self.min, self.max)
    }
}
