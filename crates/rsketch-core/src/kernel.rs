//! 几何构造核心算法
//!
//! 纯函数层：三点圆/圆弧求解、半径+弦构造、正多边形生成、
//! 贝塞尔曲线求值。形状模型（`shape`）在创建和重算派生参数时
//! 都调用这里，保证两条路径产生完全相同的几何。

use crate::error::GeometryError;
use crate::math::{self, Point2, Vector2};

/// 共线判定容差（法向量行列式绝对值下限）
pub const COLLINEAR_TOLERANCE: f64 = 1e-6;

/// 贝塞尔曲线默认采样段数（导出为多段线时的精度）
pub const BEZIER_SAMPLES: usize = 100;

/// 圆弧解析参数（角度制）
///
/// `start_angle` 为从圆心指向起点的方向角，`span_angle` 为非负的
/// 角度跨度，逆时针方向。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub span_angle: f64,
}

/// 三点外接圆求解
///
/// 取 P1P2 与 P2P3 的垂直平分线（中点+法向量表示），用克莱姆法则
/// 解两条平分线的交点参数 t，圆心 = mid1 + t·norm1。
pub fn circumcircle(p1: Point2, p2: Point2, p3: Point2) -> Result<(Point2, f64), GeometryError> {
    let mid1 = math::midpoint(p1, p2);
    let mid2 = math::midpoint(p2, p3);

    // 弦的法向量（未归一化即可）
    let norm1 = Vector2::new(p2.y - p1.y, p1.x - p2.x);
    let norm2 = Vector2::new(p3.y - p2.y, p2.x - p3.x);

    let det = norm1.x * norm2.y - norm1.y * norm2.x;
    if det.abs() < COLLINEAR_TOLERANCE {
        return Err(GeometryError::CollinearPoints);
    }

    let t = ((mid2.x - mid1.x) * norm2.y - (mid2.y - mid1.y) * norm2.x) / det;
    let center = Point2::new(mid1.x + t * norm1.x, mid1.y + t * norm1.y);
    let radius = math::distance(center, p1);

    Ok((center, radius))
}

/// 三点圆弧求解
///
/// 起始角取 P1、终止角取 P3。若跨度超过 180° 则改取互补弧
/// （跨度 = 360 − 跨度，起始角 + 180°），默认总是画"短的那一边"。
/// 这是刻意的策略选择，DXF 往返兼容依赖它。
pub fn arc_from_three_points(
    p1: Point2,
    p2: Point2,
    p3: Point2,
) -> Result<ArcParams, GeometryError> {
    let (center, radius) = circumcircle(p1, p2, p3)?;

    let start = math::angle_deg(center, p1);
    let end = math::angle_deg(center, p3);
    let mut span_angle = math::normalize_angle_deg(end - start);
    let mut start_angle = math::normalize_angle_deg(start);

    if span_angle > 180.0 {
        span_angle = 360.0 - span_angle;
        start_angle = math::normalize_angle_deg(start_angle + 180.0);
    }

    // 圆心坐标的浮点残差会让 atan2 给出 -1e-16 度，归一化后落在
    // 360 附近，吸附回 0
    if 360.0 - start_angle < 1e-9 {
        start_angle = 0.0;
    }

    Ok(ArcParams {
        center,
        radius,
        start_angle,
        span_angle,
    })
}

/// 半径+弦构造圆弧
///
/// 以弦方向为中心的固定半圆：起始角 = 弦方向角 − 90°，跨度 180°。
/// 半径必须不小于圆心到弦端点的距离，否则弦放不进圆。
pub fn arc_from_radius_chord(
    center: Point2,
    chord_end: Point2,
    radius: f64,
) -> Result<ArcParams, GeometryError> {
    let dist = math::distance(center, chord_end);
    if radius < dist {
        return Err(GeometryError::RadiusTooSmall {
            radius,
            distance: dist,
        });
    }

    let chord_angle = math::angle_deg(center, chord_end);
    Ok(ArcParams {
        center,
        radius,
        start_angle: math::normalize_angle_deg(chord_angle - 90.0),
        span_angle: 180.0,
    })
}

/// 正多边形模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    /// 内接：参考点落在顶点上
    Inscribed,
    /// 外切：参考点落在边上
    Circumscribed,
}

/// 正多边形顶点生成
///
/// 参考点同时决定朝向和尺度。外切模式把顶点半径放大到
/// radius / cos(π/N)，使参考点落在边中点而不是顶点上。
/// 顶点按逆时针等角步长排列，第一个顶点在参考点方向。
pub fn regular_polygon(
    center: Point2,
    reference: Point2,
    sides: usize,
    mode: PolygonMode,
) -> Result<Vec<Point2>, GeometryError> {
    if sides < 3 {
        return Err(GeometryError::InvalidShapeArity {
            required: 3,
            actual: sides,
        });
    }

    let base_radius = math::distance(center, reference);
    let vertex_radius = match mode {
        PolygonMode::Inscribed => base_radius,
        PolygonMode::Circumscribed => base_radius / (std::f64::consts::PI / sides as f64).cos(),
    };

    let start_angle = math::angle_deg(center, reference);
    let step = 360.0 / sides as f64;

    Ok((0..sides)
        .map(|i| center + math::polar_offset(vertex_radius, start_angle + step * i as f64))
        .collect())
}

/// 二项式系数 C(n, k)，乘法形式避免阶乘溢出
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

/// 贝塞尔曲线上参数 t 处的点（显式伯恩斯坦多项式求和）
///
/// point(t) = Σ C(n,i)·(1−t)^(n−i)·t^i·P_i，n = 控制点数 − 1。
/// 空输入返回原点，不会下溢。
pub fn bezier_point(points: &[Point2], t: f64) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let n = points.len() - 1;
    let mut x = 0.0;
    let mut y = 0.0;
    for (i, p) in points.iter().enumerate() {
        let factor = binomial(n, i) * (1.0 - t).powi((n - i) as i32) * t.powi(i as i32);
        x += factor * p.x;
        y += factor * p.y;
    }
    Point2::new(x, y)
}

/// 贝塞尔曲线等参数采样路径（含首尾，共 segments+1 个点）
pub fn bezier_path(points: &[Point2], segments: usize) -> Vec<Point2> {
    if points.len() < 2 {
        return Vec::new();
    }
    (0..=segments)
        .map(|i| bezier_point(points, i as f64 / segments as f64))
        .collect()
}
