//! 形状模型
//!
//! 封闭的带标签联合类型 `Shape`，每个变体保存定义点和派生参数。
//! 统一操作（重算派生量、总长度、绕点旋转、渲染图元）用穷举
//! match 分发，编译器保证不漏分支。
//!
//! 不变量在可失败构造函数里检查：不存在"半构造"的形状值。

use crate::error::GeometryError;
use crate::kernel::{self, ArcParams, PolygonMode, BEZIER_SAMPLES};
use crate::math::{self, BoundingBox2, Point2};
use crate::spline::SplineSampler;
use serde::{Deserialize, Serialize};

/// 形状类型枚举
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Circle(Circle),
    CircleByThreePoints(CircleByThreePoints),
    Rectangle(Rectangle),
    Polygon(Polygon),
    ArcByThreePoints(ArcByThreePoints),
    ArcByRadiusChord(ArcByRadiusChord),
    BezierSpline(BezierSpline),
    SegmentSpline(SegmentSpline),
}

/// 渲染图元 - 暴露给外部画笔的最小绘制单元
#[derive(Debug, Clone)]
pub enum RenderPrimitive {
    Segment {
        start: Point2,
        end: Point2,
    },
    Circle {
        center: Point2,
        radius: f64,
    },
    /// 逆时针圆弧（角度制）
    Arc {
        center: Point2,
        radius: f64,
        start_angle: f64,
        span_angle: f64,
    },
    /// 折线路径
    Path(Vec<Point2>),
}

impl Shape {
    /// 获取形状的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Line(_) => "Line",
            Shape::Circle(_) => "Circle",
            Shape::CircleByThreePoints(_) => "CircleByThreePoints",
            Shape::Rectangle(_) => "Rectangle",
            Shape::Polygon(_) => "Polygon",
            Shape::ArcByThreePoints(_) => "ArcByThreePoints",
            Shape::ArcByRadiusChord(_) => "ArcByRadiusChord",
            Shape::BezierSpline(_) => "BezierSpline",
            Shape::SegmentSpline(_) => "SegmentSpline",
        }
    }

    /// 重算派生参数
    ///
    /// 对当前定义点重新运行内核算法，刷新圆心/半径/角度。幂等，
    /// 失败时抛出与初次构造相同的错误。
    pub fn recompute_derived(&mut self) -> Result<(), GeometryError> {
        match self {
            Shape::CircleByThreePoints(c) => c.recompute(),
            Shape::ArcByThreePoints(a) => a.recompute(),
            Shape::ArcByRadiusChord(a) => {
                a.recompute();
                Ok(())
            }
            Shape::Rectangle(r) => {
                r.recompute();
                Ok(())
            }
            // 其余变体没有派生参数
            _ => Ok(()),
        }
    }

    /// 总长度（闭合形状为周长，曲线为弧长/折线和）
    pub fn total_length(&self) -> f64 {
        match self {
            Shape::Line(l) => l.length(),
            Shape::Circle(c) => c.circumference(),
            Shape::CircleByThreePoints(c) => 2.0 * std::f64::consts::PI * c.radius,
            Shape::Rectangle(r) => r.perimeter(),
            Shape::Polygon(p) => p.perimeter(),
            Shape::ArcByThreePoints(a) => a.radius * a.span_angle.to_radians(),
            Shape::ArcByRadiusChord(a) => a.radius * a.span_angle.to_radians(),
            Shape::BezierSpline(b) => polyline_length(&b.path()),
            Shape::SegmentSpline(s) => polyline_length(&s.samples().collect::<Vec<_>>()),
        }
    }

    /// 绕枢轴点逆时针旋转（角度制）
    ///
    /// 旋转矩阵作用于所有定义点，随后重算派生参数。颜色等属性
    /// 不受影响（属性存放在 `Entity` 层）。
    pub fn rotate_around(&mut self, angle_deg: f64, pivot: Point2) -> Result<(), GeometryError> {
        let rot = |p: Point2| math::rotate_point(p, pivot, angle_deg);
        match self {
            Shape::Line(l) => {
                l.start = rot(l.start);
                l.end = rot(l.end);
            }
            Shape::Circle(c) => {
                c.center = rot(c.center);
            }
            Shape::CircleByThreePoints(c) => {
                c.p1 = rot(c.p1);
                c.p2 = rot(c.p2);
                c.p3 = rot(c.p3);
            }
            Shape::Rectangle(r) => {
                r.corner_a = rot(r.corner_a);
                r.corner_b = rot(r.corner_b);
            }
            Shape::Polygon(p) => {
                for v in &mut p.points {
                    *v = rot(*v);
                }
            }
            Shape::ArcByThreePoints(a) => {
                a.p1 = rot(a.p1);
                a.p2 = rot(a.p2);
                a.p3 = rot(a.p3);
            }
            Shape::ArcByRadiusChord(a) => {
                a.center = rot(a.center);
                a.radius_point = rot(a.radius_point);
                a.chord_point = rot(a.chord_point);
            }
            Shape::BezierSpline(b) => {
                for v in &mut b.points {
                    *v = rot(*v);
                }
            }
            Shape::SegmentSpline(s) => {
                for v in &mut s.points {
                    *v = rot(*v);
                }
            }
        }
        self.recompute_derived()
    }

    /// 推断默认旋转枢轴
    ///
    /// 优先级：显式圆心 > 点列质心 > 起终点中点 > 矩形中心。
    pub fn default_pivot(&self) -> Point2 {
        match self {
            Shape::Circle(c) => c.center,
            Shape::CircleByThreePoints(c) => c.center,
            Shape::ArcByThreePoints(a) => a.center,
            Shape::ArcByRadiusChord(a) => a.center,
            Shape::Polygon(p) => centroid(&p.points),
            Shape::BezierSpline(b) => centroid(&b.points),
            Shape::SegmentSpline(s) => centroid(&s.points),
            Shape::Line(l) => math::midpoint(l.start, l.end),
            Shape::Rectangle(r) => r.center(),
        }
    }

    /// 分解为渲染图元，供外部画笔绘制
    pub fn render_primitives(&self) -> Vec<RenderPrimitive> {
        match self {
            Shape::Line(l) => vec![RenderPrimitive::Segment {
                start: l.start,
                end: l.end,
            }],
            Shape::Circle(c) => vec![RenderPrimitive::Circle {
                center: c.center,
                radius: c.radius,
            }],
            Shape::CircleByThreePoints(c) => vec![RenderPrimitive::Circle {
                center: c.center,
                radius: c.radius,
            }],
            Shape::Rectangle(r) => closed_segments(&r.corners()),
            Shape::Polygon(p) => closed_segments(&p.points),
            Shape::ArcByThreePoints(a) => vec![RenderPrimitive::Arc {
                center: a.center,
                radius: a.radius,
                start_angle: a.start_angle,
                span_angle: a.span_angle,
            }],
            Shape::ArcByRadiusChord(a) => vec![RenderPrimitive::Arc {
                center: a.center,
                radius: a.radius,
                start_angle: a.start_angle,
                span_angle: a.span_angle,
            }],
            Shape::BezierSpline(b) => vec![RenderPrimitive::Path(b.path())],
            Shape::SegmentSpline(s) => vec![RenderPrimitive::Path(s.samples().collect())],
        }
    }

    /// 获取形状的包围盒
    pub fn bounding_box(&self) -> BoundingBox2 {
        match self {
            Shape::Line(l) => BoundingBox2::from_points([l.start, l.end]),
            Shape::Circle(c) => circle_bbox(c.center, c.radius),
            Shape::CircleByThreePoints(c) => circle_bbox(c.center, c.radius),
            Shape::Rectangle(r) => BoundingBox2::from_points(r.corners()),
            Shape::Polygon(p) => BoundingBox2::from_points(p.points.iter().copied()),
            Shape::ArcByThreePoints(a) => {
                arc_bbox(a.center, a.radius, a.start_angle, a.span_angle)
            }
            Shape::ArcByRadiusChord(a) => {
                arc_bbox(a.center, a.radius, a.start_angle, a.span_angle)
            }
            Shape::BezierSpline(b) => BoundingBox2::from_points(b.path()),
            Shape::SegmentSpline(s) => BoundingBox2::from_points(s.samples()),
        }
    }
}

/// 折线总长
fn polyline_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|w| math::distance(w[0], w[1]))
        .sum()
}

/// 点列质心
fn centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point2::new(sx / n, sy / n)
}

/// 闭合点列 → 首尾相连的线段图元
fn closed_segments(points: &[Point2]) -> Vec<RenderPrimitive> {
    (0..points.len())
        .map(|i| RenderPrimitive::Segment {
            start: points[i],
            end: points[(i + 1) % points.len()],
        })
        .collect()
}

fn circle_bbox(center: Point2, radius: f64) -> BoundingBox2 {
    BoundingBox2::new(
        Point2::new(center.x - radius, center.y - radius),
        Point2::new(center.x + radius, center.y + radius),
    )
}

/// 圆弧包围盒：端点加上落入扫掠范围内的象限极值点
fn arc_bbox(center: Point2, radius: f64, start_angle: f64, span_angle: f64) -> BoundingBox2 {
    let point_at = |angle: f64| center + math::polar_offset(radius, angle);
    let mut bbox = BoundingBox2::from_points([point_at(start_angle), point_at(start_angle + span_angle)]);

    for quadrant in [0.0, 90.0, 180.0, 270.0] {
        let offset = math::normalize_angle_deg(quadrant - start_angle);
        if offset <= span_angle {
            bbox.expand_to_include(&point_at(quadrant));
        }
    }
    bbox
}

/// 线段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// 计算线段长度（允许为0）
    pub fn length(&self) -> f64 {
        math::distance(self.start, self.end)
    }

    pub fn midpoint(&self) -> Point2 {
        math::midpoint(self.start, self.end)
    }
}

/// 圆（圆心+半径）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }
}

/// 三点圆
///
/// 保存三个定义点，圆心和半径为派生量。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleByThreePoints {
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
    pub center: Point2,
    pub radius: f64,
}

impl CircleByThreePoints {
    pub fn from_points(p1: Point2, p2: Point2, p3: Point2) -> Result<Self, GeometryError> {
        let (center, radius) = kernel::circumcircle(p1, p2, p3)?;
        Ok(Self {
            p1,
            p2,
            p3,
            center,
            radius,
        })
    }

    pub fn recompute(&mut self) -> Result<(), GeometryError> {
        let (center, radius) = kernel::circumcircle(self.p1, self.p2, self.p3)?;
        self.center = center;
        self.radius = radius;
        Ok(())
    }
}

/// 轴对齐矩形
///
/// 定义点是两个对角点，原样保存 - 归一化只发生在派生参数
/// （最小角点+宽高）上。旋转作用于定义角点，往返旋转精确还原。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub corner_a: Point2,
    pub corner_b: Point2,
    /// 最小坐标角点（派生）
    pub top_left: Point2,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// 从任意两个对角点构造，归一化保证宽高非负
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        let mut rect = Self {
            corner_a: a,
            corner_b: b,
            top_left: Point2::origin(),
            width: 0.0,
            height: 0.0,
        };
        rect.recompute();
        rect
    }

    /// 从定义角点重算归一化参数（幂等，不会失败）
    pub fn recompute(&mut self) {
        let min = Point2::new(
            self.corner_a.x.min(self.corner_b.x),
            self.corner_a.y.min(self.corner_b.y),
        );
        let max = Point2::new(
            self.corner_a.x.max(self.corner_b.x),
            self.corner_a.y.max(self.corner_b.y),
        );
        self.top_left = min;
        self.width = max.x - min.x;
        self.height = max.y - min.y;
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    pub fn center(&self) -> Point2 {
        Point2::new(
            self.top_left.x + self.width / 2.0,
            self.top_left.y + self.height / 2.0,
        )
    }

    /// 四个角点，从最小角点起绕一圈
    pub fn corners(&self) -> [Point2; 4] {
        let (x, y) = (self.top_left.x, self.top_left.y);
        [
            Point2::new(x, y),
            Point2::new(x + self.width, y),
            Point2::new(x + self.width, y + self.height),
            Point2::new(x, y + self.height),
        ]
    }
}

/// 多边形（有序顶点，闭合回路）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point2>,
}

impl Polygon {
    /// 从顶点列表构造，至少3个点
    pub fn from_points(points: Vec<Point2>) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::InvalidShapeArity {
                required: 3,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// 正多边形：圆心+参考点+边数+内接/外切模式
    pub fn regular(
        center: Point2,
        reference: Point2,
        sides: usize,
        mode: PolygonMode,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            points: kernel::regular_polygon(center, reference, sides, mode)?,
        })
    }

    /// 闭合回路周长
    pub fn perimeter(&self) -> f64 {
        (0..self.points.len())
            .map(|i| {
                math::distance(self.points[i], self.points[(i + 1) % self.points.len()])
            })
            .sum()
    }
}

/// 三点圆弧
///
/// 派生参数遵循内核的"短弧优先"方向规则。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcByThreePoints {
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
    pub center: Point2,
    pub radius: f64,
    /// 起始角（度）
    pub start_angle: f64,
    /// 角度跨度（度，非负）
    pub span_angle: f64,
}

impl ArcByThreePoints {
    pub fn from_points(p1: Point2, p2: Point2, p3: Point2) -> Result<Self, GeometryError> {
        let params = kernel::arc_from_three_points(p1, p2, p3)?;
        Ok(Self {
            p1,
            p2,
            p3,
            center: params.center,
            radius: params.radius,
            start_angle: params.start_angle,
            span_angle: params.span_angle,
        })
    }

    pub fn recompute(&mut self) -> Result<(), GeometryError> {
        let params = kernel::arc_from_three_points(self.p1, self.p2, self.p3)?;
        self.apply(params);
        Ok(())
    }

    fn apply(&mut self, params: ArcParams) {
        self.center = params.center;
        self.radius = params.radius;
        self.start_angle = params.start_angle;
        self.span_angle = params.span_angle;
    }
}

/// 半径+弦圆弧
///
/// 定义点是圆心和两个边界点（半径点=起点，弦点=终点），半径和
/// 角度从边界点派生。用户构造路径走 `from_center_chord`（固定
/// 180°半圆），DXF 解码路径走 `from_boundary_points`（任意跨度）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcByRadiusChord {
    pub center: Point2,
    /// 圆上的起点
    pub radius_point: Point2,
    /// 圆上的终点（弦端点）
    pub chord_point: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub span_angle: f64,
}

impl ArcByRadiusChord {
    /// 用户构造：圆心+弦端点+半径，产生以弦方向为中心的半圆
    pub fn from_center_chord(
        center: Point2,
        chord_end: Point2,
        radius: f64,
    ) -> Result<Self, GeometryError> {
        let params = kernel::arc_from_radius_chord(center, chord_end, radius)?;
        let radius_point = center + math::polar_offset(radius, params.start_angle);
        let chord_point =
            center + math::polar_offset(radius, params.start_angle + params.span_angle);
        Ok(Self {
            center,
            radius_point,
            chord_point,
            radius: params.radius,
            start_angle: params.start_angle,
            span_angle: params.span_angle,
        })
    }

    /// 解码构造：圆心+两个边界点，跨度为从起点逆时针到终点
    ///
    /// 不做互补弧翻转 - 方向翻转只属于三点构造的策略。
    pub fn from_boundary_points(center: Point2, radius_point: Point2, chord_point: Point2) -> Self {
        let mut arc = Self {
            center,
            radius_point,
            chord_point,
            radius: 0.0,
            start_angle: 0.0,
            span_angle: 0.0,
        };
        arc.recompute();
        arc
    }

    /// 从边界点重算半径与角度（幂等，不会失败）
    pub fn recompute(&mut self) {
        self.radius = math::distance(self.center, self.radius_point);
        let start = math::angle_deg(self.center, self.radius_point);
        let end = math::angle_deg(self.center, self.chord_point);
        self.start_angle = math::normalize_angle_deg(start);
        self.span_angle = math::normalize_angle_deg(end - start);
    }
}

/// 贝塞尔样条（控制点近似曲线）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierSpline {
    pub points: Vec<Point2>,
    /// 采样段数（导出/渲染精度）
    pub segments: usize,
}

impl BezierSpline {
    /// 至少2个控制点可渲染；完成的曲线（持久化）要求3个，
    /// 由交互层在收尾时检查。
    pub fn from_points(points: Vec<Point2>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::InvalidShapeArity {
                required: 2,
                actual: points.len(),
            });
        }
        Ok(Self {
            points,
            segments: BEZIER_SAMPLES,
        })
    }

    /// 等参数采样路径
    pub fn path(&self) -> Vec<Point2> {
        kernel::bezier_path(&self.points, self.segments)
    }
}

/// 分段样条（经过所有点的平滑路径）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentSpline {
    pub points: Vec<Point2>,
}

impl SegmentSpline {
    pub fn from_points(points: Vec<Point2>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::InvalidShapeArity {
                required: 2,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// 惰性采样迭代器，可随时从当前点列重启
    pub fn samples(&self) -> SplineSampler<'_> {
        SplineSampler::new(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPSILON, "{a} != {b}");
    }

    #[test]
    fn test_line_length() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_close(line.length(), 5.0);
    }

    #[test]
    fn test_zero_length_line_allowed() {
        let p = Point2::new(2.0, 2.0);
        let line = Line::new(p, p);
        assert_close(line.length(), 0.0);
    }

    #[test]
    fn test_circle_circumference() {
        let circle = Circle::new(Point2::origin(), 1.0);
        assert_close(circle.circumference(), 2.0 * std::f64::consts::PI);
    }

    #[test]
    fn test_rectangle_normalization() {
        // 任意对角顺序都归一化为同一个矩形
        let r = Rectangle::from_corners(Point2::new(4.0, 2.0), Point2::new(0.0, 0.0));
        assert_close(r.top_left.x, 0.0);
        assert_close(r.top_left.y, 0.0);
        assert_close(r.width, 4.0);
        assert_close(r.height, 2.0);
        assert_close(r.perimeter(), 12.0);
    }

    #[test]
    fn test_polygon_arity() {
        let result = Polygon::from_points(vec![Point2::origin(), Point2::new(1.0, 0.0)]);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidShapeArity { required: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_polygon_perimeter_closed() {
        let p = Polygon::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 4.0),
        ])
        .unwrap();
        // 3 + 4 + 5（闭合边）
        assert_close(p.perimeter(), 12.0);
    }

    #[test]
    fn test_arc_three_points_length() {
        // 半径2的四分之一圆弧
        let arc = ArcByThreePoints::from_points(
            Point2::new(2.0, 0.0),
            Point2::origin() + math::polar_offset(2.0, 45.0),
            Point2::new(0.0, 2.0),
        )
        .unwrap();
        assert_close(arc.span_angle, 90.0);
        let shape = Shape::ArcByThreePoints(arc);
        assert_close(shape.total_length(), 2.0 * std::f64::consts::PI / 2.0);
    }

    #[test]
    fn test_arc_recompute_idempotent() {
        let mut arc = ArcByThreePoints::from_points(
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, 0.0),
        )
        .unwrap();
        let before = (arc.center, arc.radius, arc.start_angle, arc.span_angle);
        arc.recompute().unwrap();
        assert_close(arc.center.x, before.0.x);
        assert_close(arc.radius, before.1);
        assert_close(arc.start_angle, before.2);
        assert_close(arc.span_angle, before.3);
    }

    #[test]
    fn test_radius_chord_boundary_roundtrip() {
        let arc =
            ArcByRadiusChord::from_center_chord(Point2::origin(), Point2::new(10.0, 0.0), 10.0)
                .unwrap();
        assert_close(arc.span_angle, 180.0);

        // 用边界点重建应得到相同的派生参数
        let rebuilt =
            ArcByRadiusChord::from_boundary_points(arc.center, arc.radius_point, arc.chord_point);
        assert_close(rebuilt.radius, arc.radius);
        assert_close(rebuilt.start_angle, arc.start_angle);
        assert_close(rebuilt.span_angle, arc.span_angle);
    }

    #[test]
    fn test_rotation_roundtrip_all_shapes() {
        let pivot = Point2::new(5.0, -3.0);
        let angle = 33.0;
        let shapes = vec![
            Shape::Line(Line::new(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0))),
            Shape::Circle(Circle::new(Point2::new(1.0, 1.0), 4.0)),
            Shape::Rectangle(Rectangle::from_corners(
                Point2::new(-1.0, 2.0),
                Point2::new(3.0, 7.0),
            )),
            Shape::CircleByThreePoints(
                CircleByThreePoints::from_points(
                    Point2::new(0.0, 0.0),
                    Point2::new(4.0, 0.0),
                    Point2::new(4.0, 4.0),
                )
                .unwrap(),
            ),
            Shape::Polygon(
                Polygon::from_points(vec![
                    Point2::new(0.0, 0.0),
                    Point2::new(2.0, 0.0),
                    Point2::new(1.0, 3.0),
                ])
                .unwrap(),
            ),
            Shape::ArcByThreePoints(
                ArcByThreePoints::from_points(
                    Point2::new(1.0, 0.0),
                    Point2::new(0.0, 1.0),
                    Point2::new(-1.0, 0.0),
                )
                .unwrap(),
            ),
            Shape::ArcByRadiusChord(
                ArcByRadiusChord::from_center_chord(
                    Point2::origin(),
                    Point2::new(8.0, 0.0),
                    9.0,
                )
                .unwrap(),
            ),
            Shape::BezierSpline(
                BezierSpline::from_points(vec![
                    Point2::new(0.0, 0.0),
                    Point2::new(5.0, 8.0),
                    Point2::new(10.0, 0.0),
                ])
                .unwrap(),
            ),
            Shape::SegmentSpline(
                SegmentSpline::from_points(vec![
                    Point2::new(0.0, 0.0),
                    Point2::new(4.0, 4.0),
                    Point2::new(8.0, 0.0),
                ])
                .unwrap(),
            ),
        ];

        for mut shape in shapes {
            let original_len = shape.total_length();
            shape.rotate_around(angle, pivot).unwrap();
            shape.rotate_around(-angle, pivot).unwrap();
            // 长度在往返旋转后保持不变
            assert!(
                (shape.total_length() - original_len).abs() < 1e-6,
                "{} length drifted",
                shape.type_name()
            );
        }
    }

    #[test]
    fn test_rectangle_rotation_roundtrip() {
        // 非直角角度旋转再转回来，归一化参数必须还原
        let mut shape = Shape::Rectangle(Rectangle::from_corners(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 2.0),
        ));
        let pivot = shape.default_pivot();
        shape.rotate_around(100.0, pivot).unwrap();
        shape.rotate_around(-100.0, pivot).unwrap();
        if let Shape::Rectangle(r) = &shape {
            assert!((r.top_left.x - 0.0).abs() < 1e-6);
            assert!((r.top_left.y - 0.0).abs() < 1e-6);
            assert!((r.width - 4.0).abs() < 1e-6);
            assert!((r.height - 2.0).abs() < 1e-6);
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_rotation_restores_line_points() {
        let mut shape = Shape::Line(Line::new(Point2::new(1.0, 2.0), Point2::new(7.0, -4.0)));
        let pivot = Point2::new(3.0, 3.0);
        shape.rotate_around(123.4, pivot).unwrap();
        shape.rotate_around(-123.4, pivot).unwrap();
        if let Shape::Line(l) = &shape {
            assert!((l.start.x - 1.0).abs() < 1e-6);
            assert!((l.start.y - 2.0).abs() < 1e-6);
            assert!((l.end.x - 7.0).abs() < 1e-6);
            assert!((l.end.y - -4.0).abs() < 1e-6);
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_rotation_keeps_arc_center_consistent() {
        // 圆心与半径点必须一起旋转，避免半径漂移
        let mut shape = Shape::ArcByRadiusChord(
            ArcByRadiusChord::from_center_chord(
                Point2::new(2.0, 2.0),
                Point2::new(6.0, 2.0),
                5.0,
            )
            .unwrap(),
        );
        let radius_before = match &shape {
            Shape::ArcByRadiusChord(a) => a.radius,
            _ => unreachable!(),
        };
        shape.rotate_around(71.0, Point2::new(-10.0, 4.0)).unwrap();
        if let Shape::ArcByRadiusChord(a) = &shape {
            assert!((a.radius - radius_before).abs() < 1e-9);
            assert_close(a.span_angle, 180.0);
        }
    }

    #[test]
    fn test_default_pivot_inference() {
        let circle = Shape::Circle(Circle::new(Point2::new(3.0, 4.0), 2.0));
        assert_close(circle.default_pivot().x, 3.0);

        let line = Shape::Line(Line::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)));
        assert_close(line.default_pivot().x, 2.0);

        let rect = Shape::Rectangle(Rectangle::from_corners(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 2.0),
        ));
        assert_close(rect.default_pivot().x, 2.0);
        assert_close(rect.default_pivot().y, 1.0);

        let poly = Shape::Polygon(
            Polygon::from_points(vec![
                Point2::new(0.0, 0.0),
                Point2::new(3.0, 0.0),
                Point2::new(0.0, 3.0),
            ])
            .unwrap(),
        );
        assert_close(poly.default_pivot().x, 1.0);
    }

    #[test]
    fn test_render_primitives_counts() {
        let rect = Shape::Rectangle(Rectangle::from_corners(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 1.0),
        ));
        assert_eq!(rect.render_primitives().len(), 4);

        let bezier = Shape::BezierSpline(
            BezierSpline::from_points(vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 2.0),
                Point2::new(2.0, 0.0),
            ])
            .unwrap(),
        );
        match &bezier.render_primitives()[0] {
            RenderPrimitive::Path(path) => assert_eq!(path.len(), BEZIER_SAMPLES + 1),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_arc_bounding_box_includes_quadrant() {
        // 从 0° 跨 180° 的上半圆：包围盒必须包含顶部象限点 (0, r)
        let arc = ArcByRadiusChord::from_boundary_points(
            Point2::origin(),
            Point2::new(5.0, 0.0),
            Point2::new(-5.0, 0.0),
        );
        let bbox = Shape::ArcByRadiusChord(arc).bounding_box();
        assert_close(bbox.max.y, 5.0);
        assert_close(bbox.min.y, 0.0);
    }
}
