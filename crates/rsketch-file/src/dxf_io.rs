//! DXF文件导入/导出
//!
//! 支持AutoCAD DXF格式的双向转换，实体类型：LINE / CIRCLE / ARC /
//! (LW)POLYLINE / SPLINE。
//!
//! 写出有两种档案（profile），分别兼容不同的 DXF 消费端：
//! - `Simple`：R12 旧版。属性只有颜色索引和线型名；线宽通过
//!   按线宽生成并命名的图层表达（`Thickness_0.50` 这样的图层名
//!   编码线宽毫米值）；矩形/多边形写成闭合的老式 POLYLINE；
//!   两种样条都压平为多段线。
//! - `Advanced`：R2000。每实体 lineweight 属性（吸附到固定的
//!   标准线宽表）；矩形/多边形写成重复首点闭合的 LWPOLYLINE；
//!   贝塞尔样条写成真正的 SPLINE 实体（控制点原样），分段样条
//!   仍压平。
//!
//! 两种档案的数值策略刻意保持独立，不要合并。

use crate::document::Document;
use crate::error::FileError;
use rsketch_core::entity::Entity;
use rsketch_core::math::{self, Point2, EPSILON};
use rsketch_core::properties::{Color, LineType, Properties};
use rsketch_core::shape::{
    ArcByRadiusChord, BezierSpline, Circle, Line, Polygon, Rectangle, Shape,
};
use std::collections::BTreeMap;
use std::path::Path;

/// DXF写出档案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DxfProfile {
    /// R12旧版：颜色+线型，线宽走图层
    Simple,
    /// R2000：每实体线宽，真SPLINE
    Advanced,
}

/// ACI基础调色板（颜色, 索引）
///
/// 编码时先精确匹配，不中再按RGB欧氏距离取最近项 - 两种档案
/// 统一采用最近距离回退策略。
const BASIC_PALETTE: [(Color, u8); 10] = [
    (Color::BLACK, 0),
    (Color::RED, 1),
    (Color::YELLOW, 2),
    (Color::GREEN, 3),
    (Color::CYAN, 4),
    (Color::BLUE, 5),
    (Color::MAGENTA, 6),
    (Color::WHITE, 7),
    (Color::GRAY, 8),
    (Color::LIGHT_GRAY, 9),
];

/// DXF标准线宽表（百分之一毫米）
const STANDARD_LINEWEIGHTS: [i32; 24] = [
    0, 5, 9, 13, 15, 18, 20, 25, 30, 35, 40, 50, 53, 60, 70, 80, 90, 100, 106, 120, 140, 158,
    200, 211,
];

/// 从DXF文件导入
///
/// 不支持的实体类型静默跳过；文件级失败返回错误，调用方的内存
/// 文档不受影响。文件实体顺序即形状列表顺序。
pub fn import(path: &Path) -> Result<Document, FileError> {
    let drawing = dxf::Drawing::load_file(path).map_err(|e| FileError::DxfParse(e.to_string()))?;

    let mut document = Document::new();
    for entity in drawing.entities() {
        match convert_dxf_entity(entity) {
            Some(converted) => {
                document.add_entity(converted);
            }
            None => {
                tracing::warn!("skipping unsupported DXF entity");
            }
        }
    }

    document.set_file_path(path);
    document.mark_saved();

    tracing::info!(
        "Loaded {} entities from {}",
        document.entity_count(),
        path.display()
    );

    Ok(document)
}

/// 导出到DXF文件
///
/// 先写临时文件再改名，保存失败不会破坏已有文件。
pub fn export(document: &Document, path: &Path, profile: DxfProfile) -> Result<(), FileError> {
    let mut drawing = dxf::Drawing::new();
    drawing.header.version = match profile {
        DxfProfile::Simple => dxf::enums::AcadVersion::R12,
        DxfProfile::Advanced => dxf::enums::AcadVersion::R2000,
    };

    ensure_line_types(&mut drawing);

    // 简单档案：每个不同线宽生成一个图层
    let thickness_layers = match profile {
        DxfProfile::Simple => create_thickness_layers(document, &mut drawing),
        DxfProfile::Advanced => BTreeMap::new(),
    };

    for entity in document.iter() {
        let specific = convert_shape(&entity.shape, profile, &mut drawing);
        let mut dxf_entity = dxf::entities::Entity::new(specific);
        apply_attributes(
            &mut dxf_entity.common,
            &entity.properties,
            profile,
            &thickness_layers,
        );
        drawing.add_entity(dxf_entity);
    }

    let tmp = path.with_extension("dxf.tmp");
    drawing
        .save_file(&tmp)
        .map_err(|e| FileError::DxfWrite(e.to_string()))?;
    std::fs::rename(&tmp, path)?;

    tracing::info!(
        "Saved {} entities to {} ({:?} profile)",
        document.entity_count(),
        path.display(),
        profile
    );

    Ok(())
}

/// 简单档案的线宽图层：线宽毫米值编码在图层名里，解码端按名恢复
fn create_thickness_layers(
    document: &Document,
    drawing: &mut dxf::Drawing,
) -> BTreeMap<i64, String> {
    let mut layers = BTreeMap::new();
    for entity in document.iter() {
        let thickness = entity.properties.line_thickness;
        if thickness <= 0.0 {
            continue;
        }
        let key = (thickness * 100.0).round() as i64;
        layers.entry(key).or_insert_with(|| {
            let name = format!("Thickness_{:.2}", thickness);
            let mut layer = dxf::tables::Layer::default();
            layer.name = name.clone();
            drawing.add_layer(layer);
            name
        });
    }
    layers
}

/// 确保需要的线型表项存在
fn ensure_line_types(drawing: &mut dxf::Drawing) {
    for (name, description, pattern) in [
        ("DASHED", "Dashed line", vec![10.0, -5.0]),
        ("DASHDOT", "Dash dot line", vec![10.0, -3.0, 0.0, -3.0]),
        (
            "DASHDOT2",
            "Dash dot dot line",
            vec![10.0, -3.0, 0.0, -3.0, 0.0, -3.0],
        ),
    ] {
        let mut line_type = dxf::tables::LineType::default();
        line_type.name = name.to_string();
        line_type.description = description.to_string();
        line_type.total_pattern_length = pattern.iter().map(|v: &f64| v.abs()).sum();
        line_type.element_count = pattern.len() as i32;
        line_type.dash_dot_space_lengths = pattern;
        drawing.add_line_type(line_type);
    }
}

/// 设置实体的公共属性（颜色/线型/线宽或图层）
fn apply_attributes(
    common: &mut dxf::entities::EntityCommon,
    properties: &Properties,
    profile: DxfProfile,
    thickness_layers: &BTreeMap<i64, String>,
) {
    common.color = dxf::Color::from_index(color_to_aci(properties.color));
    common.line_type_name = line_type_name(properties.line_type).to_string();

    match profile {
        DxfProfile::Simple => {
            if properties.line_thickness > 0.0 {
                let key = (properties.line_thickness * 100.0).round() as i64;
                if let Some(layer) = thickness_layers.get(&key) {
                    common.layer = layer.clone();
                }
            }
        }
        DxfProfile::Advanced => {
            if properties.line_thickness > 0.0 {
                common.lineweight_enum_value = snap_lineweight(properties.line_thickness);
            }
        }
    }
}

/// 形状 → DXF实体数据
///
/// 曲线按档案压平或保留控制点；圆弧角度统一转成逆时针的
/// (start, end) 度数对。
fn convert_shape(
    shape: &Shape,
    profile: DxfProfile,
    drawing: &mut dxf::Drawing,
) -> dxf::entities::EntityType {
    match shape {
        Shape::Line(line) => {
            let mut dxf_line = dxf::entities::Line::default();
            dxf_line.p1 = dxf::Point::new(line.start.x, line.start.y, 0.0);
            dxf_line.p2 = dxf::Point::new(line.end.x, line.end.y, 0.0);
            dxf::entities::EntityType::Line(dxf_line)
        }

        Shape::Circle(circle) => circle_entity(circle.center, circle.radius),
        Shape::CircleByThreePoints(circle) => circle_entity(circle.center, circle.radius),

        Shape::ArcByThreePoints(arc) => {
            arc_entity(arc.center, arc.radius, arc.start_angle, arc.span_angle)
        }
        Shape::ArcByRadiusChord(arc) => {
            arc_entity(arc.center, arc.radius, arc.start_angle, arc.span_angle)
        }

        Shape::Rectangle(rect) => {
            closed_outline_entity(&rect.corners(), profile, drawing)
        }
        Shape::Polygon(polygon) => {
            closed_outline_entity(&polygon.points, profile, drawing)
        }

        Shape::BezierSpline(spline) => match profile {
            // 压平为多段线，采样密度决定导出精度
            DxfProfile::Simple => polyline_entity(&spline.path(), false, drawing),
            // 真SPLINE：控制点原样写出
            DxfProfile::Advanced => {
                let mut dxf_spline = dxf::entities::Spline::default();
                dxf_spline.degree_of_curve = 3;
                dxf_spline.control_points = spline
                    .points
                    .iter()
                    .map(|p| dxf::Point::new(p.x, p.y, 0.0))
                    .collect();
                dxf::entities::EntityType::Spline(dxf_spline)
            }
        },

        Shape::SegmentSpline(spline) => {
            let samples: Vec<Point2> = spline.samples().collect();
            match profile {
                DxfProfile::Simple => polyline_entity(&samples, false, drawing),
                DxfProfile::Advanced => lwpolyline_entity(&samples),
            }
        }
    }
}

fn circle_entity(center: Point2, radius: f64) -> dxf::entities::EntityType {
    let mut dxf_circle = dxf::entities::Circle::default();
    dxf_circle.center = dxf::Point::new(center.x, center.y, 0.0);
    dxf_circle.radius = radius;
    dxf::entities::EntityType::Circle(dxf_circle)
}

fn arc_entity(
    center: Point2,
    radius: f64,
    start_angle: f64,
    span_angle: f64,
) -> dxf::entities::EntityType {
    let (start, end) = arc_angles_ccw(start_angle, span_angle);
    let mut dxf_arc = dxf::entities::Arc::default();
    dxf_arc.center = dxf::Point::new(center.x, center.y, 0.0);
    dxf_arc.radius = radius;
    dxf_arc.start_angle = start;
    dxf_arc.end_angle = end;
    dxf::entities::EntityType::Arc(dxf_arc)
}

/// 矩形/多边形轮廓：简单档案用闭合POLYLINE，
/// 高级档案用重复首点的LWPOLYLINE
fn closed_outline_entity(
    points: &[Point2],
    profile: DxfProfile,
    drawing: &mut dxf::Drawing,
) -> dxf::entities::EntityType {
    match profile {
        DxfProfile::Simple => polyline_entity(points, true, drawing),
        DxfProfile::Advanced => {
            let mut closed: Vec<Point2> = points.to_vec();
            if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
                if math::distance(first, last) > EPSILON {
                    closed.push(first);
                }
            }
            lwpolyline_entity(&closed)
        }
    }
}

/// 老式POLYLINE实体
fn polyline_entity(
    points: &[Point2],
    closed: bool,
    drawing: &mut dxf::Drawing,
) -> dxf::entities::EntityType {
    let mut poly = dxf::entities::Polyline::default();
    poly.set_is_closed(closed);
    for p in points {
        poly.add_vertex(
            drawing,
            dxf::entities::Vertex::new(dxf::Point::new(p.x, p.y, 0.0)),
        );
    }
    dxf::entities::EntityType::Polyline(poly)
}

/// LWPOLYLINE实体（闭合用重复首点表达，不设标志位）
fn lwpolyline_entity(points: &[Point2]) -> dxf::entities::EntityType {
    let mut lwpoly = dxf::entities::LwPolyline::default();
    lwpoly.vertices = points
        .iter()
        .map(|p| {
            let mut vertex = dxf::LwPolylineVertex::default();
            vertex.x = p.x;
            vertex.y = p.y;
            vertex
        })
        .collect();
    dxf::entities::EntityType::LwPolyline(lwpoly)
}

/// DXF实体 → 形状实体
///
/// 不支持的类型返回 None（跳过，不中断文件遍历）。
fn convert_dxf_entity(entity: &dxf::entities::Entity) -> Option<Entity> {
    let shape = match &entity.specific {
        dxf::entities::EntityType::Line(line) => Shape::Line(Line::new(
            Point2::new(line.p1.x, line.p1.y),
            Point2::new(line.p2.x, line.p2.y),
        )),

        dxf::entities::EntityType::Circle(circle) => Shape::Circle(Circle::new(
            Point2::new(circle.center.x, circle.center.y),
            circle.radius,
        )),

        dxf::entities::EntityType::Arc(arc) => {
            // 用两个角度边界点重建半径+弦圆弧
            let center = Point2::new(arc.center.x, arc.center.y);
            let radius_point = center + math::polar_offset(arc.radius, arc.start_angle);
            let chord_point = center + math::polar_offset(arc.radius, arc.end_angle);
            Shape::ArcByRadiusChord(ArcByRadiusChord::from_boundary_points(
                center,
                radius_point,
                chord_point,
            ))
        }

        dxf::entities::EntityType::LwPolyline(lwpoly) => {
            let points: Vec<Point2> = lwpoly
                .vertices
                .iter()
                .map(|v| Point2::new(v.x, v.y))
                .collect();
            classify_polyline(points)?
        }

        dxf::entities::EntityType::Polyline(poly) => {
            let points: Vec<Point2> = poly
                .vertices()
                .map(|v| Point2::new(v.location.x, v.location.y))
                .collect();
            classify_polyline(points)?
        }

        dxf::entities::EntityType::Spline(spline) => {
            let control_points: Vec<Point2> = spline
                .control_points
                .iter()
                .map(|p| Point2::new(p.x, p.y))
                .collect();
            Shape::BezierSpline(BezierSpline::from_points(control_points).ok()?)
        }

        _ => return None,
    };

    let properties = extract_attributes(&entity.common);
    Some(Entity::new(shape).with_properties(properties))
}

/// 多段线分类：去掉闭合重复点后，恰好4个顶点且邻边垂直 → 矩形；
/// ≥3 → 多边形；2 → 退化为线段
fn classify_polyline(mut points: Vec<Point2>) -> Option<Shape> {
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if points.len() > 2 && math::distance(first, last) < EPSILON {
            points.pop();
        }
    }

    match points.len() {
        0 | 1 => None,
        2 => Some(Shape::Line(Line::new(points[0], points[1]))),
        4 if is_rectangle(&points) => {
            let bbox = rsketch_core::math::BoundingBox2::from_points(points.iter().copied());
            Some(Shape::Rectangle(Rectangle::from_corners(bbox.min, bbox.max)))
        }
        _ => Polygon::from_points(points).ok().map(Shape::Polygon),
    }
}

/// 4点是否构成矩形：所有相邻边向量（归一化后）两两垂直
fn is_rectangle(points: &[Point2]) -> bool {
    if points.len() != 4 {
        return false;
    }
    for i in 0..4 {
        let p1 = points[i];
        let p2 = points[(i + 1) % 4];
        let p3 = points[(i + 2) % 4];
        let v1 = p2 - p1;
        let v2 = p3 - p2;
        if v1.norm() < EPSILON || v2.norm() < EPSILON {
            return false;
        }
        let dot = v1.normalize().dot(&v2.normalize());
        if dot.abs() > EPSILON {
            return false;
        }
    }
    true
}

/// 提取DXF实体的公共属性
fn extract_attributes(common: &dxf::entities::EntityCommon) -> Properties {
    let mut properties = Properties::default();

    if let Some(index) = common.color.index() {
        properties.color = aci_to_color(index as u8);
    }

    properties.line_type = line_type_from_name(&common.line_type_name);

    // 优先用实体自己的lineweight，否则从线宽图层的命名里恢复
    // （简单档案）
    if common.lineweight_enum_value > 0 {
        properties.line_thickness = common.lineweight_enum_value as f64 / 100.0;
    } else if let Some(thickness) = thickness_from_layer_name(&common.layer) {
        properties.line_thickness = thickness;
    }

    properties
}

/// 从线宽图层名恢复线宽（`Thickness_0.50` → 0.5）
fn thickness_from_layer_name(layer: &str) -> Option<f64> {
    layer
        .strip_prefix("Thickness_")
        .and_then(|suffix| suffix.parse::<f64>().ok())
        .filter(|&t| t > 0.0)
}

/// 圆弧导出角度归一化
///
/// DXF的圆弧角度是从正X轴起的绝对逆时针度数，且必须 end > start。
/// 返回 (start mod 360, start + span)，end ≤ start 时加 360 保证
/// 始终逆时针扫掠。往返正确性依赖这一步。
fn arc_angles_ccw(start_angle: f64, span_angle: f64) -> (f64, f64) {
    let start = math::normalize_angle_deg(start_angle);
    let span = math::normalize_angle_deg(span_angle);
    let mut end = math::normalize_angle_deg(start + span);
    if end <= start {
        end += 360.0;
    }
    (start, end)
}

/// 线型 → DXF线型名
fn line_type_name(line_type: LineType) -> &'static str {
    match line_type {
        LineType::Solid => "CONTINUOUS",
        LineType::Dash => "DASHED",
        LineType::DashDot => "DASHDOT",
        LineType::DashDotDot => "DASHDOT2",
    }
}

/// DXF线型名 → 线型（未知/ByLayer 一律按实线）
fn line_type_from_name(name: &str) -> LineType {
    match name {
        "DASHED" => LineType::Dash,
        "DASHDOT" => LineType::DashDot,
        "DASHDOT2" | "DIVIDE" => LineType::DashDotDot,
        _ => LineType::Solid,
    }
}

/// RGB → AutoCAD颜色索引
///
/// 先精确匹配基础调色板，不中则取RGB欧氏距离最近的索引。
fn color_to_aci(color: Color) -> u8 {
    for (palette_color, index) in BASIC_PALETTE {
        if palette_color == color {
            return index;
        }
    }

    let mut best = 7u8;
    let mut best_distance = f64::MAX;
    for (palette_color, index) in BASIC_PALETTE {
        let dr = color.r as f64 - palette_color.r as f64;
        let dg = color.g as f64 - palette_color.g as f64;
        let db = color.b as f64 - palette_color.b as f64;
        let distance = (dr * dr + dg * dg + db * db).sqrt();
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}

/// AutoCAD颜色索引 → RGB（未映射的索引默认黑色）
fn aci_to_color(aci: u8) -> Color {
    BASIC_PALETTE
        .iter()
        .find(|(_, index)| *index == aci)
        .map(|(color, _)| *color)
        .unwrap_or(Color::BLACK)
}

/// 线宽（毫米）吸附到最近的DXF标准线宽（百分之一毫米）
fn snap_lineweight(thickness_mm: f64) -> i16 {
    let target = (thickness_mm * 100.0).round() as i32;
    STANDARD_LINEWEIGHTS
        .iter()
        .min_by_key(|&&v| (v - target).abs())
        .copied()
        .unwrap_or(0) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsketch_core::kernel::BEZIER_SAMPLES;
    use rsketch_core::shape::{ArcByThreePoints, SegmentSpline};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn test_color_to_aci_exact_and_nearest() {
        assert_eq!(color_to_aci(Color::RED), 1);
        assert_eq!(color_to_aci(Color::BLACK), 0);
        // 接近红色 → 最近距离回退到红色
        assert_eq!(color_to_aci(Color::new(250, 10, 10)), 1);
        // 深灰 → 黑
        assert_eq!(color_to_aci(Color::new(10, 10, 10)), 0);
    }

    #[test]
    fn test_aci_to_color_default_black() {
        assert_eq!(aci_to_color(1), Color::RED);
        assert_eq!(aci_to_color(9), Color::LIGHT_GRAY);
        assert_eq!(aci_to_color(77), Color::BLACK);
    }

    #[test]
    fn test_thickness_from_layer_name() {
        assert_eq!(thickness_from_layer_name("Thickness_0.50"), Some(0.5));
        assert_eq!(thickness_from_layer_name("Thickness_2.00"), Some(2.0));
        assert_eq!(thickness_from_layer_name("Walls"), None);
        assert_eq!(thickness_from_layer_name("Thickness_abc"), None);
    }

    #[test]
    fn test_snap_lineweight() {
        assert_eq!(snap_lineweight(1.0), 100);
        assert_eq!(snap_lineweight(0.25), 25);
        assert_eq!(snap_lineweight(0.22), 20);
        assert_eq!(snap_lineweight(10.0), 211);
    }

    #[test]
    fn test_arc_angles_ccw() {
        let (start, end) = arc_angles_ccw(0.0, 90.0);
        assert!((start - 0.0).abs() < EPSILON);
        assert!((end - 90.0).abs() < EPSILON);

        // 跨越0°：270° + 180° → end 必须加 360
        let (start, end) = arc_angles_ccw(270.0, 180.0);
        assert!((start - 270.0).abs() < EPSILON);
        assert!((end - 450.0).abs() < EPSILON);
        assert!(end > start);
    }

    #[test]
    fn test_is_rectangle() {
        let rect = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert!(is_rectangle(&rect));

        let quad = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(5.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert!(!is_rectangle(&quad));
    }

    #[test]
    fn test_classify_polyline() {
        // 含闭合重复点的矩形
        let rect = classify_polyline(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(0.0, 0.0),
        ])
        .unwrap();
        match rect {
            Shape::Rectangle(r) => {
                assert!((r.top_left.x - 0.0).abs() < EPSILON);
                assert!((r.width - 4.0).abs() < EPSILON);
                assert!((r.height - 2.0).abs() < EPSILON);
            }
            other => panic!("expected Rectangle, got {}", other.type_name()),
        }

        // 非直角四边形 → 多边形
        let quad = classify_polyline(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(5.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap();
        assert!(matches!(quad, Shape::Polygon(_)));

        // 两点退化为线段
        let line = classify_polyline(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]).unwrap();
        assert!(matches!(line, Shape::Line(_)));
    }

    #[test]
    fn test_line_roundtrip_advanced() {
        let path = temp_path("rsketch_line_advanced.dxf");

        let mut doc = Document::new();
        doc.add_entity(
            Entity::new(Shape::Line(Line::new(
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 5.0),
            )))
            .with_properties(
                Properties::default()
                    .with_color(Color::RED)
                    .with_thickness(1.0),
            ),
        );

        export(&doc, &path, DxfProfile::Advanced).expect("export failed");
        let loaded = import(&path).expect("import failed");

        assert_eq!(loaded.entity_count(), 1);
        let entity = loaded.get(0).unwrap();
        match &entity.shape {
            Shape::Line(l) => {
                assert!((l.start.x - 0.0).abs() < 1e-6);
                assert!((l.end.x - 10.0).abs() < 1e-6);
                assert!((l.end.y - 5.0).abs() < 1e-6);
            }
            other => panic!("expected Line, got {}", other.type_name()),
        }
        assert_eq!(entity.properties.color, Color::RED);
        assert!((entity.properties.line_thickness - 1.0).abs() < 1e-6);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_rectangle_roundtrip_simple() {
        let path = temp_path("rsketch_rect_simple.dxf");

        let mut doc = Document::new();
        doc.add_entity(
            Entity::new(Shape::Rectangle(Rectangle::from_corners(
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 2.0),
            )))
            .with_properties(Properties::default().with_thickness(0.5)),
        );

        export(&doc, &path, DxfProfile::Simple).expect("export failed");
        let loaded = import(&path).expect("import failed");

        assert_eq!(loaded.entity_count(), 1);
        let entity = loaded.get(0).unwrap();
        match &entity.shape {
            Shape::Rectangle(r) => {
                assert!((r.width - 4.0).abs() < 1e-6);
                assert!((r.height - 2.0).abs() < 1e-6);
            }
            other => panic!("expected Rectangle, got {}", other.type_name()),
        }
        // 线宽通过图层往返恢复
        assert!((entity.properties.line_thickness - 0.5).abs() < 1e-6);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_arc_roundtrip_preserves_geometry() {
        let path = temp_path("rsketch_arc.dxf");

        // 单位圆上的四分之一弧（0° → 90°）
        let arc = ArcByThreePoints::from_points(
            Point2::new(1.0, 0.0),
            Point2::origin() + math::polar_offset(1.0, 45.0),
            Point2::new(0.0, 1.0),
        )
        .unwrap();
        let mut doc = Document::new();
        doc.add_entity(Entity::new(Shape::ArcByThreePoints(arc)));

        export(&doc, &path, DxfProfile::Advanced).expect("export failed");
        let loaded = import(&path).expect("import failed");

        // ARC导入为半径+弦圆弧，几何参数不变
        match &loaded.get(0).unwrap().shape {
            Shape::ArcByRadiusChord(a) => {
                assert!((a.center.x - 0.0).abs() < 1e-6);
                assert!((a.radius - 1.0).abs() < 1e-6);
                assert!((a.start_angle - 0.0).abs() < 1e-6);
                assert!((a.span_angle - 90.0).abs() < 1e-6);
            }
            other => panic!("expected ArcByRadiusChord, got {}", other.type_name()),
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_spline_control_points_roundtrip_advanced() {
        let path = temp_path("rsketch_spline_advanced.dxf");

        let control = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 8.0),
            Point2::new(10.0, -2.0),
            Point2::new(15.0, 3.0),
        ];
        let mut doc = Document::new();
        doc.add_entity(Entity::new(Shape::BezierSpline(
            BezierSpline::from_points(control.clone()).unwrap(),
        )));

        export(&doc, &path, DxfProfile::Advanced).expect("export failed");
        let loaded = import(&path).expect("import failed");

        match &loaded.get(0).unwrap().shape {
            Shape::BezierSpline(b) => {
                assert_eq!(b.points.len(), control.len());
                for (a, e) in b.points.iter().zip(&control) {
                    assert!(math::distance(*a, *e) < 1e-6);
                }
            }
            other => panic!("expected BezierSpline, got {}", other.type_name()),
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_bezier_flattened_in_simple_profile() {
        let path = temp_path("rsketch_spline_simple.dxf");

        let mut doc = Document::new();
        doc.add_entity(Entity::new(Shape::BezierSpline(
            BezierSpline::from_points(vec![
                Point2::new(0.0, 0.0),
                Point2::new(5.0, 8.0),
                Point2::new(10.0, 0.0),
            ])
            .unwrap(),
        )));

        export(&doc, &path, DxfProfile::Simple).expect("export failed");
        let loaded = import(&path).expect("import failed");

        // 压平后的多段线点数太多，不可能被识别为矩形/线段
        match &loaded.get(0).unwrap().shape {
            Shape::Polygon(p) => assert_eq!(p.points.len(), BEZIER_SAMPLES + 1),
            other => panic!("expected flattened Polygon, got {}", other.type_name()),
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_segment_spline_flattened() {
        let path = temp_path("rsketch_segspline.dxf");

        let mut doc = Document::new();
        doc.add_entity(Entity::new(Shape::SegmentSpline(
            SegmentSpline::from_points(vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 5.0),
                Point2::new(20.0, 0.0),
            ])
            .unwrap(),
        )));

        export(&doc, &path, DxfProfile::Advanced).expect("export failed");
        let loaded = import(&path).expect("import failed");
        assert!(matches!(
            loaded.get(0).unwrap().shape,
            Shape::Polygon(_)
        ));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_import_missing_file_fails_softly() {
        let result = import(Path::new("/nonexistent/rsketch_missing.dxf"));
        assert!(matches!(result, Err(FileError::DxfParse(_))));
    }

    #[test]
    fn test_insertion_order_preserved_on_import() {
        let path = temp_path("rsketch_order.dxf");

        let mut doc = Document::new();
        doc.add_entity(Entity::new(Shape::Line(Line::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
        ))));
        doc.add_entity(Entity::new(Shape::Circle(Circle::new(
            Point2::new(5.0, 5.0),
            2.0,
        ))));
        doc.add_entity(Entity::new(Shape::Line(Line::new(
            Point2::new(9.0, 0.0),
            Point2::new(9.0, 9.0),
        ))));

        export(&doc, &path, DxfProfile::Advanced).expect("export failed");
        let loaded = import(&path).expect("import failed");

        let names: Vec<&str> = loaded.iter().map(|e| e.shape.type_name()).collect();
        assert_eq!(names, vec!["Line", "Circle", "Line"]);

        std::fs::remove_file(&path).ok();
    }
}
