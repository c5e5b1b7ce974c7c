//! 绘制圆弧 Action（三点 / 半径+弦）

use crate::action::{
    Action, ActionContext, ActionResult, ActionType, MouseButton, PreviewGeometry,
};
use rsketch_core::error::GeometryError;
use rsketch_core::math::Point2;
use rsketch_core::shape::{ArcByRadiusChord, ArcByThreePoints, Line, Shape};

/// 绘制三点圆弧 Action
///
/// 起点 → 弧上一点 → 终点。共线时构造失败，清空缓冲并上报错误。
pub struct DrawArcThreePointsAction {
    points: Vec<Point2>,
}

impl DrawArcThreePointsAction {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }
}

impl Default for DrawArcThreePointsAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawArcThreePointsAction {
    fn action_type(&self) -> ActionType {
        ActionType::DrawArcThreePoints
    }

    fn reset(&mut self) {
        self.points.clear();
    }

    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult {
        match button {
            MouseButton::Left => {
                let point = ctx.effective_point();
                self.on_coordinate(ctx, point)
            }
            MouseButton::Right => {
                if self.points.is_empty() {
                    ActionResult::Cancel
                } else {
                    self.reset();
                    ActionResult::Continue
                }
            }
            MouseButton::Middle => ActionResult::Continue,
        }
    }

    fn on_coordinate(&mut self, _ctx: &ActionContext, coord: Point2) -> ActionResult {
        self.points.push(coord);
        if self.points.len() < 3 {
            return ActionResult::Continue;
        }

        let result = ArcByThreePoints::from_points(self.points[0], self.points[1], self.points[2]);
        self.reset();
        match result {
            Ok(arc) => ActionResult::CreateShapes(vec![Shape::ArcByThreePoints(arc)]),
            Err(e) => {
                tracing::warn!("three-point arc construction failed: {}", e);
                ActionResult::Error(e)
            }
        }
    }

    fn on_command(&mut self, _ctx: &ActionContext, _cmd: &str) -> Option<ActionResult> {
        None
    }

    fn get_prompt(&self) -> &str {
        match self.points.len() {
            0 => "指定弧起点:",
            1 => "指定弧上一点:",
            _ => "指定弧终点:",
        }
    }

    fn get_preview(&self, ctx: &ActionContext) -> Vec<PreviewGeometry> {
        let mut previews = Vec::new();
        if self.points.len() == 2 {
            if let Ok(arc) =
                ArcByThreePoints::from_points(self.points[0], self.points[1], ctx.effective_point())
            {
                previews.push(PreviewGeometry::new(Shape::ArcByThreePoints(arc)));
            }
        }
        if let Some(&last) = self.points.last() {
            previews.push(PreviewGeometry::reference(Shape::Line(Line::new(
                last,
                ctx.effective_point(),
            ))));
        }
        previews
    }
}

/// 半径+弦圆弧绘制状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RadiusChordStatus {
    /// 等待设置圆心
    SetCenter,
    /// 等待设置弦端点
    SetChordEnd,
    /// 等待输入半径数值
    SetRadius,
}

/// 绘制半径+弦圆弧 Action
///
/// 圆心 → 弦端点 → 数值半径。半径小于圆心到弦端点的距离时保留
/// 两个已输入的点，提示重新输入半径（而不是清空重来）。
pub struct DrawArcRadiusChordAction {
    status: RadiusChordStatus,
    center: Option<Point2>,
    chord_end: Option<Point2>,
}

impl DrawArcRadiusChordAction {
    pub fn new() -> Self {
        Self {
            status: RadiusChordStatus::SetCenter,
            center: None,
            chord_end: None,
        }
    }
}

impl Default for DrawArcRadiusChordAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawArcRadiusChordAction {
    fn action_type(&self) -> ActionType {
        ActionType::DrawArcRadiusChord
    }

    fn reset(&mut self) {
        self.status = RadiusChordStatus::SetCenter;
        self.center = None;
        self.chord_end = None;
    }

    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult {
        match button {
            MouseButton::Left => {
                let point = ctx.effective_point();
                self.on_coordinate(ctx, point)
            }
            MouseButton::Right => {
                if self.status == RadiusChordStatus::SetCenter {
                    ActionResult::Cancel
                } else {
                    self.reset();
                    ActionResult::Continue
                }
            }
            MouseButton::Middle => ActionResult::Continue,
        }
    }

    fn on_coordinate(&mut self, _ctx: &ActionContext, coord: Point2) -> ActionResult {
        match self.status {
            RadiusChordStatus::SetCenter => {
                self.center = Some(coord);
                self.status = RadiusChordStatus::SetChordEnd;
                ActionResult::Continue
            }
            RadiusChordStatus::SetChordEnd => {
                self.chord_end = Some(coord);
                self.status = RadiusChordStatus::SetRadius;
                ActionResult::Continue
            }
            RadiusChordStatus::SetRadius => ActionResult::Continue,
        }
    }

    fn on_command(&mut self, _ctx: &ActionContext, _cmd: &str) -> Option<ActionResult> {
        None
    }

    fn on_value(&mut self, _ctx: &ActionContext, value: f64) -> ActionResult {
        if self.status != RadiusChordStatus::SetRadius {
            return ActionResult::Continue;
        }
        let (Some(center), Some(chord_end)) = (self.center, self.chord_end) else {
            return ActionResult::Continue;
        };

        match ArcByRadiusChord::from_center_chord(center, chord_end, value) {
            Ok(arc) => {
                self.reset();
                ActionResult::CreateShapes(vec![Shape::ArcByRadiusChord(arc)])
            }
            Err(GeometryError::RadiusTooSmall { radius, distance }) => {
                // 半径可以重试，已有的两个点不丢
                tracing::warn!(radius, distance, "radius too small, awaiting new value");
                ActionResult::Continue
            }
            Err(e) => {
                self.reset();
                ActionResult::Error(e)
            }
        }
    }

    fn get_prompt(&self) -> &str {
        match self.status {
            RadiusChordStatus::SetCenter => "指定圆心:",
            RadiusChordStatus::SetChordEnd => "指定弦端点:",
            RadiusChordStatus::SetRadius => "输入半径:",
        }
    }

    fn get_preview(&self, ctx: &ActionContext) -> Vec<PreviewGeometry> {
        let mut previews = Vec::new();
        if let Some(center) = self.center {
            let chord_end = self.chord_end.unwrap_or_else(|| ctx.effective_point());
            previews.push(PreviewGeometry::reference(Shape::Line(Line::new(
                center, chord_end,
            ))));
        }
        previews
    }
}
