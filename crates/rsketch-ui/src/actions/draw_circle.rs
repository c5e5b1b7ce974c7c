//! 绘制圆 Action（圆心+半径 / 三点）

use crate::action::{
    Action, ActionContext, ActionResult, ActionType, MouseButton, PreviewGeometry,
};
use rsketch_core::math::{Point2, EPSILON};
use rsketch_core::shape::{Circle, CircleByThreePoints, Line, Shape};

/// 圆绘制状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// 等待设置圆心
    SetCenter,
    /// 等待设置半径
    SetRadius,
}

/// 绘制圆 Action（圆心+半径点）
pub struct DrawCircleAction {
    status: Status,
    center: Option<Point2>,
}

impl DrawCircleAction {
    pub fn new() -> Self {
        Self {
            status: Status::SetCenter,
            center: None,
        }
    }

    fn finish(&mut self, center: Point2, radius: f64) -> ActionResult {
        if radius > EPSILON {
            self.reset();
            return ActionResult::CreateShapes(vec![Shape::Circle(Circle::new(center, radius))]);
        }
        ActionResult::Continue
    }
}

impl Default for DrawCircleAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawCircleAction {
    fn action_type(&self) -> ActionType {
        ActionType::DrawCircle
    }

    fn reset(&mut self) {
        self.status = Status::SetCenter;
        self.center = None;
    }

    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult {
        match button {
            MouseButton::Left => {
                let point = ctx.effective_point();
                self.on_coordinate(ctx, point)
            }
            MouseButton::Right => {
                if self.status == Status::SetRadius {
                    self.reset();
                    ActionResult::Continue
                } else {
                    ActionResult::Cancel
                }
            }
            MouseButton::Middle => ActionResult::Continue,
        }
    }

    fn on_coordinate(&mut self, _ctx: &ActionContext, coord: Point2) -> ActionResult {
        match self.status {
            Status::SetCenter => {
                self.center = Some(coord);
                self.status = Status::SetRadius;
                ActionResult::Continue
            }
            Status::SetRadius => match self.center {
                Some(center) => {
                    let radius = (coord - center).norm();
                    self.finish(center, radius)
                }
                None => ActionResult::Continue,
            },
        }
    }

    fn on_command(&mut self, _ctx: &ActionContext, _cmd: &str) -> Option<ActionResult> {
        None
    }

    fn on_value(&mut self, _ctx: &ActionContext, value: f64) -> ActionResult {
        // 直接输入半径值
        if self.status == Status::SetRadius {
            if let Some(center) = self.center {
                return self.finish(center, value);
            }
        }
        ActionResult::Continue
    }

    fn get_prompt(&self) -> &str {
        match self.status {
            Status::SetCenter => "指定圆心:",
            Status::SetRadius => "指定半径:",
        }
    }

    fn get_preview(&self, ctx: &ActionContext) -> Vec<PreviewGeometry> {
        let mut previews = Vec::new();
        if self.status == Status::SetRadius {
            if let Some(center) = self.center {
                let radius = (ctx.effective_point() - center).norm();
                if radius > EPSILON {
                    previews.push(PreviewGeometry::new(Shape::Circle(Circle::new(
                        center, radius,
                    ))));
                    previews.push(PreviewGeometry::reference(Shape::Line(Line::new(
                        center,
                        ctx.effective_point(),
                    ))));
                }
            }
        }
        previews
    }
}

/// 绘制三点圆 Action
///
/// 三点共线时构造失败：清空缓冲并把错误交给调用方。
pub struct DrawCircleThreePointsAction {
    points: Vec<Point2>,
}

impl DrawCircleThreePointsAction {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }
}

impl Default for DrawCircleThreePointsAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawCircleThreePointsAction {
    fn action_type(&self) -> ActionType {
        ActionType::DrawCircleThreePoints
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

        let result = CircleByThreePoints::from_points(self.points[0], self.points[1], self.points[2]);
        self.reset();
        match result {
            Ok(circle) => ActionResult::CreateShapes(vec![Shape::CircleByThreePoints(circle)]),
            Err(e) => {
                tracing::warn!("three-point circle construction failed: {}", e);
                ActionResult::Error(e)
            }
        }
    }

    fn on_command(&mut self, _ctx: &ActionContext, _cmd: &str) -> Option<ActionResult> {
        None
    }

    fn get_prompt(&self) -> &str {
        match self.points.len() {
            0 => "指定圆上第一点:",
            1 => "指定圆上第二点:",
            _ => "指定圆上第三点:",
        }
    }

    fn get_preview(&self, ctx: &ActionContext) -> Vec<PreviewGeometry> {
        let mut previews = Vec::new();
        if self.points.len() == 2 {
            // 有了两点加鼠标位置就能预览整圆
            if let Ok(circle) =
                CircleByThreePoints::from_points(self.points[0], self.points[1], ctx.effective_point())
            {
                previews.push(PreviewGeometry::new(Shape::CircleByThreePoints(circle)));
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
