//! 绘制矩形 Action

use crate::action::{
    Action, ActionContext, ActionResult, ActionType, MouseButton, PreviewGeometry,
};
use rsketch_core::math::{Point2, EPSILON};
use rsketch_core::shape::{Rectangle, Shape};

/// 矩形绘制状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// 等待设置第一个角点
    SetFirstCorner,
    /// 等待设置对角点
    SetSecondCorner,
}

/// 绘制矩形 Action（两个对角点，任意顺序）
pub struct DrawRectangleAction {
    status: Status,
    first_corner: Option<Point2>,
}

impl DrawRectangleAction {
    pub fn new() -> Self {
        Self {
            status: Status::SetFirstCorner,
            first_corner: None,
        }
    }
}

impl Default for DrawRectangleAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawRectangleAction {
    fn action_type(&self) -> ActionType {
        ActionType::DrawRectangle
    }

    fn reset(&mut self) {
        self.status = Status::SetFirstCorner;
        self.first_corner = None;
    }

    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult {
        match button {
            MouseButton::Left => {
                let point = ctx.effective_point();
                self.on_coordinate(ctx, point)
            }
            MouseButton::Right => {
                if self.status == Status::SetSecondCorner {
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
            Status::SetFirstCorner => {
                self.first_corner = Some(coord);
                self.status = Status::SetSecondCorner;
                ActionResult::Continue
            }
            Status::SetSecondCorner => {
                if let Some(first) = self.first_corner {
                    // 退化矩形（零宽或零高）不产出
                    if (coord.x - first.x).abs() > EPSILON && (coord.y - first.y).abs() > EPSILON {
                        self.reset();
                        return ActionResult::CreateShapes(vec![Shape::Rectangle(
                            Rectangle::from_corners(first, coord),
                        )]);
                    }
                }
                ActionResult::Continue
            }
        }
    }

    fn on_command(&mut self, _ctx: &ActionContext, _cmd: &str) -> Option<ActionResult> {
        None
    }

    fn get_prompt(&self) -> &str {
        match self.status {
            Status::SetFirstCorner => "指定第一个角点:",
            Status::SetSecondCorner => "指定对角点:",
        }
    }

    fn get_preview(&self, ctx: &ActionContext) -> Vec<PreviewGeometry> {
        let mut previews = Vec::new();
        if self.status == Status::SetSecondCorner {
            if let Some(first) = self.first_corner {
                let current = ctx.effective_point();
                if (current.x - first.x).abs() > EPSILON && (current.y - first.y).abs() > EPSILON {
                    previews.push(PreviewGeometry::new(Shape::Rectangle(
                        Rectangle::from_corners(first, current),
                    )));
                }
            }
        }
        previews
    }
}
