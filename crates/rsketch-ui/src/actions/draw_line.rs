//! 绘制线段 Action

use crate::action::{
    Action, ActionContext, ActionResult, ActionType, MouseButton, PreviewGeometry,
};
use rsketch_core::math::{Point2, EPSILON};
use rsketch_core::shape::{Line, Shape};

/// 线段绘制状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// 等待设置起点
    SetStart,
    /// 等待设置终点
    SetEnd,
}

/// 绘制线段 Action
pub struct DrawLineAction {
    status: Status,
    start: Option<Point2>,
}

impl DrawLineAction {
    pub fn new() -> Self {
        Self {
            status: Status::SetStart,
            start: None,
        }
    }
}

impl Default for DrawLineAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawLineAction {
    fn action_type(&self) -> ActionType {
        ActionType::DrawLine
    }

    fn reset(&mut self) {
        self.status = Status::SetStart;
        self.start = None;
    }

    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult {
        match button {
            MouseButton::Left => {
                let point = ctx.effective_point();
                self.on_coordinate(ctx, point)
            }
            MouseButton::Right => {
                if self.status == Status::SetEnd {
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
            Status::SetStart => {
                self.start = Some(coord);
                self.status = Status::SetEnd;
                ActionResult::Continue
            }
            Status::SetEnd => {
                if let Some(start) = self.start {
                    // 零长度线段没有意义
                    if (coord - start).norm() > EPSILON {
                        self.reset();
                        return ActionResult::CreateShapes(vec![Shape::Line(Line::new(
                            start, coord,
                        ))]);
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
            Status::SetStart => "指定起点:",
            Status::SetEnd => "指定终点:",
        }
    }

    fn get_preview(&self, ctx: &ActionContext) -> Vec<PreviewGeometry> {
        let mut previews = Vec::new();
        if self.status == Status::SetEnd {
            if let Some(start) = self.start {
                let end = ctx.effective_point();
                previews.push(PreviewGeometry::new(Shape::Line(Line::new(start, end))));
            }
        }
        previews
    }
}
