//! 具体的 Action 实现
//!
//! 每个绘图工具对应一个 Action 实现

mod draw_arc;
mod draw_circle;
mod draw_line;
mod draw_polygon;
mod draw_rectangle;
mod draw_spline;

pub use draw_arc::{DrawArcRadiusChordAction, DrawArcThreePointsAction};
pub use draw_circle::{DrawCircleAction, DrawCircleThreePointsAction};
pub use draw_line::DrawLineAction;
pub use draw_polygon::{DrawPolygonAction, DrawRegularPolygonAction};
pub use draw_rectangle::DrawRectangleAction;
pub use draw_spline::{DrawBezierSplineAction, DrawSegmentSplineAction};

use crate::action::{Action, ActionType};

/// 创建指定类型的 Action
pub fn create_action(action_type: ActionType) -> Box<dyn Action> {
    match action_type {
        ActionType::DrawLine | ActionType::None => Box::new(DrawLineAction::new()),
        ActionType::DrawCircle => Box::new(DrawCircleAction::new()),
        ActionType::DrawCircleThreePoints => Box::new(DrawCircleThreePointsAction::new()),
        ActionType::DrawArcThreePoints => Box::new(DrawArcThreePointsAction::new()),
        ActionType::DrawArcRadiusChord => Box::new(DrawArcRadiusChordAction::new()),
        ActionType::DrawRectangle => Box::new(DrawRectangleAction::new()),
        ActionType::DrawPolygon => Box::new(DrawPolygonAction::new()),
        ActionType::DrawRegularPolygon => Box::new(DrawRegularPolygonAction::new()),
        ActionType::DrawBezierSpline => Box::new(DrawBezierSplineAction::new()),
        ActionType::DrawSegmentSpline => Box::new(DrawSegmentSplineAction::new()),
    }
}
