//! 绘制样条 Action（贝塞尔 / 分段）

use crate::action::{
    Action, ActionContext, ActionHistory, ActionResult, ActionType, MouseButton, PreviewGeometry,
};
use rsketch_core::math::{Point2, EPSILON};
use rsketch_core::shape::{BezierSpline, Line, SegmentSpline, Shape};

/// 贝塞尔样条绘制 Action
///
/// 逐点采集控制点，≥3 个后右键或 FINISH 成形；两点的"样条"
/// 退化为直线，不在这里产出。
pub struct DrawBezierSplineAction {
    points: Vec<Point2>,
    history: ActionHistory<Point2>,
}

impl DrawBezierSplineAction {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            history: ActionHistory::new(),
        }
    }

    fn finish(&mut self) -> ActionResult {
        if self.points.len() < 3 {
            return ActionResult::Continue;
        }
        let result = BezierSpline::from_points(std::mem::take(&mut self.points));
        self.reset();
        match result {
            Ok(spline) => ActionResult::CreateShapes(vec![Shape::BezierSpline(spline)]),
            Err(e) => ActionResult::Error(e),
        }
    }
}

impl Default for DrawBezierSplineAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawBezierSplineAction {
    fn action_type(&self) -> ActionType {
        ActionType::DrawBezierSpline
    }

    fn reset(&mut self) {
        self.points.clear();
        self.history.clear();
    }

    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult {
        match button {
            MouseButton::Left => {
                let point = ctx.effective_point();
                self.on_coordinate(ctx, point)
            }
            MouseButton::Right => {
                if self.points.len() >= 3 {
                    self.finish()
                } else if self.points.is_empty() {
                    ActionResult::Cancel
                } else {
                    tracing::warn!("spline abandoned with {} control points", self.points.len());
                    self.reset();
                    ActionResult::Continue
                }
            }
            MouseButton::Middle => ActionResult::Continue,
        }
    }

    fn on_coordinate(&mut self, _ctx: &ActionContext, coord: Point2) -> ActionResult {
        if let Some(&last) = self.points.last() {
            if (coord - last).norm() < EPSILON {
                return ActionResult::Continue;
            }
        }
        self.points.push(coord);
        self.history.push(coord);
        ActionResult::Continue
    }

    fn on_command(&mut self, _ctx: &ActionContext, cmd: &str) -> Option<ActionResult> {
        match cmd.to_uppercase().as_str() {
            "F" | "FINISH" => {
                if self.points.len() >= 3 {
                    Some(self.finish())
                } else {
                    None
                }
            }
            "U" | "UNDO" => {
                if self.can_undo() {
                    self.undo();
                    Some(ActionResult::Continue)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn get_prompt(&self) -> &str {
        if self.points.len() >= 3 {
            "指定控制点 或 [完成(F)/放弃(U)]:"
        } else {
            "指定控制点:"
        }
    }

    fn get_available_commands(&self) -> Vec<&str> {
        let mut cmds = Vec::new();
        if !self.points.is_empty() {
            cmds.push("undo");
        }
        if self.points.len() >= 3 {
            cmds.push("finish");
        }
        cmds
    }

    fn get_preview(&self, ctx: &ActionContext) -> Vec<PreviewGeometry> {
        let mut previews = Vec::new();

        // 控制点折线作参考
        for window in self.points.windows(2) {
            previews.push(PreviewGeometry::reference(Shape::Line(Line::new(
                window[0], window[1],
            ))));
        }

        // ≥2 个已有点加鼠标位置，预览曲线本身
        if self.points.len() >= 2 {
            let mut preview_points = self.points.clone();
            preview_points.push(ctx.effective_point());
            if let Ok(spline) = BezierSpline::from_points(preview_points) {
                previews.push(PreviewGeometry::new(Shape::BezierSpline(spline)));
            }
        }

        previews
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) {
        if self.history.undo().is_some() {
            self.points.pop();
        }
    }
}

/// 分段样条（Catmull-Rom）绘制 Action
///
/// 曲线穿过每个输入点，≥2 个点即可成形。
pub struct DrawSegmentSplineAction {
    points: Vec<Point2>,
    history: ActionHistory<Point2>,
}

impl DrawSegmentSplineAction {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            history: ActionHistory::new(),
        }
    }

    fn finish(&mut self) -> ActionResult {
        if self.points.len() < 2 {
            return ActionResult::Continue;
        }
        let result = SegmentSpline::from_points(std::mem::take(&mut self.points));
        self.reset();
        match result {
            Ok(spline) => ActionResult::CreateShapes(vec![Shape::SegmentSpline(spline)]),
            Err(e) => ActionResult::Error(e),
        }
    }
}

impl Default for DrawSegmentSplineAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawSegmentSplineAction {
    fn action_type(&self) -> ActionType {
        ActionType::DrawSegmentSpline
    }

    fn reset(&mut self) {
        self.points.clear();
        self.history.clear();
    }

    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult {
        match button {
            MouseButton::Left => {
                let point = ctx.effective_point();
                self.on_coordinate(ctx, point)
            }
            MouseButton::Right => {
                if self.points.len() >= 2 {
                    self.finish()
                } else if self.points.is_empty() {
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
        if let Some(&last) = self.points.last() {
            if (coord - last).norm() < EPSILON {
                return ActionResult::Continue;
            }
        }
        self.points.push(coord);
        self.history.push(coord);
        ActionResult::Continue
    }

    fn on_command(&mut self, _ctx: &ActionContext, cmd: &str) -> Option<ActionResult> {
        match cmd.to_uppercase().as_str() {
            "F" | "FINISH" => {
                if self.points.len() >= 2 {
                    Some(self.finish())
                } else {
                    None
                }
            }
            "U" | "UNDO" => {
                if self.can_undo() {
                    self.undo();
                    Some(ActionResult::Continue)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn get_prompt(&self) -> &str {
        if self.points.len() >= 2 {
            "指定通过点 或 [完成(F)/放弃(U)]:"
        } else {
            "指定通过点:"
        }
    }

    fn get_available_commands(&self) -> Vec<&str> {
        let mut cmds = Vec::new();
        if !self.points.is_empty() {
            cmds.push("undo");
        }
        if self.points.len() >= 2 {
            cmds.push("finish");
        }
        cmds
    }

    fn get_preview(&self, ctx: &ActionContext) -> Vec<PreviewGeometry> {
        let mut previews = Vec::new();
        if !self.points.is_empty() {
            let mut preview_points = self.points.clone();
            preview_points.push(ctx.effective_point());
            if let Ok(spline) = SegmentSpline::from_points(preview_points) {
                previews.push(PreviewGeometry::new(Shape::SegmentSpline(spline)));
            }
        }
        previews
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) {
        if self.history.undo().is_some() {
            self.points.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click<A: Action>(action: &mut A, x: f64, y: f64) -> ActionResult {
        let ctx = ActionContext::new(Point2::new(x, y));
        action.on_mouse_click(&ctx, MouseButton::Left)
    }

    fn right_click<A: Action>(action: &mut A) -> ActionResult {
        let ctx = ActionContext::new(Point2::origin());
        action.on_mouse_click(&ctx, MouseButton::Right)
    }

    #[test]
    fn test_bezier_needs_three_points() {
        let mut action = DrawBezierSplineAction::new();
        click(&mut action, 0.0, 0.0);
        click(&mut action, 5.0, 8.0);
        // 两个点右键：放弃而不是成形
        assert!(matches!(right_click(&mut action), ActionResult::Continue));
        assert_eq!(action.get_prompt(), "指定控制点:");
    }

    #[test]
    fn test_bezier_finish_with_three() {
        let mut action = DrawBezierSplineAction::new();
        click(&mut action, 0.0, 0.0);
        click(&mut action, 5.0, 8.0);
        click(&mut action, 10.0, 0.0);
        match right_click(&mut action) {
            ActionResult::CreateShapes(shapes) => match &shapes[0] {
                Shape::BezierSpline(b) => assert_eq!(b.points.len(), 3),
                other => panic!("expected BezierSpline, got {}", other.type_name()),
            },
            other => panic!("expected CreateShapes, got {:?}", other),
        }
    }

    #[test]
    fn test_segment_spline_two_points_suffice() {
        let mut action = DrawSegmentSplineAction::new();
        click(&mut action, 0.0, 0.0);
        click(&mut action, 10.0, 5.0);
        match right_click(&mut action) {
            ActionResult::CreateShapes(shapes) => match &shapes[0] {
                Shape::SegmentSpline(s) => assert_eq!(s.points.len(), 2),
                other => panic!("expected SegmentSpline, got {}", other.type_name()),
            },
            other => panic!("expected CreateShapes, got {:?}", other),
        }
    }

    #[test]
    fn test_spline_undo_then_finish() {
        let mut action = DrawSegmentSplineAction::new();
        let ctx = ActionContext::new(Point2::origin());
        click(&mut action, 0.0, 0.0);
        click(&mut action, 5.0, 5.0);
        click(&mut action, 99.0, 99.0);
        assert!(action.on_command(&ctx, "U").is_some());
        match right_click(&mut action) {
            ActionResult::CreateShapes(shapes) => match &shapes[0] {
                Shape::SegmentSpline(s) => {
                    assert_eq!(s.points.len(), 2);
                    assert_eq!(s.points[1], Point2::new(5.0, 5.0));
                }
                other => panic!("expected SegmentSpline, got {}", other.type_name()),
            },
            other => panic!("expected CreateShapes, got {:?}", other),
        }
    }
}
