//! 绘制多边形 Action（自由多边形 / 正多边形）

use crate::action::{
    Action, ActionContext, ActionHistory, ActionResult, ActionType, MouseButton, PreviewGeometry,
};
use rsketch_core::kernel::PolygonMode;
use rsketch_core::math::{Point2, EPSILON};
use rsketch_core::shape::{Line, Polygon, Shape};

/// 自由多边形绘制状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// 等待第一个顶点
    SetFirstPoint,
    /// 等待下一个顶点
    SetNextPoint,
}

/// 绘制自由多边形 Action
///
/// 逐点点击，≥3个顶点后右键或 CLOSE 闭合成形。支持单点撤销。
pub struct DrawPolygonAction {
    status: Status,
    vertices: Vec<Point2>,
    history: ActionHistory<Point2>,
}

impl DrawPolygonAction {
    pub fn new() -> Self {
        Self {
            status: Status::SetFirstPoint,
            vertices: Vec::new(),
            history: ActionHistory::new(),
        }
    }

    fn close(&mut self) -> ActionResult {
        if self.vertices.len() < 3 {
            return ActionResult::Continue;
        }
        let result = Polygon::from_points(std::mem::take(&mut self.vertices));
        self.reset();
        match result {
            Ok(polygon) => ActionResult::CreateShapes(vec![Shape::Polygon(polygon)]),
            Err(e) => ActionResult::Error(e),
        }
    }
}

impl Default for DrawPolygonAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawPolygonAction {
    fn action_type(&self) -> ActionType {
        ActionType::DrawPolygon
    }

    fn reset(&mut self) {
        self.status = Status::SetFirstPoint;
        self.vertices.clear();
        self.history.clear();
    }

    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult {
        match button {
            MouseButton::Left => {
                let point = ctx.effective_point();
                self.on_coordinate(ctx, point)
            }
            MouseButton::Right => {
                // 右键：顶点够了就闭合，否则放弃
                if self.vertices.len() >= 3 {
                    self.close()
                } else if self.vertices.is_empty() {
                    ActionResult::Cancel
                } else {
                    tracing::warn!("polygon abandoned with {} vertices", self.vertices.len());
                    self.reset();
                    ActionResult::Continue
                }
            }
            MouseButton::Middle => ActionResult::Continue,
        }
    }

    fn on_coordinate(&mut self, _ctx: &ActionContext, coord: Point2) -> ActionResult {
        // 与上一个顶点重合的点忽略
        if let Some(&last) = self.vertices.last() {
            if (coord - last).norm() < EPSILON {
                return ActionResult::Continue;
            }
        }
        self.vertices.push(coord);
        self.history.push(coord);
        self.status = Status::SetNextPoint;
        ActionResult::Continue
    }

    fn on_command(&mut self, _ctx: &ActionContext, cmd: &str) -> Option<ActionResult> {
        match cmd.to_uppercase().as_str() {
            "C" | "CLOSE" => {
                if self.vertices.len() >= 3 {
                    Some(self.close())
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
        match self.status {
            Status::SetFirstPoint => "指定起点:",
            Status::SetNextPoint => {
                if self.vertices.len() >= 3 {
                    "指定下一点 或 [闭合(C)/放弃(U)]:"
                } else {
                    "指定下一点 或 [放弃(U)]:"
                }
            }
        }
    }

    fn get_available_commands(&self) -> Vec<&str> {
        match self.status {
            Status::SetFirstPoint => vec![],
            Status::SetNextPoint => {
                let mut cmds = vec!["undo"];
                if self.vertices.len() >= 3 {
                    cmds.push("close");
                }
                cmds
            }
        }
    }

    fn get_preview(&self, ctx: &ActionContext) -> Vec<PreviewGeometry> {
        let mut previews = Vec::new();
        for window in self.vertices.windows(2) {
            previews.push(PreviewGeometry::new(Shape::Line(Line::new(
                window[0], window[1],
            ))));
        }
        if let Some(&last) = self.vertices.last() {
            previews.push(PreviewGeometry::new(Shape::Line(Line::new(
                last,
                ctx.effective_point(),
            ))));
        }
        previews
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) {
        if self.history.undo().is_some() {
            self.vertices.pop();
        }
        if self.vertices.is_empty() {
            self.status = Status::SetFirstPoint;
        }
    }
}

/// 默认边数
const DEFAULT_SIDES: usize = 6;

/// 正多边形绘制状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegularStatus {
    /// 等待设置中心
    SetCenter,
    /// 等待设置参考点
    SetReference,
}

/// 绘制正多边形 Action
///
/// 中心 → 参考点。边数随时可以数值输入，内接/外切用子命令切换：
/// 内接时参考点是顶点，外切时参考点在边的中点方向上。
pub struct DrawRegularPolygonAction {
    status: RegularStatus,
    center: Option<Point2>,
    sides: usize,
    mode: PolygonMode,
}

impl DrawRegularPolygonAction {
    pub fn new() -> Self {
        Self {
            status: RegularStatus::SetCenter,
            center: None,
            sides: DEFAULT_SIDES,
            mode: PolygonMode::Inscribed,
        }
    }
}

impl Default for DrawRegularPolygonAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawRegularPolygonAction {
    fn action_type(&self) -> ActionType {
        ActionType::DrawRegularPolygon
    }

    fn reset(&mut self) {
        self.status = RegularStatus::SetCenter;
        self.center = None;
        // 边数和模式跨一次绘制保留，连续画同规格多边形不用重设
    }

    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult {
        match button {
            MouseButton::Left => {
                let point = ctx.effective_point();
                self.on_coordinate(ctx, point)
            }
            MouseButton::Right => {
                if self.status == RegularStatus::SetReference {
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
            RegularStatus::SetCenter => {
                self.center = Some(coord);
                self.status = RegularStatus::SetReference;
                ActionResult::Continue
            }
            RegularStatus::SetReference => {
                let Some(center) = self.center else {
                    return ActionResult::Continue;
                };
                if (coord - center).norm() < EPSILON {
                    return ActionResult::Continue;
                }
                let result = Polygon::regular(center, coord, self.sides, self.mode);
                self.reset();
                match result {
                    Ok(polygon) => ActionResult::CreateShapes(vec![Shape::Polygon(polygon)]),
                    Err(e) => ActionResult::Error(e),
                }
            }
        }
    }

    fn on_command(&mut self, _ctx: &ActionContext, cmd: &str) -> Option<ActionResult> {
        match cmd.to_uppercase().as_str() {
            "I" | "INSCRIBED" => {
                self.mode = PolygonMode::Inscribed;
                Some(ActionResult::Continue)
            }
            "C" | "CIRCUMSCRIBED" => {
                self.mode = PolygonMode::Circumscribed;
                Some(ActionResult::Continue)
            }
            _ => None,
        }
    }

    fn on_value(&mut self, _ctx: &ActionContext, value: f64) -> ActionResult {
        // 数值输入设置边数
        let sides = value.round() as i64;
        if sides >= 3 {
            self.sides = sides as usize;
        } else {
            tracing::warn!(sides, "polygon needs at least 3 sides");
        }
        ActionResult::Continue
    }

    fn get_prompt(&self) -> &str {
        match self.status {
            RegularStatus::SetCenter => "指定中心点 或 输入边数:",
            RegularStatus::SetReference => "指定半径参考点 或 [内接(I)/外切(C)]:",
        }
    }

    fn get_available_commands(&self) -> Vec<&str> {
        vec!["inscribed", "circumscribed"]
    }

    fn get_preview(&self, ctx: &ActionContext) -> Vec<PreviewGeometry> {
        let mut previews = Vec::new();
        if self.status == RegularStatus::SetReference {
            if let Some(center) = self.center {
                let reference = ctx.effective_point();
                if let Ok(polygon) = Polygon::regular(center, reference, self.sides, self.mode) {
                    previews.push(PreviewGeometry::new(Shape::Polygon(polygon)));
                }
                previews.push(PreviewGeometry::reference(Shape::Line(Line::new(
                    center, reference,
                ))));
            }
        }
        previews
    }
}
