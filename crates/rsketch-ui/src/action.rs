//! Action 系统 - 参考 LibreCAD 的状态机设计
//!
//! 每个绘图工具是一个独立的 Action 实现，采用状态机模式处理
//! 用户交互。工具只负责把点击序列变成形状：不做窗口、不做绘制。

use rsketch_core::error::GeometryError;
use rsketch_core::math::Point2;
use rsketch_core::shape::Shape;

/// Action 执行结果
#[derive(Debug, Clone)]
pub enum ActionResult {
    /// 继续当前 action
    Continue,
    /// 完成当前 action，创建形状
    CreateShapes(Vec<Shape>),
    /// 构造失败：进行中的点缓冲已清空，错误交给调用方提示用户。
    /// 永远不会发出无效形状。
    Error(GeometryError),
    /// 取消当前 action
    Cancel,
}

/// Action 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    DrawLine,
    DrawCircle,
    DrawCircleThreePoints,
    DrawArcThreePoints,
    DrawArcRadiusChord,
    DrawRectangle,
    DrawPolygon,
    DrawRegularPolygon,
    DrawBezierSpline,
    DrawSegmentSpline,
    None,
}

impl ActionType {
    /// 获取 action 的名称
    pub fn name(&self) -> &'static str {
        match self {
            ActionType::DrawLine => "Line",
            ActionType::DrawCircle => "Circle",
            ActionType::DrawCircleThreePoints => "Circle (3 Points)",
            ActionType::DrawArcThreePoints => "Arc (3 Points)",
            ActionType::DrawArcRadiusChord => "Arc (Radius + Chord)",
            ActionType::DrawRectangle => "Rectangle",
            ActionType::DrawPolygon => "Polygon",
            ActionType::DrawRegularPolygon => "Regular Polygon",
            ActionType::DrawBezierSpline => "Bezier Spline",
            ActionType::DrawSegmentSpline => "Segment Spline",
            ActionType::None => "None",
        }
    }

    /// 获取快捷键
    pub fn shortcut(&self) -> Option<&'static str> {
        match self {
            ActionType::DrawLine => Some("L"),
            ActionType::DrawCircle => Some("C"),
            ActionType::DrawCircleThreePoints => Some("C3"),
            ActionType::DrawArcThreePoints => Some("A"),
            ActionType::DrawArcRadiusChord => Some("AR"),
            ActionType::DrawRectangle => Some("R"),
            ActionType::DrawPolygon => Some("P"),
            ActionType::DrawRegularPolygon => Some("PG"),
            ActionType::DrawBezierSpline => Some("B"),
            ActionType::DrawSegmentSpline => Some("S"),
            ActionType::None => None,
        }
    }
}

/// Action 上下文 - 传递给 Action 的运行时信息
pub struct ActionContext {
    /// 鼠标世界坐标
    pub mouse_pos: Point2,
    /// 捕捉后的坐标（如果有）
    pub snap_pos: Option<Point2>,
}

impl ActionContext {
    pub fn new(mouse_pos: Point2) -> Self {
        Self {
            mouse_pos,
            snap_pos: None,
        }
    }

    /// 获取有效点（优先使用捕捉点）
    pub fn effective_point(&self) -> Point2 {
        self.snap_pos.unwrap_or(self.mouse_pos)
    }
}

/// 预览几何体
#[derive(Debug, Clone)]
pub struct PreviewGeometry {
    pub shape: Shape,
    /// 是否是参考线（虚线显示）
    pub is_reference: bool,
}

impl PreviewGeometry {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            is_reference: false,
        }
    }

    pub fn reference(shape: Shape) -> Self {
        Self {
            shape,
            is_reference: true,
        }
    }
}

/// 鼠标按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Action trait - 所有绘图工具的核心接口
pub trait Action: Send {
    /// 获取 action 类型
    fn action_type(&self) -> ActionType;

    /// 获取 action 名称
    fn name(&self) -> &str {
        self.action_type().name()
    }

    /// 重置 action 状态
    fn reset(&mut self);

    // ========== 事件处理 ==========

    /// 鼠标点击事件
    fn on_mouse_click(&mut self, ctx: &ActionContext, button: MouseButton) -> ActionResult;

    /// 坐标输入事件（来自命令行）
    fn on_coordinate(&mut self, ctx: &ActionContext, coord: Point2) -> ActionResult;

    /// 命令/子命令输入
    fn on_command(&mut self, ctx: &ActionContext, cmd: &str) -> Option<ActionResult>;

    /// 数值输入（半径、边数等）
    fn on_value(&mut self, _ctx: &ActionContext, _value: f64) -> ActionResult {
        ActionResult::Continue
    }

    // ========== UI 提示 ==========

    /// 获取当前状态的提示文本
    fn get_prompt(&self) -> &str;

    /// 获取当前可用的子命令
    fn get_available_commands(&self) -> Vec<&str> {
        vec![]
    }

    // ========== 预览 ==========

    /// 获取预览几何体
    fn get_preview(&self, ctx: &ActionContext) -> Vec<PreviewGeometry>;

    // ========== 历史操作 ==========

    /// 是否可以撤销（action 内部的单点撤销）
    fn can_undo(&self) -> bool {
        false
    }

    /// 撤销最近一个输入点
    fn undo(&mut self) {}
}

/// 通用的 Action 内部历史管理器（单步点撤销）
#[derive(Debug, Clone)]
pub struct ActionHistory<T: Clone> {
    items: Vec<T>,
}

impl<T: Clone> ActionHistory<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, data: T) {
        self.items.push(data);
    }

    pub fn can_undo(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn undo(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Default for ActionHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}
