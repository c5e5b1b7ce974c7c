//! RSketch 交互适配层
//!
//! 工具状态机：把点击/坐标/数值输入序列变成成品形状。不负责
//! 窗口、事件路由和绘制 - 调用方拿到 `ActionResult` 和预览
//! 几何体后自行处理。

pub mod action;
pub mod actions;

pub use action::{
    Action, ActionContext, ActionHistory, ActionResult, ActionType, MouseButton, PreviewGeometry,
};
pub use actions::create_action;
