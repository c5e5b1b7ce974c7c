//! 视觉属性定义
//!
//! 颜色、线型、线宽和虚线参数。这些属性跟随形状一起存入文档，
//! 渲染器和 DXF 编码器都从这里取值。

use serde::{Deserialize, Serialize};

/// RGB颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GRAY: Color = Color::new(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::new(192, 192, 192);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// 线型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LineType {
    #[default]
    Solid,
    Dash,
    DashDot,
    DashDotDot,
}

/// 虚线参数（全部为正值，绘图单位）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashParameters {
    pub dash_length: f64,
    pub dash_gap: f64,
    pub dash_space: f64,
    pub dot_length: f64,
    pub dot_space: f64,
}

impl Default for DashParameters {
    fn default() -> Self {
        Self {
            dash_length: 10.0,
            dash_gap: 5.0,
            dash_space: 3.0,
            dot_length: 1.0,
            dot_space: 3.0,
        }
    }
}

/// ISO线宽档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThicknessClass {
    VeryThin,
    Thin,
    Medium,
    Thick,
    VeryThick,
}

impl ThicknessClass {
    /// 档位代表值（毫米）
    pub fn value(&self) -> f64 {
        match self {
            ThicknessClass::VeryThin => 0.13,
            ThicknessClass::Thin => 0.25,
            ThicknessClass::Medium => 0.5,
            ThicknessClass::Thick => 1.0,
            ThicknessClass::VeryThick => 2.0,
        }
    }

    /// 按数值归入最近的档位
    pub fn from_value(thickness: f64) -> Self {
        let classes = [
            ThicknessClass::VeryThin,
            ThicknessClass::Thin,
            ThicknessClass::Medium,
            ThicknessClass::Thick,
            ThicknessClass::VeryThick,
        ];
        *classes
            .iter()
            .min_by(|a, b| {
                (a.value() - thickness)
                    .abs()
                    .partial_cmp(&(b.value() - thickness).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(&ThicknessClass::Medium)
    }
}

/// 形状的视觉属性集合
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub color: Color,
    pub line_type: LineType,
    /// 线宽（毫米，正值）
    pub line_thickness: f64,
    pub dash: DashParameters,
    /// 自动根据线宽缩放虚线样式
    pub dash_auto_mode: bool,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_type: LineType::Solid,
            line_thickness: 1.0,
            dash: DashParameters::default(),
            dash_auto_mode: true,
        }
    }
}

impl Properties {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line_type = line_type;
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.line_thickness = thickness;
        self
    }

    /// 线宽所属的ISO档位
    pub fn thickness_class(&self) -> ThicknessClass {
        ThicknessClass::from_value(self.line_thickness)
    }
}
