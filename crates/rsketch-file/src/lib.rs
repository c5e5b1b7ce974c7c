//! RSketch 文件层
//!
//! 文档容器与 DXF 双向编解码。持久化格式就是 DXF 本身：
//! 导出提供 R12 简单档案与 R2000 高级档案两种写法，导入
//! 统一识别两者的产物。

pub mod document;
pub mod dxf_io;
pub mod error;

pub use document::Document;
pub use dxf_io::{export, import, DxfProfile};
pub use error::FileError;
