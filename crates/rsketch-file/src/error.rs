//! 文件操作错误定义

use rsketch_core::error::GeometryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DXF parse error: {0}")]
    DxfParse(String),

    #[error("DXF write error: {0}")]
    DxfWrite(String),

    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
}
