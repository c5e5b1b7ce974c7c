//! 实体定义
//!
//! 实体 = 唯一标识符 + 形状 + 视觉属性，是文档所有权的基本单位。

use crate::properties::Properties;
use crate::shape::Shape;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// 实体唯一标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// 分配下一个进程内唯一的 ID
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// 绘图实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub shape: Shape,
    pub properties: Properties,
}

impl Entity {
    pub fn new(shape: Shape) -> Self {
        Self {
            id: EntityId::next(),
            shape,
            properties: Properties::default(),
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::shape::Line;

    #[test]
    fn test_entity_ids_unique() {
        let a = Entity::new(Shape::Line(Line::new(Point2::origin(), Point2::origin())));
        let b = Entity::new(Shape::Line(Line::new(Point2::origin(), Point2::origin())));
        assert_ne!(a.id, b.id);
    }
}
