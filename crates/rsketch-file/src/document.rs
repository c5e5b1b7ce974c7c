//! 绘图文档
//!
//! 文档唯一拥有全部形状实体，按插入顺序保存（绘制顺序 = 持久化
//! 顺序）。外部协作者只能通过窄接口修改：追加、按索引删除、按
//! 索引替换、绕推断枢轴旋转。没有任何对列表内部的外部引用。

use rsketch_core::entity::{Entity, EntityId};
use rsketch_core::error::GeometryError;
use rsketch_core::shape::Shape;
use std::path::{Path, PathBuf};

/// 绘图文档
#[derive(Debug, Default)]
pub struct Document {
    entities: Vec<Entity>,
    file_path: Option<PathBuf>,
    modified: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加实体，返回分配的 ID
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        self.modified = true;
        id
    }

    /// 按索引删除实体
    pub fn remove_at(&mut self, index: usize) -> Option<Entity> {
        if index >= self.entities.len() {
            return None;
        }
        self.modified = true;
        Some(self.entities.remove(index))
    }

    /// 按索引替换形状（保留 ID 与属性）
    pub fn replace_shape_at(&mut self, index: usize, shape: Shape) -> bool {
        match self.entities.get_mut(index) {
            Some(entity) => {
                entity.shape = shape;
                self.modified = true;
                true
            }
            None => false,
        }
    }

    /// 绕推断的枢轴旋转指定形状（角度制，逆时针）
    ///
    /// 先在副本上旋转，成功才写回 - 失败时文档保持不变。
    pub fn rotate_shape(&mut self, index: usize, angle_deg: f64) -> Result<(), GeometryError> {
        let Some(entity) = self.entities.get_mut(index) else {
            return Ok(());
        };
        let pivot = entity.shape.default_pivot();
        let mut rotated = entity.shape.clone();
        rotated.rotate_around(angle_deg, pivot)?;
        entity.shape = rotated;
        self.modified = true;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.modified = true;
    }

    pub fn set_file_path(&mut self, path: &Path) {
        self.file_path = Some(path.to_path_buf());
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// 保存成功后清除修改标记
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsketch_core::math::Point2;
    use rsketch_core::shape::{Circle, Line};

    fn line_entity(x: f64) -> Entity {
        Entity::new(Shape::Line(Line::new(
            Point2::new(x, 0.0),
            Point2::new(x + 1.0, 0.0),
        )))
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut doc = Document::new();
        doc.add_entity(line_entity(0.0));
        doc.add_entity(line_entity(10.0));
        doc.add_entity(line_entity(20.0));

        let xs: Vec<f64> = doc
            .iter()
            .map(|e| match &e.shape {
                Shape::Line(l) => l.start.x,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(xs, vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_remove_and_replace() {
        let mut doc = Document::new();
        doc.add_entity(line_entity(0.0));
        doc.add_entity(line_entity(10.0));

        assert!(doc.remove_at(5).is_none());
        let removed = doc.remove_at(0).unwrap();
        assert!(matches!(removed.shape, Shape::Line(_)));
        assert_eq!(doc.entity_count(), 1);

        let replaced = doc.replace_shape_at(
            0,
            Shape::Circle(Circle::new(Point2::origin(), 3.0)),
        );
        assert!(replaced);
        assert!(matches!(doc.get(0).unwrap().shape, Shape::Circle(_)));
    }

    #[test]
    fn test_rotate_shape_inferred_pivot() {
        let mut doc = Document::new();
        doc.add_entity(Entity::new(Shape::Line(Line::new(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
        ))));

        // 围绕中点 (2,0) 旋转 180°：起终点互换
        doc.rotate_shape(0, 180.0).unwrap();
        match &doc.get(0).unwrap().shape {
            Shape::Line(l) => {
                assert!((l.start.x - 4.0).abs() < 1e-9);
                assert!((l.end.x - 0.0).abs() < 1e-9);
            }
            _ => unreachable!(),
        }
    }
}
