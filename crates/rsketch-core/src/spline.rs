//! 分段样条采样
//!
//! 对有序点列生成一条经过所有点的平滑路径（Catmull-Rom 插值）。
//! 采样器是惰性、有限、可重启的迭代器：每次从当前点列重新创建即可
//! 重新开始，不持有任何中间状态。

use crate::math::Point2;

/// 每个区间的采样段数
pub const SAMPLES_PER_SPAN: usize = 16;

/// Catmull-Rom 插值：经过 p1 与 p2 的区间，p0/p3 为相邻控制点
pub fn catmull_rom(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f64) -> Point2 {
    let t2 = t * t;
    let t3 = t2 * t;

    let x = 0.5
        * ((2.0 * p1.x)
            + (-p0.x + p2.x) * t
            + (2.0 * p0.x - 5.0 * p1.x + 4.0 * p2.x - p3.x) * t2
            + (-p0.x + 3.0 * p1.x - 3.0 * p2.x + p3.x) * t3);
    let y = 0.5
        * ((2.0 * p1.y)
            + (-p0.y + p2.y) * t
            + (2.0 * p0.y - 5.0 * p1.y + 4.0 * p2.y - p3.y) * t2
            + (-p0.y + 3.0 * p1.y - 3.0 * p2.y + p3.y) * t3);

    Point2::new(x, y)
}

/// 分段样条采样迭代器
///
/// 先产出第一个输入点，之后对每个区间产出 `SAMPLES_PER_SPAN` 个
/// 采样点（区间终点含在内），端点区间用重复端点钳制。
/// 点数少于2时不产出任何点。
pub struct SplineSampler<'a> {
    points: &'a [Point2],
    span: usize,
    step: usize,
    started: bool,
}

impl<'a> SplineSampler<'a> {
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            span: 0,
            step: 1,
            started: false,
        }
    }

    fn clamped(&self, index: isize) -> Point2 {
        let i = index.clamp(0, self.points.len() as isize - 1) as usize;
        self.points[i]
    }
}

impl Iterator for SplineSampler<'_> {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        if self.points.len() < 2 {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(self.points[0]);
        }

        if self.span + 1 >= self.points.len() {
            return None;
        }

        let i = self.span as isize;
        let p = catmull_rom(
            self.clamped(i - 1),
            self.clamped(i),
            self.clamped(i + 1),
            self.clamped(i + 2),
            self.step as f64 / SAMPLES_PER_SPAN as f64,
        );

        self.step += 1;
        if self.step > SAMPLES_PER_SPAN {
            self.step = 1;
            self.span += 1;
        }

        Some(p)
    }
}
