use crate::foundation::core::{Affine, DOWN, LEFT, ORIGIN, Point, RIGHT, Rect, UP, Vec2};
use crate::foundation::error::{StrataError, StrataResult};
use crate::foundation::math::interpolate_point;
use crate::style::color::{Color, WHITE};

/// Default rendered size of one point, in world units.
pub const DEFAULT_DOT_SIZE: f64 = 0.03;

/// A renderable scene-graph node: an ordered point cloud with per-point colors plus owned
/// child Mobjects.
///
/// Point order is paint order: later points are drawn over earlier ones, and a node's own
/// points are drawn before its children's. Children are owned exclusively; [`Clone`] is a
/// deep copy with no shared state.
#[derive(Clone, Debug, PartialEq)]
pub struct Mobject {
    name: String,
    points: Vec<Point>,
    colors: Vec<Color>, // parallel to `points`
    children: Vec<Mobject>,
    color: Color,
    opacity: f64,
    dot_size: f64,
}

impl Default for Mobject {
    fn default() -> Self {
        Self::new("mobject")
    }
}

impl Mobject {
    /// Create an empty node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
            colors: Vec::new(),
            children: Vec::new(),
            color: WHITE,
            opacity: 1.0,
            dot_size: DEFAULT_DOT_SIZE,
        }
    }

    /// Create a node holding `points`, all painted `color`.
    pub fn from_points(name: impl Into<String>, points: Vec<Point>, color: Color) -> Self {
        let colors = vec![color; points.len()];
        Self {
            points,
            colors,
            color,
            ..Self::new(name)
        }
    }

    /// Create a pointless node owning `children`.
    pub fn group(name: impl Into<String>, children: Vec<Mobject>) -> Self {
        Self {
            children,
            ..Self::new(name)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder-style dot size override (own points only).
    pub fn with_dot_size(mut self, dot_size: f64) -> Self {
        self.dot_size = dot_size;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn children(&self) -> &[Mobject] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Mobject] {
        &mut self.children
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn dot_size(&self) -> f64 {
        self.dot_size
    }

    /// Number of points owned directly by this node.
    pub fn len_points(&self) -> usize {
        self.points.len()
    }

    /// `true` when neither this node nor any descendant has points.
    pub fn is_empty(&self) -> bool {
        self.family_point_count() == 0
    }

    /// This node followed by all descendants, depth first (paint order).
    pub fn family(&self) -> Vec<&Mobject> {
        let mut out = Vec::new();
        self.collect_family(&mut out);
        out
    }

    fn collect_family<'a>(&'a self, out: &mut Vec<&'a Mobject>) {
        out.push(self);
        for c in &self.children {
            c.collect_family(out);
        }
    }

    pub(crate) fn for_each_family_mut(&mut self, f: &mut impl FnMut(&mut Mobject)) {
        f(self);
        for c in &mut self.children {
            c.for_each_family_mut(f);
        }
    }

    pub fn family_point_count(&self) -> usize {
        self.points.len() + self.children.iter().map(Self::family_point_count).sum::<usize>()
    }

    /// Every `(point, color)` of the family in paint order.
    pub fn family_points(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.family().into_iter().flat_map(|m| {
            m.points
                .iter()
                .copied()
                .zip(m.colors.iter().copied())
        })
    }

    pub fn push_point(&mut self, p: Point) -> &mut Self {
        self.points.push(p);
        self.colors.push(self.color);
        self
    }

    pub fn push_colored_point(&mut self, p: Point, color: Color) -> &mut Self {
        self.points.push(p);
        self.colors.push(color);
        self
    }

    pub fn add_points(&mut self, points: impl IntoIterator<Item = Point>) -> &mut Self {
        for p in points {
            self.push_point(p);
        }
        self
    }

    /// Append `child`; it is painted after this node's own points and earlier children.
    pub fn add_child(&mut self, child: Mobject) -> &mut Self {
        self.children.push(child);
        self
    }

    pub(crate) fn set_points_and_colors(&mut self, points: Vec<Point>, colors: Vec<Color>) {
        debug_assert_eq!(points.len(), colors.len());
        self.points = points;
        self.colors = colors;
    }

    pub(crate) fn colors_mut(&mut self) -> &mut [Color] {
        &mut self.colors
    }

    pub(crate) fn truncate_points(&mut self, len: usize) {
        self.points.truncate(len);
        self.colors.truncate(len);
    }

    pub(crate) fn set_own_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Apply `affine` to every point of the family.
    pub fn apply_affine(&mut self, affine: Affine) -> &mut Self {
        self.for_each_family_mut(&mut |m| {
            for p in &mut m.points {
                *p = affine * *p;
            }
        });
        self
    }

    /// Translate the family by `by`.
    pub fn shift(&mut self, by: Vec2) -> &mut Self {
        self.apply_affine(Affine::translate(by))
    }

    /// Scale about the bounding-box center. Empty Mobjects are left untouched.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        match self.bounding_box() {
            Some(bb) => self.scale_about(factor, bb.center()),
            None => self,
        }
    }

    pub fn scale_about(&mut self, factor: f64, about: Point) -> &mut Self {
        let about = about.to_vec2();
        self.apply_affine(
            Affine::translate(about) * Affine::scale(factor) * Affine::translate(-about),
        )
    }

    /// Rotate counter-clockwise by `angle_rad` about the bounding-box center.
    pub fn rotate(&mut self, angle_rad: f64) -> &mut Self {
        let Some(bb) = self.bounding_box() else {
            return self;
        };
        let about = bb.center().to_vec2();
        self.apply_affine(
            Affine::translate(about) * Affine::rotate(angle_rad) * Affine::translate(-about),
        )
    }

    /// Move so the bounding-box center lands on `target`.
    pub fn move_to(&mut self, target: Point) -> StrataResult<&mut Self> {
        let center = self.get_center()?;
        Ok(self.shift(target - center))
    }

    /// Place this Mobject beside `reference` in `direction`, `buff` units away.
    pub fn next_to(
        &mut self,
        reference: &Mobject,
        direction: Vec2,
        buff: f64,
    ) -> StrataResult<&mut Self> {
        let target = reference.critical_point(direction)? + direction * buff;
        let anchor = self.critical_point(-direction)?;
        Ok(self.shift(target - anchor))
    }

    /// Paint every family point (and future pushes) with `color`.
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.for_each_family_mut(&mut |m| {
            m.color = color;
            m.colors.fill(color);
        });
        self
    }

    /// Color family points by rank in paint order, from `start` (first point) to `end` (last).
    ///
    /// Sort the points first (see [`Mobject::sort_points`]) to pick the gradient direction.
    pub fn gradient_highlight(&mut self, start: Color, end: Color) -> &mut Self {
        let total = self.family_point_count();
        let denom = total.saturating_sub(1).max(1) as f64;
        let mut rank = 0usize;
        self.for_each_family_mut(&mut |m| {
            for c in &mut m.colors {
                *c = start.interpolate(end, rank as f64 / denom);
                rank += 1;
            }
        });
        self
    }

    /// Stable-sort each family member's points by ascending `key`, keeping colors attached.
    pub fn sort_points(&mut self, key: impl Fn(Point) -> f64) -> &mut Self {
        self.for_each_family_mut(&mut |m| {
            let mut pairs: Vec<(Point, Color)> = m
                .points
                .iter()
                .copied()
                .zip(m.colors.iter().copied())
                .collect();
            pairs.sort_by(|a, b| key(a.0).total_cmp(&key(b.0)));
            let (points, colors) = pairs.into_iter().unzip();
            m.points = points;
            m.colors = colors;
        });
        self
    }

    pub fn set_opacity(&mut self, opacity: f64) -> &mut Self {
        self.for_each_family_mut(&mut |m| m.set_own_opacity(opacity));
        self
    }

    pub fn set_dot_size(&mut self, dot_size: f64) -> &mut Self {
        self.for_each_family_mut(&mut |m| m.dot_size = dot_size);
        self
    }

    /// Color of the first family point, or the node's default color when empty.
    pub fn get_color(&self) -> Color {
        self.family_points()
            .next()
            .map(|(_, c)| c)
            .unwrap_or(self.color)
    }

    /// Axis-aligned bounds of all family points, `None` when the family has no points.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut iter = self.family_points().map(|(p, _)| p);
        let first = iter.next()?;
        Some(iter.fold(Rect::from_points(first, first), |r, p| r.union_pt(p)))
    }

    /// Bounding-box point in `direction`: each axis picks the max, min or center edge by the
    /// sign of the corresponding component.
    pub fn critical_point(&self, direction: Vec2) -> StrataResult<Point> {
        let bb = self.bounding_box().ok_or_else(|| {
            StrataError::construction(format!(
                "bounding box of empty mobject '{}' is undefined",
                self.name
            ))
        })?;
        fn pick(d: f64, lo: f64, hi: f64) -> f64 {
            if d > 0.0 {
                hi
            } else if d < 0.0 {
                lo
            } else {
                (lo + hi) * 0.5
            }
        }
        Ok(Point::new(
            pick(direction.x, bb.x0, bb.x1),
            pick(direction.y, bb.y0, bb.y1),
        ))
    }

    pub fn get_top(&self) -> StrataResult<Point> {
        self.critical_point(UP)
    }

    pub fn get_bottom(&self) -> StrataResult<Point> {
        self.critical_point(DOWN)
    }

    pub fn get_left(&self) -> StrataResult<Point> {
        self.critical_point(LEFT)
    }

    pub fn get_right(&self) -> StrataResult<Point> {
        self.critical_point(RIGHT)
    }

    pub fn get_center(&self) -> StrataResult<Point> {
        self.critical_point(ORIGIN)
    }

    pub fn width(&self) -> StrataResult<f64> {
        Ok(self.get_right()?.x - self.get_left()?.x)
    }

    pub fn height(&self) -> StrataResult<f64> {
        Ok(self.get_top()?.y - self.get_bottom()?.y)
    }

    /// Move every descendant's points into this node (paint order preserved) and drop the
    /// grouping structure.
    pub fn ingest_sub_mobjects(&mut self) -> &mut Self {
        let children = std::mem::take(&mut self.children);
        let mut dot_size = if self.points.is_empty() {
            0.0
        } else {
            self.dot_size
        };
        for child in &children {
            for m in child.family() {
                if m.points.is_empty() {
                    continue;
                }
                self.points.extend_from_slice(&m.points);
                self.colors.extend_from_slice(&m.colors);
                dot_size = f64::max(dot_size, m.dot_size);
            }
        }
        if dot_size > 0.0 {
            self.dot_size = dot_size;
        }
        self
    }

    /// Position `alpha ∈ [0, 1]` of the way along the family's points, interpolating between
    /// neighbours.
    pub fn point_from_proportion(&self, alpha: f64) -> StrataResult<Point> {
        let pts: Vec<Point> = self.family_points().map(|(p, _)| p).collect();
        match pts.len() {
            0 => Err(StrataError::construction(format!(
                "mobject '{}' has no points to follow",
                self.name
            ))),
            1 => Ok(pts[0]),
            n => {
                let pos = alpha.clamp(0.0, 1.0) * (n - 1) as f64;
                let i = (pos.floor() as usize).min(n - 2);
                Ok(interpolate_point(pts[i], pts[i + 1], pos - i as f64))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mobject/node.rs"]
mod tests;
