//! Shape renderer - strokes wireframe outlines onto a surface.
//!
//! Geometry is derived from an anchor (top-left of the shape's bounding
//! box) and a size. Fractional offsets such as `size / 3` are computed in
//! floating point and rounded to the nearest pixel, the same way for every
//! kind, so vertices never drift by a pixel between shapes.

use crate::types::{Colour, Point, ShapeKind};

use super::canvas::Surface;

/// The vertices and edges of one wireframe shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub kind: ShapeKind,

    /// Vertices in image space.
    vertices: Vec<Point>,

    /// Edges as index pairs into `vertices`.
    edges: Vec<(usize, usize)>,
}

impl Outline {
    /// Compute the outline of `kind` anchored at `anchor` with edge length `size`.
    ///
    /// Returns `None` for kinds that have no geometry (hexagon, octagon).
    pub fn for_kind(kind: ShapeKind, anchor: Point, size: u32) -> Option<Self> {
        let s = size as f64;
        let at = |dx: f64, dy: f64| anchor.offset(dx, dy);

        let (vertices, edges) = match kind {
            // Isometric cube: a diamond plus both diagonals.
            ShapeKind::Cube => (
                vec![
                    at(s / 2.0, 0.0),     // top
                    at(s, s / 3.0),       // right
                    at(s / 2.0, s / 1.5), // bottom
                    at(0.0, s / 3.0),     // left
                ],
                vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)],
            ),
            ShapeKind::Pyramid => (
                vec![
                    at(s / 2.0, 0.0), // apex
                    at(0.0, s),
                    at(s, s),
                    at(s / 2.0, s / 2.0),
                ],
                vec![(0, 1), (0, 2), (0, 3), (1, 2), (2, 3), (3, 1)],
            ),
            ShapeKind::Crystal => (
                vec![
                    at(s / 2.0, 0.0),     // top
                    at(s, s / 3.0),       // right
                    at(s * 3.0 / 4.0, s), // bottom right
                    at(s / 4.0, s),       // bottom left
                    at(0.0, s / 3.0),     // left
                ],
                vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2), (0, 3)],
            ),
            ShapeKind::Hexagon | ShapeKind::Octagon => return None,
        };

        Some(Self {
            kind,
            vertices,
            edges,
        })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Iterate over the line segments making up this outline.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.edges
            .iter()
            .map(|&(a, b)| (self.vertices[a], self.vertices[b]))
    }

    /// Number of segments stroked when this outline is drawn.
    pub fn segment_count(&self) -> usize {
        self.edges.len()
    }
}

/// Draws shape outlines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeRenderer;

impl ShapeRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Stroke the outline of `kind` onto `surface` with 1-pixel lines.
    ///
    /// Returns the number of segments stroked, which is zero for kinds
    /// without geometry.
    pub fn draw_outline<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        kind: ShapeKind,
        anchor: Point,
        size: u32,
        colour: Colour,
    ) -> usize {
        let Some(outline) = Outline::for_kind(kind, anchor, size) else {
            return 0;
        };

        for (from, to) in outline.segments() {
            surface.stroke(from, to, colour);
        }
        outline.segment_count()
    }
}
