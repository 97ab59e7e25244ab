//! Shape kinds that can be scattered over a wallpaper.

use std::fmt;
use std::str::FromStr;

use crate::error::{GeowallError, Result};

/// The kind of wireframe shape.
///
/// Hexagon and octagon can be selected by the composer but have no outline
/// geometry; see [`ShapeKind::has_geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    Pyramid,
    Hexagon,
    Octagon,
    Crystal,
}

impl ShapeKind {
    /// Every kind, in declaration order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Cube,
        ShapeKind::Pyramid,
        ShapeKind::Hexagon,
        ShapeKind::Octagon,
        ShapeKind::Crystal,
    ];

    /// Get the short name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Crystal => "crystal",
        }
    }

    /// Whether an outline is defined for this kind.
    pub fn has_geometry(&self) -> bool {
        !matches!(self, ShapeKind::Hexagon | ShapeKind::Octagon)
    }

    /// Position of this kind in [`ShapeKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::Cube => 0,
            ShapeKind::Pyramid => 1,
            ShapeKind::Hexagon => 2,
            ShapeKind::Octagon => 3,
            ShapeKind::Crystal => 4,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = GeowallError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| GeowallError::Parse {
                message: format!("Unknown shape kind: {}", s),
                help: Some("Use cube, pyramid, hexagon, octagon, or crystal".to_string()),
            })
    }
}
