//! Terrain classification: the [`Terrain`] class codes and the [`ClassMap`]
//! matrix produced by map generators.

use crate::geom::{Point, Range};

/// A terrain class with a stable integer code in `0..=8`.
///
/// Classes 2–5 (desert through forest) are traversable; water, hills and
/// high ground are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Terrain {
    DeepWater = 0,
    ShallowWater = 1,
    Desert = 2,
    Plains = 3,
    Grassland = 4,
    Forest = 5,
    Hills = 6,
    Mountains = 7,
    Peaks = 8,
}

impl Terrain {
    /// Number of terrain classes.
    pub const COUNT: usize = 9;

    /// The stable integer code of this class.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look a class up by its integer code.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::DeepWater,
            1 => Self::ShallowWater,
            2 => Self::Desert,
            3 => Self::Plains,
            4 => Self::Grassland,
            5 => Self::Forest,
            6 => Self::Hills,
            7 => Self::Mountains,
            8 => Self::Peaks,
            _ => return None,
        })
    }

    /// Whether cells of this class can be walked on.
    #[inline]
    pub const fn walkable(self) -> bool {
        matches!(self, Self::Desert | Self::Plains | Self::Grassland | Self::Forest)
    }
}

impl Default for Terrain {
    fn default() -> Self {
        Self::DeepWater
    }
}

/// A width × height matrix of terrain classes — the output contract of the
/// map generators, consumed by [`Grid::from_map`](crate::Grid::from_map).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassMap {
    width: i32,
    height: i32,
    cells: Vec<Terrain>,
}

impl ClassMap {
    /// Create a map of the given dimensions, filled with deep water.
    ///
    /// Non-positive dimensions are clamped to zero, yielding an empty map.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            cells: vec![Terrain::default(); (w as usize) * (h as usize)],
        }
    }

    /// Width of the map.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the map.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The class at `p`, or `None` outside the map.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Terrain> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Set the class at `p`. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, t: Terrain) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = t;
        }
    }

    /// Row-major iterator over `(Point, Terrain)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Terrain)> + '_ {
        self.bounds().iter().map(|p| {
            let i = (p.y as usize) * (self.width as usize) + (p.x as usize);
            (p, self.cells[i])
        })
    }
}
