//! The [`Grid`] type — a fixed-size 2D collection of terrain cells.
//!
//! A `Grid` owns its cells in a flat row-major vector. Walkability is
//! derived from the terrain class at construction time and can afterwards
//! be overridden per rectangle with [`Grid::add_obstacle`]. Search scratch
//! state (costs, parents) deliberately does *not* live here; it belongs to
//! the pathfinder, so a shared `&Grid` can serve any number of searches.

use thiserror::Error;

use crate::geom::{Point, Range};
use crate::terrain::{ClassMap, Terrain};

/// Errors reported by [`Grid`] constructors and mutators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Grid dimensions must both be positive.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    BadDimensions { width: i32, height: i32 },
    /// An obstacle rectangle reached outside the grid.
    #[error("obstacle rectangle {rect} exceeds grid bounds {bounds}")]
    ObstacleOutOfBounds { rect: Range, bounds: Range },
}

/// A fixed-size grid of terrain cells with bounds-checked lookup and
/// 8-connected neighbor enumeration.
#[derive(Debug, Clone)]
pub struct Grid {
    bounds: Range,
    terrain: Vec<Terrain>,
    walkable: Vec<bool>,
    /// The at-most-one path kept for display, overwritten per search.
    current_path: Option<Vec<Point>>,
}

impl Grid {
    /// Create a grid with every cell walkable, for ad hoc obstacle
    /// placement via [`add_obstacle`](Grid::add_obstacle).
    pub fn open(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::BadDimensions { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            bounds: Range::new(0, 0, width, height),
            terrain: vec![Terrain::Grassland; len],
            walkable: vec![true; len],
            current_path: None,
        })
    }

    /// Create a grid from a terrain-class map, deriving per-cell
    /// walkability from [`Terrain::walkable`].
    pub fn from_map(map: &ClassMap) -> Result<Self, GridError> {
        if map.width() <= 0 || map.height() <= 0 {
            return Err(GridError::BadDimensions {
                width: map.width(),
                height: map.height(),
            });
        }
        let len = map.bounds().len();
        let mut terrain = Vec::with_capacity(len);
        let mut walkable = Vec::with_capacity(len);
        for (_, t) in map.iter() {
            terrain.push(t);
            walkable.push(t.walkable());
        }
        Ok(Self {
            bounds: map.bounds(),
            terrain,
            walkable,
            current_path: None,
        })
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Total cell count — the upper bound on any search's open set.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.bounds.len()
    }

    /// Whether `p` lies within grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if self.bounds.contains(p) {
            Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The terrain class at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Terrain> {
        self.idx(p).map(|i| self.terrain[i])
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.walkable[i])
    }

    /// Append the in-bounds Chebyshev neighbors of `p` into `buf`
    /// (3 at a corner, 5 at an edge, 8 interior). The caller clears `buf`.
    ///
    /// Walkability is not consulted here, and diagonal neighbors are not
    /// checked against the two flanking orthogonal cells — a diagonal move
    /// can slip between two blocking obstacles.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_8() {
            if self.bounds.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Mark every cell of `rect` non-walkable.
    ///
    /// The rectangle must lie entirely within grid bounds.
    pub fn add_obstacle(&mut self, rect: Range) -> Result<(), GridError> {
        if !rect.in_range(self.bounds) {
            return Err(GridError::ObstacleOutOfBounds {
                rect,
                bounds: self.bounds,
            });
        }
        for p in rect.iter() {
            if let Some(i) = self.idx(p) {
                self.walkable[i] = false;
            }
        }
        Ok(())
    }

    /// Store the path to display, replacing any previous one.
    pub fn set_current_path(&mut self, path: Vec<Point>) {
        self.current_path = Some(path);
    }

    /// The currently displayed path, if any.
    #[inline]
    pub fn current_path(&self) -> Option<&[Point]> {
        self.current_path.as_deref()
    }

    /// Discard the displayed path.
    pub fn clear_current_path(&mut self) {
        self.current_path = None;
    }

    /// Translate a pointer position in pixels into a grid coordinate,
    /// given the on-screen size of one cell. `None` outside the grid.
    pub fn cell_at_pixel(&self, px: f32, py: f32, cell_size: f32) -> Option<Point> {
        if cell_size <= 0.0 || px < 0.0 || py < 0.0 {
            return None;
        }
        let p = Point::new((px / cell_size) as i32, (py / cell_size) as i32);
        self.bounds.contains(p).then_some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_is_fully_walkable() {
        let g = Grid::open(4, 3).unwrap();
        assert_eq!(g.max_size(), 12);
        for p in g.bounds().iter() {
            assert!(g.is_walkable(p));
        }
    }

    #[test]
    fn bad_dimensions_are_rejected() {
        let err = Grid::open(0, 5).unwrap_err();
        assert_eq!(err, GridError::BadDimensions { width: 0, height: 5 });
        assert!(Grid::from_map(&ClassMap::new(0, 0)).is_err());
    }

    #[test]
    fn from_map_derives_walkability() {
        let mut map = ClassMap::new(3, 1);
        map.set(Point::new(0, 0), Terrain::DeepWater);
        map.set(Point::new(1, 0), Terrain::Plains);
        map.set(Point::new(2, 0), Terrain::Mountains);
        let g = Grid::from_map(&map).unwrap();
        assert!(!g.is_walkable(Point::new(0, 0)));
        assert!(g.is_walkable(Point::new(1, 0)));
        assert!(!g.is_walkable(Point::new(2, 0)));
        assert_eq!(g.at(Point::new(1, 0)), Some(Terrain::Plains));
    }

    #[test]
    fn at_returns_none_out_of_bounds() {
        let g = Grid::open(2, 2).unwrap();
        assert_eq!(g.at(Point::new(-1, 0)), None);
        assert_eq!(g.at(Point::new(2, 0)), None);
        assert!(!g.is_walkable(Point::new(0, 2)));
    }

    #[test]
    fn neighbor_counts() {
        let g = Grid::open(5, 5).unwrap();
        let mut buf = Vec::new();

        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 3); // corner

        buf.clear();
        g.neighbors(Point::new(2, 0), &mut buf);
        assert_eq!(buf.len(), 5); // edge

        buf.clear();
        g.neighbors(Point::new(2, 2), &mut buf);
        assert_eq!(buf.len(), 8); // interior
    }

    #[test]
    fn neighbors_ignore_walkability() {
        let mut g = Grid::open(3, 3).unwrap();
        g.add_obstacle(Range::new(0, 0, 3, 1)).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), &mut buf);
        // Blocked cells still count as neighbors.
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn add_obstacle_blocks_rectangle() {
        let mut g = Grid::open(5, 5).unwrap();
        g.add_obstacle(Range::new(1, 1, 3, 4)).unwrap();
        for p in Range::new(1, 1, 3, 4).iter() {
            assert!(!g.is_walkable(p));
        }
        assert!(g.is_walkable(Point::new(0, 0)));
        assert!(g.is_walkable(Point::new(3, 1)));
    }

    #[test]
    fn add_obstacle_out_of_bounds_is_an_error() {
        let mut g = Grid::open(4, 4).unwrap();
        let rect = Range::new(2, 2, 6, 6);
        let err = g.add_obstacle(rect).unwrap_err();
        assert_eq!(
            err,
            GridError::ObstacleOutOfBounds {
                rect,
                bounds: g.bounds()
            }
        );
        // Nothing was mutated.
        assert!(g.is_walkable(Point::new(3, 3)));
    }

    #[test]
    fn current_path_slot() {
        let mut g = Grid::open(3, 3).unwrap();
        assert!(g.current_path().is_none());
        g.set_current_path(vec![Point::new(0, 0), Point::new(1, 1)]);
        assert_eq!(g.current_path().unwrap().len(), 2);
        g.set_current_path(vec![Point::new(2, 2)]);
        assert_eq!(g.current_path().unwrap(), &[Point::new(2, 2)]);
        g.clear_current_path();
        assert!(g.current_path().is_none());
    }

    #[test]
    fn cell_at_pixel_translation() {
        let g = Grid::open(10, 10).unwrap();
        assert_eq!(g.cell_at_pixel(0.0, 0.0, 16.0), Some(Point::new(0, 0)));
        assert_eq!(g.cell_at_pixel(47.9, 16.0, 16.0), Some(Point::new(2, 1)));
        assert_eq!(g.cell_at_pixel(160.0, 0.0, 16.0), None);
        assert_eq!(g.cell_at_pixel(-1.0, 0.0, 16.0), None);
        assert_eq!(g.cell_at_pixel(5.0, 5.0, 0.0), None);
    }
}
