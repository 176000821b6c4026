use gridway_core::{Grid, Point};

/// The seam between the search and the map it runs over.
///
/// Implementors append the *traversable* neighbors of `p`; anything pushed
/// is a legal move target. The octile cost model (one cell per step) is
/// fixed by the pathfinder, so only adjacency is asked of the graph.
pub trait SearchGraph {
    /// Append the traversable neighbors of `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl SearchGraph for Grid {
    /// 8-connected, in-bounds, walkable. Diagonal moves are allowed even
    /// between two blocking orthogonal cells (see [`Grid::neighbors`]).
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_8() {
            if self.is_walkable(n) {
                buf.push(n);
            }
        }
    }
}
