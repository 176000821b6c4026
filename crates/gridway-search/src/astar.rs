//! The [`Pathfinder`] — A* search with a reusable scratch arena.

use gridway_core::{Point, Range};

use crate::distance::{octile, step_cost};
use crate::heap::{MinHeap, Priority};
use crate::traits::SearchGraph;

/// Per-cell scratch state for one search, invalidated lazily by the
/// generation stamp so a new search never has to clear the arena.
#[derive(Clone)]
struct ScratchNode {
    g: i32,
    h: i32,
    parent: usize,
    generation: u32,
    closed: bool,
}

impl Default for ScratchNode {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            parent: usize::MAX,
            generation: 0,
            closed: false,
        }
    }
}

/// A* shortest-path search over any [`SearchGraph`].
///
/// One `Pathfinder` serves one search at a time but is reusable across
/// searches without reallocation: the node arena, the open-set heap, and
/// the neighbor buffer are all kept warm. The graph itself is only read,
/// so several pathfinders may query the same grid concurrently.
pub struct Pathfinder {
    bounds: Range,
    width: usize,
    nodes: Vec<ScratchNode>,
    generation: u32,
    open: MinHeap,
    nbuf: Vec<Point>,
}

impl Pathfinder {
    /// Create a pathfinder for searches within the given rectangle.
    pub fn new(bounds: Range) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            width: bounds.width().max(0) as usize,
            nodes: vec![ScratchNode::default(); len],
            // Fresh nodes carry generation 0; starting at 1 keeps them
            // distinguishable from searched ones until the first search.
            generation: 1,
            open: MinHeap::with_capacity(len),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The rectangle searches are confined to.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Replace the search rectangle.
    ///
    /// If the new area fits within the existing arena, capacity is kept and
    /// stale entries are invalidated by bumping the generation; otherwise
    /// the arena and open set are reallocated.
    pub fn set_bounds(&mut self, bounds: Range) {
        let new_len = bounds.len();
        self.bounds = bounds;
        self.width = bounds.width().max(0) as usize;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            self.open.clear();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, ScratchNode::default());
        // Same as `new`: stay ahead of the freshly zeroed node stamps.
        self.generation = 1;
        self.open = MinHeap::with_capacity(new_len);
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.bounds.min.x;
        let y = (idx / self.width) as i32 + self.bounds.min.y;
        Point::new(x, y)
    }

    /// The accumulated cost from the start to `p` recorded by the most
    /// recent search, or `None` if `p` was never touched.
    pub fn cost_to(&self, p: Point) -> Option<i32> {
        let i = self.idx(p)?;
        let n = &self.nodes[i];
        (n.generation == self.generation).then_some(n.g)
    }

    /// Compute the shortest path from `from` to `to` using A* with the
    /// octile cost model (orthogonal 10, diagonal 14).
    ///
    /// Returns the full path including both endpoints, or `None` when no
    /// path exists or either endpoint lies outside the search bounds.
    pub fn find_path<G: SearchGraph>(
        &mut self,
        graph: &G,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump the generation to lazily invalidate the whole arena.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;
        self.open.clear();

        let start_h = octile(from, to);
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.h = start_h;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.closed = false;
        }
        self.open
            .push(start_idx, Priority { f: start_h, h: start_h })
            .expect("open set sized to the cell count");

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;
        let mut found = false;

        while let Some((ci, _)) = self.open.pop() {
            self.nodes[ci].closed = true;
            expanded += 1;

            if ci == goal_idx {
                found = true;
                break;
            }

            let current_g = self.nodes[ci].g;
            let cp = self.point(ci);

            nbuf.clear();
            graph.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + step_cost(cp, np);

                let node = &mut self.nodes[ni];
                if node.generation == cur_gen {
                    // Seen this search: relax only a strictly cheaper route
                    // to a still-open node.
                    if node.closed || tentative >= node.g {
                        continue;
                    }
                    node.g = tentative;
                    node.parent = ci;
                    let key = Priority {
                        f: tentative + node.h,
                        h: node.h,
                    };
                    self.open
                        .decrease(ni, key)
                        .expect("relaxed node is still in the open set");
                } else {
                    node.generation = cur_gen;
                    node.closed = false;
                    node.g = tentative;
                    node.h = octile(np, to);
                    node.parent = ci;
                    let key = Priority {
                        f: tentative + node.h,
                        h: node.h,
                    };
                    self.open
                        .push(ni, key)
                        .expect("open set sized to the cell count");
                }
            }
        }

        self.nbuf = nbuf;

        log::debug!(
            "astar {from} -> {to}: {} after {expanded} expansions",
            if found { "found" } else { "exhausted" },
        );

        if !found {
            return None;
        }

        // Reconstruct by following parent back-pointers, then reverse.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
