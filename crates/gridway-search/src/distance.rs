use gridway_core::Point;

/// Cost of one orthogonal step.
pub const CARDINAL_COST: i32 = 10;

/// Cost of one diagonal step (≈ 10·√2).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two points: diagonal steps cover the shorter
/// axis, orthogonal steps the excess. Used both as the edge-cost model and
/// as the A* heuristic (admissible for 8-connected movement).
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    if dx > dy {
        DIAGONAL_COST * dy + CARDINAL_COST * (dx - dy)
    } else {
        DIAGONAL_COST * dx + CARDINAL_COST * (dy - dx)
    }
}

/// Cost of a single unit step between adjacent cells.
#[inline]
pub fn step_cost(from: Point, to: Point) -> i32 {
    if from.x != to.x && from.y != to.y {
        DIAGONAL_COST
    } else {
        CARDINAL_COST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octile_straight_and_diagonal() {
        let o = Point::ZERO;
        assert_eq!(octile(o, Point::new(3, 0)), 30);
        assert_eq!(octile(o, Point::new(0, 4)), 40);
        assert_eq!(octile(o, Point::new(3, 3)), 42);
        // 2 diagonal + 3 straight.
        assert_eq!(octile(o, Point::new(5, 2)), 2 * 14 + 3 * 10);
        assert_eq!(octile(o, o), 0);
    }

    #[test]
    fn octile_is_symmetric() {
        let a = Point::new(-2, 7);
        let b = Point::new(4, -1);
        assert_eq!(octile(a, b), octile(b, a));
    }

    #[test]
    fn step_costs() {
        let p = Point::new(2, 2);
        assert_eq!(step_cost(p, Point::new(3, 2)), CARDINAL_COST);
        assert_eq!(step_cost(p, Point::new(2, 1)), CARDINAL_COST);
        assert_eq!(step_cost(p, Point::new(3, 3)), DIAGONAL_COST);
        assert_eq!(step_cost(p, Point::new(1, 3)), DIAGONAL_COST);
    }
}
