use mazegraph_core::{Point, Tile};

/// Index of the neighbor that best advances along `direction`.
///
/// Each neighbor induces the vector from `pivot` to it, with Y flipped so
/// that positive Y points up (tile rows grow downward). The neighbor whose
/// induced vector has the greatest dot product with `direction` wins, the
/// first one on ties. Returns `None` when no dot product is positive, i.e.
/// every neighbor is sideways or behind.
///
/// Scores are computed in `i64`, so any `direction` is accepted.
pub fn most_aligned<I>(pivot: Tile, neighbors: I, direction: Point) -> Option<usize>
where
    I: IntoIterator<Item = Tile>,
{
    let mut best: Option<(usize, i64)> = None;
    for (i, t) in neighbors.into_iter().enumerate() {
        let d = pivot.delta(t);
        let score =
            i64::from(d.x) * i64::from(direction.x) - i64::from(d.y) * i64::from(direction.y);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((i, score));
        }
    }
    best.filter(|&(_, s)| s > 0).map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIVOT: Tile = Tile::new(5, 5);
    const UP: Tile = Tile::new(5, 4);
    const RIGHT: Tile = Tile::new(6, 5);
    const DOWN: Tile = Tile::new(5, 6);
    const LEFT: Tile = Tile::new(4, 5);

    #[test]
    fn y_axis_is_flipped() {
        let ns = [DOWN, UP];
        // Positive Y means "up", i.e. a smaller row index.
        assert_eq!(most_aligned(PIVOT, ns, Point::new(0, 1)), Some(1));
        assert_eq!(most_aligned(PIVOT, ns, Point::new(0, -1)), Some(0));
    }

    #[test]
    fn picks_greatest_dot() {
        let ns = [LEFT, UP, RIGHT];
        assert_eq!(most_aligned(PIVOT, ns, Point::new(3, 1)), Some(2));
        assert_eq!(most_aligned(PIVOT, ns, Point::new(-1, 3)), Some(1));
    }

    #[test]
    fn tie_goes_to_first_seen() {
        let ns = [RIGHT, UP];
        assert_eq!(most_aligned(PIVOT, ns, Point::new(1, 1)), Some(0));
        let ns = [UP, RIGHT];
        assert_eq!(most_aligned(PIVOT, ns, Point::new(1, 1)), Some(0));
    }

    #[test]
    fn sideways_or_backward_is_rejected() {
        let ns = [UP, DOWN, LEFT];
        assert_eq!(most_aligned(PIVOT, ns, Point::new(1, 0)), None);
        assert_eq!(most_aligned(PIVOT, [LEFT], Point::new(1, 0)), None);
    }

    #[test]
    fn extreme_directions_do_not_overflow() {
        let ns = [LEFT, UP, RIGHT, DOWN];
        assert_eq!(most_aligned(PIVOT, ns, Point::new(i32::MIN, 0)), Some(0));
        assert_eq!(most_aligned(PIVOT, ns, Point::new(i32::MAX, 0)), Some(2));
        assert_eq!(most_aligned(PIVOT, ns, Point::new(0, i32::MIN)), Some(3));
        assert_eq!(most_aligned(PIVOT, ns, Point::new(0, i32::MAX)), Some(1));
        assert_eq!(
            most_aligned(PIVOT, ns, Point::new(i32::MIN, i32::MIN)),
            Some(0)
        );
        assert_eq!(most_aligned(PIVOT, [RIGHT], Point::new(i32::MIN, 0)), None);
    }

    #[test]
    fn long_edges_with_large_directions() {
        // Edges need not join grid-adjacent tiles.
        let far_right = Tile::new(9, 5);
        let far_left = Tile::new(0, 5);
        let dir = Point::new(i32::MAX / 2, 0);
        assert_eq!(most_aligned(PIVOT, [far_left, far_right], dir), Some(1));
        let back = Point::new(i32::MIN / 2, 0);
        assert_eq!(most_aligned(PIVOT, [far_left, far_right], back), Some(0));
    }

    #[test]
    fn no_neighbors() {
        let none: [Tile; 0] = [];
        assert_eq!(most_aligned(PIVOT, none, Point::new(1, 0)), None);
    }
}
