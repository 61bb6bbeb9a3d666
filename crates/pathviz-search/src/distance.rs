use pathviz_core::Position;

/// Manhattan (L1) distance between two positions. Admissible and
/// consistent on a 4-directional unit-cost lattice.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Position::new(0, 0), Position::new(3, 3)), 6);
        assert_eq!(manhattan(Position::new(2, 5), Position::new(2, 5)), 0);
        assert_eq!(manhattan(Position::new(-1, 4), Position::new(1, 0)), 6);
    }
}
