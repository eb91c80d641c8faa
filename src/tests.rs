#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use proptest::prelude::*;

    use crate::board::Board;
    use crate::solver::{Reach, SolveError, Solution, MAX_COUNTABLE_SIZE};

    #[test]
    fn solve_literal_board() {
        let solution = Board::new(3, vec![1, 2, 3]).solve().unwrap();

        assert_eq!(solution.reach, Reach::Reached(NonZero::new(1).unwrap()));
        assert_eq!(solution.probability, 1.0);
        assert_eq!(solution.combinations, 3);
    }

    #[test]
    fn size_mismatch_is_degenerate() {
        let board = Board::new(5, vec![1, 2]);
        assert!(board.is_degenerate());
        assert_eq!(board.solve().unwrap(), Solution::DEGENERATE);
    }

    #[test]
    fn single_cell_is_degenerate() {
        assert_eq!(Board::new(1, vec![0]).solve().unwrap(), Solution::DEGENERATE);
        assert_eq!(Board::new(0, vec![]).solve().unwrap(), Solution::DEGENERATE);
    }

    #[test]
    fn longer_listing_is_degenerate() {
        assert_eq!(Board::new(3, vec![1, 1, 1, 1]).solve().unwrap(), Solution::DEGENERATE);
    }

    #[test]
    fn oversized_board_is_rejected_before_solving() {
        let size = 200_000;
        assert_eq!(Board::new(size, vec![1; size]).solve(), Err(SolveError::BoardTooLarge { size }));

        let size = MAX_COUNTABLE_SIZE + 1;
        assert_eq!(Board::new(size, vec![0; size]).solve(), Err(SolveError::BoardTooLarge { size }));
    }

    #[test]
    fn oversized_mismatch_still_degrades() {
        assert_eq!(Board::new(200_000, vec![1, 2]).solve().unwrap(), Solution::DEGENERATE);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Board::new(4, vec![3, 0, 12, 1])), "[3 0 12 1]");
    }

    fn boards() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(0u32..8, 2..24)
    }

    proptest! {
        #[test]
        fn reachable_boards_are_positive(cells in boards()) {
            let solution = Board::new(cells.len(), cells).solve().unwrap();

            prop_assert!(solution.reach.turns() >= 1);
            prop_assert!(solution.probability > 0.0 && solution.probability <= 1.0);
            prop_assert!(solution.combinations >= 1);
        }

        #[test]
        fn nonzero_jumps_always_succeed(cells in prop::collection::vec(1u32..8, 2..24)) {
            let solution = Board::new(cells.len(), cells).solve().unwrap();
            prop_assert_eq!(solution.probability, 1.0);
        }

        #[test]
        fn extending_never_loses_paths(cells in boards(), extra in prop::collection::vec(0u32..8, 1..6)) {
            let prefix = Board::new(cells.len(), cells.clone()).solve().unwrap();

            let mut extended = cells;
            extended.extend(extra);
            let extended = Board::new(extended.len(), extended).solve().unwrap();

            prop_assert!(extended.combinations >= prefix.combinations);
        }

        #[test]
        fn solving_is_repeatable(cells in boards()) {
            let board = Board::new(cells.len(), cells);
            let first = board.solve().unwrap();
            let second = board.solve().unwrap();

            prop_assert_eq!(first.reach, second.reach);
            prop_assert_eq!(first.probability.to_bits(), second.probability.to_bits());
            prop_assert_eq!(first.combinations, second.combinations);
        }

        #[test]
        fn mismatched_size_is_degenerate(cells in boards(), size in 0usize..32) {
            prop_assume!(size != cells.len());
            prop_assert_eq!(Board::new(size, cells).solve().unwrap(), Solution::DEGENERATE);
        }
    }
}
