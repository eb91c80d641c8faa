/// Index of a cell on the board. Cell `0` is the start, the last cell is the goal.
pub type Cell = usize;

/// Magnitude of the fixed jump printed on a cell.
pub type JumpLength = u32;

/// The kind of move an edge of the jump graph represents.
///
/// Ordered so that a cell's fixed jump sorts ahead of its free jumps.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Jump {
    /// Move from `i` to `i + board[i]`, present only while it stays on the board.
    Fixed,
    /// Move from `i` to any later cell.
    Free,
}

/// Where the fixed jump from `cell` lands, if it stays on a board of `size` cells.
#[inline]
pub(crate) fn fixed_target(cell: Cell, length: JumpLength, size: usize) -> Option<Cell> {
    cell.checked_add(length as usize).filter(|target| *target < size)
}

#[cfg(test)]
mod tests {
    use crate::cell::{fixed_target, Jump};

    #[test]
    fn fixed_sorts_before_free() {
        assert!(Jump::Fixed < Jump::Free);
    }

    #[test]
    fn fixed_target_stays_on_board() {
        assert_eq!(fixed_target(0, 2, 3), Some(2));
        assert_eq!(fixed_target(1, 2, 3), None);
        assert_eq!(fixed_target(usize::MAX, 1, 3), None);
    }
}
