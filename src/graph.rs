use itertools::Itertools;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::board::Board;
use crate::cell::{fixed_target, Cell, Jump};

/// The directed jump graph of a [`Board`], rebuilt for every solve.
///
/// Node `i` carries cell index `i`. A fixed jump landing on a cell a free jump also reaches is kept as a
/// parallel edge, and a zero-length fixed jump is kept as a self loop; both count as separate moves.
pub(crate) struct JumpGraph {
    graph: DiGraph<Cell, Jump>,
}

impl From<&Board> for JumpGraph {
    fn from(board: &Board) -> Self {
        let size = board.size();
        let mut graph = DiGraph::with_capacity(
            size,
            // every free edge plus one fixed edge per cell, at most
            size * size.saturating_sub(1) / 2 + size,
        );

        let nodes = (0..size).map(|cell| graph.add_node(cell)).collect_vec();

        // the goal has no outgoing edges
        for (cell, length) in board.cells().iter().copied().enumerate().take(size.saturating_sub(1)) {
            if let Some(target) = fixed_target(cell, length, size) {
                graph.add_edge(nodes[cell], nodes[target], Jump::Fixed);
            }

            for target in cell + 1..size {
                graph.add_edge(nodes[cell], nodes[target], Jump::Free);
            }
        }

        Self { graph }
    }
}

impl JumpGraph {
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub(crate) fn goal(&self) -> Option<Cell> {
        self.size().checked_sub(1)
    }

    /// Every move out of `cell`, duplicates included: the fixed jump first, then free jumps in increasing order.
    pub(crate) fn targets(&self, cell: Cell) -> Vec<Cell> {
        self.graph.edges(NodeIndex::new(cell))
            .map(|edge| (*edge.weight(), self.graph[edge.target()]))
            .sorted()
            .map(|(_, target)| target)
            .collect_vec()
    }

    /// Number of edges, parallel ones included.
    #[inline]
    pub(crate) fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::graph::JumpGraph;

    #[test]
    fn fixed_jump_is_listed_first_and_duplicated() {
        let graph = JumpGraph::from(&Board::new(3, vec![1, 2, 3]));
        assert_eq!(graph.targets(0), vec![1, 1, 2]);
        // 1 + 2 runs off the board
        assert_eq!(graph.targets(1), vec![2]);
        assert!(graph.targets(2).is_empty());
    }

    #[test]
    fn zero_jump_is_a_self_loop() {
        let graph = JumpGraph::from(&Board::new(4, vec![0, 0, 0, 0]));
        assert_eq!(graph.targets(0), vec![0, 1, 2, 3]);
        assert_eq!(graph.targets(2), vec![2, 3]);
    }

    #[test]
    fn edge_count_matches_definition() {
        // free edges: 4 + 3 + 2 + 1, fixed edges from cells 0, 1 and 2
        let graph = JumpGraph::from(&Board::new(5, vec![2, 2, 2, 9, 9]));
        assert_eq!(graph.edge_count(), 13);
        assert_eq!(graph.goal(), Some(4));
    }
}
