//! Explicit game trees for search tests.

use crate::core::Player;
use crate::rules::RulesEngine;

#[derive(Clone, Debug, Default)]
struct TreeNode {
    children: Vec<usize>,
    value: i64,
    winner: Option<Player>,
}

/// A game whose positions are node ids in a hand-built tree.
///
/// Moves are the child ids. Both players see the same children, so the
/// shape alone decides who moves where.
#[derive(Clone, Debug)]
pub(crate) struct TreeGame {
    nodes: Vec<TreeNode>,
}

impl TreeGame {
    /// A tree holding only the root, node 0.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![TreeNode::default()],
        }
    }

    /// Root with one child per row and one leaf per value in that row.
    pub(crate) fn two_ply(rows: &[&[i64]]) -> Self {
        let mut tree = Self::new();
        for row in rows {
            let child = tree.add(0, 0);
            for &value in *row {
                tree.add(child, value);
            }
        }
        tree
    }

    /// Attach a new node under `parent` and return its id.
    pub(crate) fn add(&mut self, parent: usize, value: i64) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            value,
            ..TreeNode::default()
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Mark `node` as won by `player`.
    pub(crate) fn set_winner(&mut self, node: usize, player: Player) {
        self.nodes[node].winner = Some(player);
    }

    /// Set the heuristic value of `node`.
    pub(crate) fn set_value(&mut self, node: usize, value: i64) {
        self.nodes[node].value = value;
    }
}

impl RulesEngine for TreeGame {
    type State = usize;
    type Move = usize;

    fn successors(&self, state: &usize, _player: Player) -> Vec<(usize, usize)> {
        self.nodes[*state].children.iter().map(|&c| (c, c)).collect()
    }

    fn winner(&self, state: &usize) -> Option<Player> {
        self.nodes[*state].winner
    }

    fn evaluate(&self, state: &usize) -> i64 {
        self.nodes[*state].value
    }
}
