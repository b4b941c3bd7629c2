use std::rc::Rc;

use super::{Canonical, MoveList, PlayerId, Position};

/// A node of an explicitly scripted game tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Finished game with the result from player one's point of view
    Leaf(f64),
    /// Position whose moves lead to the listed children, in move order
    Branch(Vec<Rc<TreeNode>>),
}

impl TreeNode {
    pub fn leaf(outcome: f64) -> Rc<Self> {
        Rc::new(TreeNode::Leaf(outcome))
    }

    pub fn branch(children: Vec<Rc<TreeNode>>) -> Rc<Self> {
        Rc::new(TreeNode::Branch(children))
    }

    /// Number of nodes in this subtree, this node included
    pub fn size(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Branch(children) => 1 + children.iter().map(|c| c.size()).sum::<usize>(),
        }
    }
}

/// A position inside a scripted [`TreeNode`] tree.
///
/// Players alternate on every ply. A `Branch` with no children is a
/// non-terminal position without moves, which is useful for exercising the
/// solver's precondition checks.
#[derive(Debug, Clone)]
pub struct GameTree {
    node: Rc<TreeNode>,
    path: Vec<usize>,
    next_player: PlayerId,
}

impl GameTree {
    pub fn new(root: Rc<TreeNode>, next_player: PlayerId) -> Self {
        Self {
            node: root,
            path: Vec::new(),
            next_player,
        }
    }

    /// Child indices taken from the root to reach this position
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn node(&self) -> &TreeNode {
        &self.node
    }
}

impl Position for GameTree {
    /// Child index
    type Move = usize;

    fn next_player(&self) -> PlayerId {
        self.next_player
    }

    fn legal_moves(&self) -> MoveList<usize> {
        match self.node.as_ref() {
            TreeNode::Leaf(_) => MoveList::new(),
            TreeNode::Branch(children) => (0..children.len()).collect(),
        }
    }

    fn apply_move(&self, mv: &usize) -> Self {
        let node = match self.node.as_ref() {
            TreeNode::Branch(children) if *mv < children.len() => Rc::clone(&children[*mv]),
            // Moves outside the enumeration leave the tree unchanged
            _ => Rc::clone(&self.node),
        };
        let mut path = self.path.clone();
        path.push(*mv);
        Self {
            node,
            path,
            next_player: self.next_player.opponent(),
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self.node.as_ref(), TreeNode::Leaf(_))
    }

    /// Leaf result, or 0.0 for an interior node
    fn outcome(&self) -> f64 {
        match self.node.as_ref() {
            TreeNode::Leaf(outcome) => *outcome,
            TreeNode::Branch(_) => 0.0,
        }
    }
}

impl Canonical for GameTree {
    /// The path from the root identifies a node uniquely
    type Key = Vec<usize>;

    fn canonical_key(&self) -> Vec<usize> {
        self.path.clone()
    }
}
