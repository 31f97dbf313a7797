use crate::game::{GameOutcome, GameState, Player};

use super::heuristic::Heuristic;

/// Score reserved for decided positions. Larger than any value the
/// heuristic can produce, so terminal outcomes always dominate minimax
/// comparisons.
pub const WIN_SCORE: i32 = 1_000_000;

/// Score a position as a search leaf: terminal outcomes by result,
/// anything else by the heuristic.
pub(crate) fn position_score(
    state: &GameState,
    perspective: Player,
    heuristic: &dyn Heuristic,
) -> i32 {
    match state.winner() {
        Some(GameOutcome::Winner(winner)) if winner == perspective => WIN_SCORE,
        Some(GameOutcome::Winner(_)) => -WIN_SCORE,
        Some(GameOutcome::Draw) => 0,
        None => heuristic.evaluate(state.board(), perspective),
    }
}

type NodeId = usize;

#[derive(Debug, Clone)]
struct Node {
    /// Move that produced this position; `None` for the pre-game root.
    column: Option<usize>,
    /// Player to move at this position, i.e. the mover of the children.
    mover: Player,
    /// Minimax score from the perspective player's point of view.
    score: i32,
    /// Children keyed by move column, at most one per column.
    children: Vec<(usize, NodeId)>,
}

/// A tree of hypothetical move sequences, nodes held in an arena and
/// referenced by index.
///
/// Every score in the tree answers one question: how good is this subtree
/// for the perspective player. Interior nodes take the max of their
/// children when the perspective player moves there and the min when the
/// opponent does (single-perspective minimax, not negamax), driven by
/// whose turn it is at each node rather than by depth parity.
///
/// As real moves are played the tree is re-rooted via [`SearchTree::regraft`]
/// instead of being rebuilt, keeping lookahead depth constant without
/// recomputing the whole search space each ply.
pub struct SearchTree {
    nodes: Vec<Node>,
    root: NodeId,
    depth: usize,
    perspective: Player,
}

impl SearchTree {
    /// Build a full-width tree of `depth` plies from `state`.
    pub fn generate(
        state: &GameState,
        depth: usize,
        perspective: Player,
        heuristic: &dyn Heuristic,
    ) -> SearchTree {
        let mut tree = SearchTree {
            nodes: Vec::new(),
            root: 0,
            depth,
            perspective,
        };
        let root = tree.push_node(
            state.last_move().map(|(_, column, _)| column),
            state.current_player(),
        );
        tree.root = root;
        tree.expand(root, state, depth, heuristic);
        tree
    }

    /// Configured lookahead depth in plies.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The player this tree's scores are favorable for.
    pub fn perspective(&self) -> Player {
        self.perspective
    }

    /// Minimax score of the current root position.
    pub fn root_score(&self) -> i32 {
        self.nodes[self.root].score
    }

    /// The root's children as (column, score) pairs.
    pub fn root_children(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.nodes[self.root]
            .children
            .iter()
            .map(|&(column, child)| (column, self.nodes[child].score))
    }

    /// Number of nodes currently held by the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Re-root the tree at the child matching an actually played move.
    ///
    /// `state` must be the position after that move. The surviving subtree
    /// is compacted into a fresh arena (all siblings dropped as one), then
    /// the frontier is re-expanded so every non-terminal leaf again sits
    /// exactly `depth` plies below the new root, with scores re-propagated
    /// bottom-up. A missing child (pre-game sentinel root, or a tree gone
    /// stale) falls back to rebuilding from scratch.
    pub fn regraft(&mut self, column: usize, state: &GameState, heuristic: &dyn Heuristic) {
        let grafted = self.nodes[self.root]
            .children
            .iter()
            .map(|&(_, child)| child)
            .find(|&child| self.nodes[child].column == Some(column));

        match grafted {
            Some(child) => {
                let mut survivors = Vec::new();
                let root = copy_subtree(&self.nodes, child, &mut survivors);
                self.nodes = survivors;
                self.root = root;
                self.refresh(root, state, self.depth, heuristic);
            }
            None => *self = SearchTree::generate(state, self.depth, self.perspective, heuristic),
        }
    }

    fn push_node(&mut self, column: Option<usize>, mover: Player) -> NodeId {
        self.nodes.push(Node {
            column,
            mover,
            score: 0,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Recursively expand `node` (at position `state`) to `depth` plies
    /// and return its propagated score.
    fn expand(
        &mut self,
        node: NodeId,
        state: &GameState,
        depth: usize,
        heuristic: &dyn Heuristic,
    ) -> i32 {
        if depth == 0 || state.is_terminal() {
            let score = position_score(state, self.perspective, heuristic);
            self.nodes[node].score = score;
            return score;
        }

        for &column in state.open_columns() {
            let child_state = state.apply(column).expect("open column is playable");
            let child = self.push_node(Some(column), child_state.current_player());
            self.expand(child, &child_state, depth - 1, heuristic);
            self.nodes[node].children.push((column, child));
        }
        self.propagate(node)
    }

    /// Bring a regrafted subtree back to full depth: former leaves that are
    /// now too shallow get re-expanded from their replayed board state,
    /// interior nodes recurse and re-propagate.
    fn refresh(
        &mut self,
        node: NodeId,
        state: &GameState,
        depth: usize,
        heuristic: &dyn Heuristic,
    ) -> i32 {
        if depth == 0 || state.is_terminal() {
            let score = position_score(state, self.perspective, heuristic);
            self.nodes[node].score = score;
            return score;
        }

        if self.nodes[node].children.is_empty() {
            return self.expand(node, state, depth, heuristic);
        }

        let children = self.nodes[node].children.clone();
        for (column, child) in children {
            let child_state = state.apply(column).expect("tree child is a legal move");
            self.refresh(child, &child_state, depth - 1, heuristic);
        }
        self.propagate(node)
    }

    /// Fold children into this node's score: max when the perspective
    /// player moves here, min when the opponent does.
    fn propagate(&mut self, node: NodeId) -> i32 {
        let maximizing = self.nodes[node].mover == self.perspective;
        let child_scores = self.nodes[node]
            .children
            .iter()
            .map(|&(_, child)| self.nodes[child].score);
        let score = if maximizing {
            child_scores.max()
        } else {
            child_scores.min()
        }
        .expect("interior node has at least one child");
        self.nodes[node].score = score;
        score
    }
}

/// Deep-copy the subtree rooted at `node` from `src` into `dst`,
/// returning the copy's root id. Everything not reachable from `node`
/// is left behind.
fn copy_subtree(src: &[Node], node: NodeId, dst: &mut Vec<Node>) -> NodeId {
    let id = dst.len();
    dst.push(Node {
        column: src[node].column,
        mover: src[node].mover,
        score: src[node].score,
        children: Vec::with_capacity(src[node].children.len()),
    });
    for &(column, child) in &src[node].children {
        let copied = copy_subtree(src, child, dst);
        dst[id].children.push((column, copied));
    }
    id
}
