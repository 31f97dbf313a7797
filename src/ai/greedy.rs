use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{GameState, Player};

use super::heuristic::{Heuristic, WindowHeuristic};
use super::strategy::Strategy;
use super::tree::SearchTree;

const CENTER_COLUMN: usize = 3;

/// Full bounded-depth minimax player with tree caching.
///
/// Owns a [`SearchTree`] rooted at the position it last acted from. Each
/// turn the tree is regrafted into the opponent's actual move, the best
/// root child is chosen, and the tree is regrafted again into that choice,
/// so when control returns to the caller the tree is rooted at the state
/// after this player's own move. Only the played branch is ever kept, so
/// tree size stays bounded across the game instead of accumulating.
///
/// Ties between equally scored columns break uniformly at random, which
/// keeps the engine from becoming predictable against a fixed opponent.
pub struct GreedyPlayer {
    player: Player,
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    tree: Option<SearchTree>,
    rng: StdRng,
}

impl GreedyPlayer {
    /// Create a player searching `depth` plies ahead. Depths beyond ~6 get
    /// expensive: the search is full-width over up to 7 columns per ply.
    pub fn new(player: Player, depth: usize) -> Self {
        assert!(depth >= 1, "search depth must be at least 1");
        GreedyPlayer {
            player,
            depth,
            heuristic: Box::new(WindowHeuristic),
            tree: None,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_heuristic(player: Player, depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        GreedyPlayer {
            player,
            depth,
            heuristic,
            tree: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Re-root the tree at the position after `column` was played, building
    /// a fresh tree when none exists yet.
    fn descend(&mut self, column: usize, state_after: &GameState) {
        match self.tree.take() {
            Some(mut tree) => {
                tree.regraft(column, state_after, self.heuristic.as_ref());
                self.tree = Some(tree);
            }
            None => {
                self.tree = Some(SearchTree::generate(
                    state_after,
                    self.depth,
                    self.player,
                    self.heuristic.as_ref(),
                ));
            }
        }
    }

    /// Best root child by score; `minimize` flips the comparison for
    /// opponent hints. Ties break uniformly at random.
    fn pick_child(&mut self, minimize: bool) -> Option<usize> {
        let tree = self.tree.as_ref()?;
        let children: Vec<(usize, i32)> = tree.root_children().collect();
        let target = if minimize {
            children.iter().map(|&(_, score)| score).min()?
        } else {
            children.iter().map(|&(_, score)| score).max()?
        };
        let candidates: Vec<usize> = children
            .iter()
            .filter(|&&(_, score)| score == target)
            .map(|&(column, _)| column)
            .collect();
        Some(candidates[self.rng.random_range(0..candidates.len())])
    }

    /// Defensive degradation when the tree cannot answer: play like
    /// [`super::RandomPlayer`] rather than failing.
    fn random_column(&mut self, state: &GameState) -> usize {
        let columns = state.open_columns();
        assert!(!columns.is_empty(), "no open columns to choose from");
        columns[self.rng.random_range(0..columns.len())]
    }
}

impl Strategy for GreedyPlayer {
    fn choose_column(&mut self, state: &GameState) -> usize {
        debug_assert_eq!(state.current_player(), self.player);

        // Opening move: the center column is the strongest first move, no
        // search needed. The regraft below rebuilds the tree around it.
        if state.total_moves() == 0 {
            let after = state
                .apply(CENTER_COLUMN)
                .expect("center column is open on an empty board");
            self.descend(CENTER_COLUMN, &after);
            return CENTER_COLUMN;
        }

        // Bring the tree up to date with the opponent's actual last move
        match (self.tree.take(), state.last_move()) {
            (Some(mut tree), Some((_, column, _))) => {
                tree.regraft(column, state, self.heuristic.as_ref());
                self.tree = Some(tree);
            }
            _ => {
                self.tree = Some(SearchTree::generate(
                    state,
                    self.depth,
                    self.player,
                    self.heuristic.as_ref(),
                ));
            }
        }

        let Some(column) = self.pick_child(false) else {
            return self.random_column(state);
        };

        // Re-root at the position after our own move so the next call only
        // has to follow the opponent's reply
        match state.apply(column) {
            Ok(after) => {
                self.descend(column, &after);
                column
            }
            Err(_) => self.random_column(state),
        }
    }

    fn hint_opponent(&mut self, state: &GameState) -> usize {
        debug_assert_eq!(state.current_player(), self.player.other());

        if self.tree.is_none() {
            self.tree = Some(SearchTree::generate(
                state,
                self.depth,
                self.player,
                self.heuristic.as_ref(),
            ));
        }

        // The root's children are the opponent's options; the minimum
        // score from our perspective is their best continuation. No
        // re-rooting: the hint commits nothing.
        match self.pick_child(true) {
            Some(column) if state.open_columns().contains(&column) => column,
            _ => self.random_column(state),
        }
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::super::random::RandomPlayer;
    use super::*;
    use crate::game::GameOutcome;

    #[test]
    fn opens_at_center() {
        let mut agent = GreedyPlayer::new(Player::One, 4);
        let state = GameState::initial();
        assert_eq!(agent.choose_column(&state), 3);
        // Tree is rooted at the position after the opening move
        let tree = agent.tree.as_ref().unwrap();
        assert_eq!(tree.root_children().count(), 7);
    }

    #[test]
    fn takes_winning_move() {
        // One col0/col1/col2 on the bottom, Two stacked on top of each;
        // column 3 completes the horizontal four.
        let mut state = GameState::initial();
        for col in 0..3 {
            state = state.apply(col).unwrap(); // One
            state = state.apply(col).unwrap(); // Two
        }
        let mut agent = GreedyPlayer::new(Player::One, 4);
        assert_eq!(agent.choose_column(&state), 3);
    }

    #[test]
    fn blocks_opponent_win() {
        let mut state = GameState::initial();
        state = state.apply(6).unwrap(); // One
        state = state.apply(0).unwrap(); // Two
        state = state.apply(6).unwrap(); // One
        state = state.apply(1).unwrap(); // Two
        state = state.apply(5).unwrap(); // One
        state = state.apply(2).unwrap(); // Two
        // Two holds 0-2 on the bottom row; One must block at 3
        let mut agent = GreedyPlayer::new(Player::One, 4);
        assert_eq!(agent.choose_column(&state), 3);
    }

    #[test]
    fn hint_reports_opponent_winning_column() {
        // Two threatens 2-3-4 with only column 5 completing it
        let mut state = GameState::initial();
        state = state.apply(0).unwrap(); // One
        state = state.apply(2).unwrap(); // Two
        state = state.apply(0).unwrap(); // One
        state = state.apply(3).unwrap(); // Two
        state = state.apply(1).unwrap(); // One
        state = state.apply(4).unwrap(); // Two
        state = state.apply(6).unwrap(); // One
        assert_eq!(state.current_player(), Player::Two);

        let mut agent = GreedyPlayer::new(Player::One, 2);
        assert_eq!(agent.hint_opponent(&state), 5);
    }

    #[test]
    fn tree_follows_the_game_across_turns() {
        let mut agent = GreedyPlayer::new(Player::One, 3);
        let mut state = GameState::initial();

        let first = agent.choose_column(&state);
        state = state.apply(first).unwrap();
        state = state.apply(*state.open_columns().first().unwrap()).unwrap();

        let second = agent.choose_column(&state);
        assert!(state.open_columns().contains(&second));
        state = state.apply(second).unwrap();

        // After our move the tree is rooted at the current position, so
        // its children must match the opponent's current options.
        let tree = agent.tree.as_ref().unwrap();
        let mut tree_columns: Vec<usize> = tree.root_children().map(|(c, _)| c).collect();
        tree_columns.sort_unstable();
        assert_eq!(tree_columns, state.open_columns());
    }

    #[test]
    fn builds_tree_from_scratch_as_second_player() {
        let mut agent = GreedyPlayer::new(Player::Two, 2);
        let state = GameState::initial().apply(3).unwrap();
        let column = agent.choose_column(&state);
        assert!(state.open_columns().contains(&column));
        assert!(agent.tree.is_some());
    }

    #[test]
    fn falls_back_to_random_on_childless_tree() {
        let state = GameState::initial().apply(3).unwrap();
        let mut agent = GreedyPlayer::new(Player::Two, 1);
        // Plant a childless tree: regrafting keeps it childless (depth 0),
        // so the decision must degrade to a uniform-random legal column.
        agent.tree = Some(SearchTree::generate(
            &GameState::initial(),
            0,
            Player::Two,
            &WindowHeuristic,
        ));

        let column = agent.choose_column(&state);
        assert!(state.open_columns().contains(&column));
    }

    #[test]
    fn full_game_vs_self_completes() {
        let mut one = GreedyPlayer::new(Player::One, 3);
        let mut two = GreedyPlayer::new(Player::Two, 3);
        let mut state = GameState::initial();

        while !state.is_terminal() {
            let column = match state.current_player() {
                Player::One => one.choose_column(&state),
                Player::Two => two.choose_column(&state),
            };
            state = state.apply(column).unwrap();
        }

        assert!(state.winner().is_some());
    }

    #[test]
    fn beats_random_player() {
        let games_per_color = 10;
        let mut greedy_wins = 0;
        let total = games_per_color * 2;

        for greedy_side in [Player::One, Player::Two] {
            for _ in 0..games_per_color {
                let mut greedy = GreedyPlayer::new(greedy_side, 3);
                let mut random = RandomPlayer::new(greedy_side.other());
                let mut state = GameState::initial();

                while !state.is_terminal() {
                    let column = if state.current_player() == greedy_side {
                        greedy.choose_column(&state)
                    } else {
                        random.choose_column(&state)
                    };
                    state = state.apply(column).unwrap();
                }

                if state.winner() == Some(GameOutcome::Winner(greedy_side)) {
                    greedy_wins += 1;
                }
            }
        }

        assert!(
            greedy_wins * 100 > total * 80,
            "greedy should beat random >80% of the time, got {greedy_wins}/{total}"
        );
    }

    #[test]
    fn name_and_player() {
        let agent = GreedyPlayer::new(Player::One, 2);
        assert_eq!(agent.name(), "Greedy");
        assert_eq!(agent.player(), Player::One);
    }
}
