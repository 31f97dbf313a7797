use std::fmt;

use super::board::COLS;
use super::{Board, Player};
use crate::error::MoveError;

/// Final result of a decided game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A single position in a game, one per ply.
///
/// States are immutable from the caller's point of view: [`GameState::apply`]
/// returns a fresh state and never touches the receiver, so hypothetical
/// exploration during search can branch freely. Whose turn it is derives
/// from the per-player move counts (Player One moves when they are equal),
/// and the winner, once set, is never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    move_counts: [u32; 2],
    last_move: Option<(Player, usize, usize)>,
    open_columns: Vec<usize>,
    winner: Option<GameOutcome>,
}

impl GameState {
    /// Create the initial (empty-board) game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            move_counts: [0, 0],
            last_move: None,
            open_columns: (0..COLS).collect(),
            winner: None,
        }
    }

    /// The player whose turn it is, derived from the move counts
    pub fn current_player(&self) -> Player {
        if self.move_counts[0] == self.move_counts[1] {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Total number of moves played so far
    pub fn total_moves(&self) -> u32 {
        self.move_counts[0] + self.move_counts[1]
    }

    /// The last move played, as (player, column, row)
    pub fn last_move(&self) -> Option<(Player, usize, usize)> {
        self.last_move
    }

    /// Columns that still have room, in ascending order. Empty once the
    /// board is full.
    pub fn open_columns(&self) -> &[usize] {
        &self.open_columns
    }

    /// Game outcome if the game is over, `None` while undecided
    pub fn winner(&self) -> Option<GameOutcome> {
        self.winner
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Apply a move and return the new state, leaving `self` untouched.
    ///
    /// Fails with [`MoveError::GameOver`] on a decided board and with
    /// [`MoveError::ColumnFull`] / [`MoveError::InvalidColumn`] for
    /// unplayable columns.
    pub fn apply(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player();
        let mut next = self.clone();
        let row = next.board.drop_piece(column, mover.to_cell())?;

        next.move_counts[mover.index()] += 1;
        next.last_move = Some((mover, column, row));
        next.open_columns = (0..COLS)
            .filter(|&col| !next.board.is_column_full(col))
            .collect();

        // The local check at the new piece is all the win detection needed
        if next.board.check_win(row, column) {
            next.winner = Some(GameOutcome::Winner(mover));
        } else if next.open_columns.is_empty() {
            next.winner = Some(GameOutcome::Draw);
        }

        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.winner {
            Some(GameOutcome::Winner(player)) => write!(f, "{} wins", player.name()),
            Some(GameOutcome::Draw) => write!(f, "Draw"),
            None => write!(f, "{} to move", self.current_player().name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    /// Repeating this column order fills the board row by row with a
    /// pattern that contains no four-in-a-row in any orientation.
    const DRAW_PASS: [usize; 7] = [0, 2, 1, 3, 4, 6, 5];

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_terminal());
        assert_eq!(state.open_columns(), &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(state.last_move(), None);
        assert_eq!(state.total_moves(), 0);
    }

    #[test]
    fn test_apply() {
        let state = GameState::initial();
        let next = state.apply(3).unwrap();

        assert_eq!(next.current_player(), Player::Two);
        assert_eq!(next.board().get(0, 3), Cell::One);
        assert_eq!(next.last_move(), Some((Player::One, 3, 0)));
        // Receiver is untouched
        assert_eq!(state.board().get(0, 3), Cell::Empty);
        assert_eq!(state.total_moves(), 0);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::initial();
        for ply in 0..6 {
            let expected = if ply % 2 == 0 { Player::One } else { Player::Two };
            assert_eq!(state.current_player(), expected);
            state = state.apply(ply % 7).unwrap();
        }
    }

    #[test]
    fn test_full_column_rejected_and_never_open() {
        let mut state = GameState::initial();
        for _ in 0..3 {
            state = state.apply(2).unwrap(); // One
            state = state.apply(2).unwrap(); // Two
        }
        assert!(!state.open_columns().contains(&2));
        let before = state.clone();
        assert_eq!(state.apply(2), Err(MoveError::ColumnFull(2)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_range_column_rejected() {
        let state = GameState::initial();
        assert_eq!(state.apply(7), Err(MoveError::InvalidColumn(7)));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();
        // One builds the bottom row, Two stacks on top
        for col in 0..3 {
            state = state.apply(col).unwrap(); // One
            state = state.apply(col).unwrap(); // Two
        }
        state = state.apply(3).unwrap(); // One completes 0-3

        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(GameOutcome::Winner(Player::One)));
    }

    #[test]
    fn test_winner_is_immutable_once_set() {
        let mut state = GameState::initial();
        for col in 0..3 {
            state = state.apply(col).unwrap();
            state = state.apply(col).unwrap();
        }
        state = state.apply(3).unwrap();

        let decided = state.winner();
        assert_eq!(state.apply(4), Err(MoveError::GameOver));
        assert_eq!(state.winner(), decided);
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            for &col in &DRAW_PASS {
                state = state.apply(col).unwrap();
            }
        }

        assert_eq!(state.winner(), Some(GameOutcome::Draw));
        assert!(state.open_columns().is_empty());
        assert_eq!(state.total_moves(), 42);
    }

    #[test]
    fn test_display_shows_turn() {
        let state = GameState::initial();
        assert!(state.to_string().ends_with("Player One to move"));
    }
}
