//! Depth-limited minimax with alpha-beta pruning over board copies.

use crate::error::SearchError;
use crate::game::{Board, Cell, GameState};

use super::agent::Agent;
use super::heuristic::score_position;

/// Value of a decided game. Large enough to dominate any heuristic score,
/// so forced wins and losses outrank positional preference at any depth.
pub const WIN_VALUE: i64 = 100_000_000_000_000;

/// Explore the move tree below `board` to the given depth and return the
/// best column together with its minimax value, from the perspective of
/// `piece`. Maximizing nodes simulate `piece`'s drops, minimizing nodes the
/// opponent's; `alpha`/`beta` are threaded through unchanged and a node
/// stops iterating once `alpha >= beta`.
///
/// Terminal boards score `±WIN_VALUE` (win/loss for `piece`) or 0 (draw)
/// regardless of remaining depth; a depth-exhausted leaf scores by
/// [`score_position`]. Leaves carry no column.
pub fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
    piece: Cell,
) -> (Option<usize>, i64) {
    if board.is_terminal() {
        return if board.winning_move(piece) {
            (None, WIN_VALUE)
        } else if board.winning_move(piece.opponent()) {
            (None, -WIN_VALUE)
        } else {
            (None, 0)
        };
    }

    if depth == 0 {
        return (None, i64::from(score_position(board, piece)));
    }

    let valid = board.valid_locations();

    if maximizing {
        let mut value = i64::MIN;
        let mut column = valid[0];
        for &col in &valid {
            let mut child = *board;
            child.drop_piece(col, piece).unwrap();
            let (_, score) = minimax(&child, depth - 1, alpha, beta, false, piece);
            if score > value {
                value = score;
                column = col;
            }
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        (Some(column), value)
    } else {
        let opponent = piece.opponent();
        let mut value = i64::MAX;
        let mut column = valid[0];
        for &col in &valid {
            let mut child = *board;
            child.drop_piece(col, opponent).unwrap();
            let (_, score) = minimax(&child, depth - 1, alpha, beta, true, piece);
            if score < value {
                value = score;
                column = col;
            }
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        (Some(column), value)
    }
}

/// Computer player that picks its column with [`minimax`].
pub struct MinimaxAgent {
    depth: u32,
}

impl MinimaxAgent {
    /// Create an agent searching to `depth` plies (at least 1).
    pub fn new(depth: u32) -> Self {
        MinimaxAgent {
            depth: depth.max(1),
        }
    }

    /// Choose a column for the side to move, or fail if the game is over.
    pub fn best_move(&self, state: &GameState) -> Result<usize, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::GameOver);
        }

        let piece = state.current_player().to_cell();
        let (column, _value) = minimax(
            state.board(),
            self.depth,
            i64::MIN,
            i64::MAX,
            true,
            piece,
        );
        column.ok_or(SearchError::GameOver)
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        self.best_move(state)
            .expect("select_action requires a game in progress")
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::{GameOutcome, Player, COLS, ROWS};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const R: Cell = Cell::Red;
    const Y: Cell = Cell::Yellow;

    fn board_with_red_row() -> Board {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, R).unwrap();
        }
        board
    }

    fn drawn_board() -> Board {
        // Rows 0, 1, 4, 5 alternate starting Red; rows 2 and 3 start
        // Yellow. Full board, no four in a row anywhere.
        let mut board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                let flip = row == 2 || row == 3;
                let red = (col % 2 == 0) != flip;
                board
                    .drop_piece(col, if red { R } else { Y })
                    .unwrap();
            }
        }
        board
    }

    #[test]
    fn won_board_scores_exactly_win_value_at_any_depth() {
        let board = board_with_red_row();
        for depth in [0, 1, 4] {
            let (col, value) = minimax(&board, depth, i64::MIN, i64::MAX, true, R);
            assert_eq!(col, None);
            assert_eq!(value, WIN_VALUE);

            let (_, value) = minimax(&board, depth, i64::MIN, i64::MAX, true, Y);
            assert_eq!(value, -WIN_VALUE);
        }
    }

    #[test]
    fn drawn_board_scores_zero() {
        let board = drawn_board();
        assert!(board.is_draw());
        let (col, value) = minimax(&board, 4, i64::MIN, i64::MAX, true, R);
        assert_eq!(col, None);
        assert_eq!(value, 0);
    }

    #[test]
    fn depth_zero_falls_back_to_heuristic() {
        let mut board = Board::new();
        board.drop_piece(3, R).unwrap();
        board.drop_piece(2, Y).unwrap();

        let (col, value) = minimax(&board, 0, i64::MIN, i64::MAX, true, R);
        assert_eq!(col, None);
        assert_eq!(value, i64::from(score_position(&board, R)));
    }

    #[test]
    fn selects_legal_action() {
        let mut agent = MinimaxAgent::new(4);
        let state = GameState::initial();
        let action = agent.select_action(&state);
        assert!(state.legal_actions().contains(&action));
    }

    #[test]
    fn takes_winning_move() {
        // Red has cols 0..2 on the bottom row; col 3 completes the four
        let mut state = GameState::initial();
        for col in 0..3 {
            state = state.apply_move(col).unwrap(); // Red
            state = state.apply_move(col).unwrap(); // Yellow
        }
        let mut agent = MinimaxAgent::new(4);
        assert_eq!(agent.select_action(&state), 3);
    }

    #[test]
    fn blocks_opponent_win() {
        // Yellow holds cols 0..2 on the bottom row; Red must answer in 3
        let mut state = GameState::initial();
        state = state.apply_move(6).unwrap(); // Red
        state = state.apply_move(0).unwrap(); // Yellow
        state = state.apply_move(6).unwrap(); // Red
        state = state.apply_move(1).unwrap(); // Yellow
        state = state.apply_move(5).unwrap(); // Red
        state = state.apply_move(2).unwrap(); // Yellow
        let mut agent = MinimaxAgent::new(4);
        assert_eq!(agent.select_action(&state), 3);
    }

    #[test]
    fn prefers_win_over_block() {
        // Both sides threaten col 3; Red should take its own win
        let mut state = GameState::initial();
        for col in 0..3 {
            state = state.apply_move(col).unwrap(); // Red, bottom row
            state = state.apply_move(col).unwrap(); // Yellow, row above
        }
        let mut agent = MinimaxAgent::new(4);
        assert_eq!(agent.select_action(&state), 3);
    }

    #[test]
    fn best_move_rejects_finished_game() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow
            }
        }
        assert!(state.is_terminal());
        let agent = MinimaxAgent::new(4);
        assert_eq!(agent.best_move(&state), Err(SearchError::GameOver));
    }

    /// Exhaustive minimax without pruning, for value-equivalence checks.
    fn minimax_unpruned(board: &Board, depth: u32, maximizing: bool, piece: Cell) -> i64 {
        if board.is_terminal() {
            return if board.winning_move(piece) {
                WIN_VALUE
            } else if board.winning_move(piece.opponent()) {
                -WIN_VALUE
            } else {
                0
            };
        }
        if depth == 0 {
            return i64::from(score_position(board, piece));
        }

        let mover = if maximizing { piece } else { piece.opponent() };
        let mut best = if maximizing { i64::MIN } else { i64::MAX };
        for col in board.valid_locations() {
            let mut child = *board;
            child.drop_piece(col, mover).unwrap();
            let score = minimax_unpruned(&child, depth - 1, !maximizing, piece);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    #[test]
    fn pruning_preserves_minimax_value() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut checked = 0;
        while checked < 20 {
            // Random mid-game position
            let mut state = GameState::initial();
            let moves = rng.random_range(4..=10);
            for _ in 0..moves {
                if state.is_terminal() {
                    break;
                }
                let legal = state.legal_actions();
                let col = legal[rng.random_range(0..legal.len())];
                state = state.apply_move(col).unwrap();
            }
            if state.is_terminal() {
                continue;
            }

            let piece = state.current_player().to_cell();
            let (_, pruned) = minimax(state.board(), 3, i64::MIN, i64::MAX, true, piece);
            let exhaustive = minimax_unpruned(state.board(), 3, true, piece);
            assert_eq!(pruned, exhaustive);
            checked += 1;
        }
    }

    #[test]
    fn full_game_vs_self_completes() {
        let mut red = MinimaxAgent::new(3);
        let mut yellow = MinimaxAgent::new(3);
        let mut state = GameState::initial();
        let mut turn = 0;

        while !state.is_terminal() && turn < ROWS * COLS {
            let action = if turn % 2 == 0 {
                red.select_action(&state)
            } else {
                yellow.select_action(&state)
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.is_terminal());
        assert!(state.outcome().is_some());
    }

    #[test]
    fn beats_random_agent() {
        let games_per_color = 10;
        let mut minimax_wins = 0;
        let total = games_per_color * 2;

        for minimax_plays in [Player::Red, Player::Yellow] {
            for _ in 0..games_per_color {
                let mut searcher = MinimaxAgent::new(3);
                let mut random = RandomAgent::new();
                let mut state = GameState::initial();

                while !state.is_terminal() {
                    let action = if state.current_player() == minimax_plays {
                        searcher.select_action(&state)
                    } else {
                        random.select_action(&state)
                    };
                    state = state.apply_move(action).unwrap();
                }

                if state.outcome() == Some(GameOutcome::Winner(minimax_plays)) {
                    minimax_wins += 1;
                }
            }
        }

        let win_rate = minimax_wins as f64 / total as f64;
        assert!(
            win_rate > 0.80,
            "minimax should beat random >80% of the time, got {:.0}% ({minimax_wins}/{total})",
            win_rate * 100.0
        );
    }

    #[test]
    fn name_is_minimax() {
        let agent = MinimaxAgent::new(4);
        assert_eq!(agent.name(), "Minimax");
    }
}
