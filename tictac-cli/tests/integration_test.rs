//! Integration tests for the TICTAC engine
//!
//! Tests the full stack: state model, transitions, search and the
//! exhaustive analysis, checked against every reachable position.

use tictac_core::{
    ai::{best_move, search, MinimaxAI},
    analysis::{census, reachable_boards, verify_pruning},
    board::Move,
    game::{Board, InvalidMoveError, Outcome, Player},
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// STATE MODEL PROPERTIES
// ============================================================================

#[test]
fn test_each_move_removes_one_legal_move() {
    for board in reachable_boards() {
        let before = board.legal_moves().len();
        for mv in board.legal_moves() {
            let child = board.apply_move(mv).unwrap();
            assert_eq!(child.legal_moves().len(), before - 1, "{board} + {mv}");
        }
    }
}

#[test]
fn test_turns_alternate_strictly() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..200 {
        let mut board = Board::initial();
        let mut expected = Player::X;
        while !board.is_terminal() {
            assert_eq!(board.current_player(), expected);
            let mv = *board.legal_moves().choose(&mut rng).unwrap();
            board = board.apply_move(mv).unwrap();
            expected = expected.opponent();
        }
    }
}

#[test]
fn test_terminal_iff_no_moves_or_winner() {
    for board in reachable_boards() {
        let expected = board.legal_moves().is_empty() || board.winner().is_some();
        assert_eq!(board.is_terminal(), expected, "{board}");
    }
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let board = Board::initial()
        .apply_move(Move::new(1, 1))
        .unwrap()
        .apply_move(Move::new(0, 0))
        .unwrap();
    let saved = board;

    for taken in [Move::new(1, 1), Move::new(0, 0)] {
        let err = board.apply_move(taken).unwrap_err();
        assert_eq!(
            err,
            InvalidMoveError::Occupied {
                row: taken.row,
                col: taken.col
            }
        );
    }
    assert_eq!(board, saved);
}

#[test]
fn test_parent_board_reusable_after_move() {
    let parent = Board::initial();
    let a = parent.apply_move(Move::new(0, 0)).unwrap();
    let b = parent.apply_move(Move::new(2, 2)).unwrap();

    assert_ne!(a, b);
    assert_eq!(parent, Board::initial());
    assert_eq!(a.legal_moves().len(), 8);
    assert_eq!(b.legal_moves().len(), 8);
}

// ============================================================================
// SEARCH PROPERTIES
// ============================================================================

#[test]
fn test_required_win_position() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let mv = best_move(&board).unwrap();

    assert_eq!(mv, Move::new(0, 2));
    assert_eq!(board.apply_move(mv).unwrap().utility(), 1);
}

#[test]
fn test_optimal_play_from_empty_board_draws() {
    let ai = MinimaxAI::new();
    let (end, history) = ai.play_game(Board::initial());

    assert_eq!(history[0], best_move(&Board::initial()).unwrap());
    assert_eq!(end.outcome(), Outcome::Draw);
    assert_eq!(end.utility(), 0);
}

#[test]
fn test_best_move_none_only_on_terminal_boards() {
    for board in reachable_boards() {
        assert_eq!(best_move(&board).is_none(), board.is_terminal(), "{board}");
    }
}

#[test]
fn test_single_empty_cell_boards() {
    let boards: Vec<Board> = reachable_boards()
        .into_iter()
        .filter(|b| b.empty_count() == 1 && !b.is_terminal())
        .collect();
    assert!(!boards.is_empty());

    for board in boards {
        let only = board.legal_moves()[0];
        assert_eq!(best_move(&board), Some(only));

        let end = board.apply_move(only).unwrap();
        let expected = match end.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        };
        assert_eq!(end.utility(), expected);
    }
}

#[test]
fn test_alpha_beta_matches_minimax_everywhere() {
    let report = verify_pruning();

    assert_eq!(report.boards, 5478 - 958);
    assert!(report.is_consistent(), "mismatches: {:?}", report.mismatches);
    assert!(report.pruned_nodes < report.full_nodes);
}

#[test]
fn test_best_move_never_worsens_value() {
    // Playing the returned move keeps the game-theoretic value
    for board in reachable_boards().into_iter().filter(|b| !b.is_terminal()) {
        let root = search(&board);
        let mv = root.best_move.unwrap();
        let child = board.apply_move(mv).unwrap();
        assert_eq!(search(&child).value, root.value, "{board} -> {mv}");
    }
}

#[test]
fn test_engine_never_loses_to_random_play() {
    let ai = MinimaxAI::new();
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for game in 0..40 {
        let engine = if game % 2 == 0 { Player::X } else { Player::O };
        let mut board = Board::initial();

        while !board.is_terminal() {
            let mv = if board.current_player() == engine {
                ai.best_move(&board).unwrap()
            } else {
                *board.legal_moves().choose(&mut rng).unwrap()
            };
            board = board.apply_move(mv).unwrap();
        }

        let lost = match engine {
            Player::X => board.outcome() == Outcome::OWins,
            Player::O => board.outcome() == Outcome::XWins,
        };
        assert!(!lost, "engine lost as {engine}: {board}");
    }
}

// ============================================================================
// ANALYSIS
// ============================================================================

#[test]
fn test_census_totals() {
    let c = census();
    assert_eq!(c.total, 5478);
    assert_eq!(c.terminal, c.x_wins + c.o_wins + c.draws);
    assert_eq!(c.draws, 16);
}
