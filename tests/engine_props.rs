//! Property tests for the engine rules

use std::collections::HashSet;

use proptest::prelude::*;

use tytris::core::{
    interval_for, kick_offsets, rotation_count, shape_of, try_rotate, Board, GameConfig,
    GameState, Piece, PieceQueue,
};
use tytris::types::{Command, GamePhase, PieceKind, Spin};

fn kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn command() -> impl Strategy<Value = Command> {
    prop::sample::select(vec![
        Command::MoveLeft,
        Command::MoveRight,
        Command::RotateCw,
        Command::RotateCcw,
        Command::SoftDropStart,
        Command::SoftDropStop,
        Command::HardDrop,
        Command::Hold,
        Command::PauseToggle,
        Command::NewGame,
    ])
}

proptest! {
    #[test]
    fn prop_full_turn_restores_shape(kind in kind(), rotation in 0u8..4) {
        let shape = shape_of(kind, rotation);
        let count = rotation_count(kind);
        prop_assert_eq!(shape_of(kind, rotation + count), shape);

        let piece = Piece { rotation: rotation % count, ..Piece::spawn(kind) };
        prop_assert_eq!(piece.rotated(Spin::Cw).rotated(Spin::Ccw), piece);
        prop_assert_eq!(piece.shape().cells().count(), 4);
    }

    #[test]
    fn prop_o_never_changes_shape(rotation in any::<u8>()) {
        prop_assert_eq!(shape_of(PieceKind::O, rotation), shape_of(PieceKind::O, 0));
    }

    #[test]
    fn prop_kick_result_is_a_listed_offset(
        kind in kind(),
        x in -2i8..10,
        y in 0i8..22,
        accept in prop::collection::vec(any::<bool>(), 5),
    ) {
        let piece = Piece { x, y, ..Piece::spawn(kind) };
        let original = piece;
        let rotated = piece.rotated(Spin::Cw);
        let mut candidates = vec![0i8];
        candidates.extend_from_slice(kick_offsets(kind));

        // Accept candidates by their position in the try order.
        let result = try_rotate(&piece, Spin::Cw, |p| {
            let dx = p.x - rotated.x;
            let idx = candidates.iter().position(|&c| c == dx).unwrap_or(0);
            accept[idx]
        });

        prop_assert_eq!(piece, original);
        match result {
            Some((placed, dx)) => {
                let idx = candidates.iter().position(|&c| c == dx).unwrap();
                prop_assert!(accept[idx]);
                prop_assert!(accept[..idx].iter().all(|a| !a));
                prop_assert_eq!(placed, rotated.shifted(dx, 0));
            }
            None => prop_assert!(accept[..candidates.len()].iter().all(|a| !a)),
        }
    }

    #[test]
    fn prop_every_batch_of_seven_is_a_permutation(seed in any::<u64>()) {
        let mut queue = PieceQueue::new(seed);
        for _ in 0..5 {
            let batch: HashSet<PieceKind> = (0..7).map(|_| queue.next()).collect();
            prop_assert_eq!(batch.len(), 7);
        }
    }

    #[test]
    fn prop_gravity_is_monotonic_and_floored(
        elapsed in 0u64..1_000_000,
        step in 1u64..10_000,
        period in 1u32..1000,
    ) {
        let cfg = GameConfig { acceleration_period: period, ..GameConfig::default() };
        let now = interval_for(elapsed, &cfg);
        let later = interval_for(elapsed + step, &cfg);
        prop_assert!(later <= now);
        prop_assert!(now <= cfg.base_interval);
        prop_assert!(later >= cfg.minimum_interval);
    }

    #[test]
    fn prop_second_hold_is_a_no_op(seed in any::<u64>(), moves in 0usize..4) {
        let mut game = GameState::new(GameConfig::default(), seed).unwrap();
        game.apply(Command::NewGame);
        game.advance_tick();
        for _ in 0..moves {
            game.apply(Command::MoveLeft);
        }

        game.apply(Command::Hold);
        let after_first = game.snapshot();
        prop_assert!(!game.apply(Command::Hold));
        prop_assert_eq!(game.snapshot(), after_first);
    }

    #[test]
    fn prop_random_play_keeps_the_well_consistent(
        seed in any::<u64>(),
        script in prop::collection::vec((command(), 0usize..30), 1..200),
    ) {
        let mut game = GameState::new(GameConfig::default(), seed).unwrap();
        game.apply(Command::NewGame);

        let mut lines = 0;
        for (command, idle) in script {
            game.apply(command);
            for _ in 0..idle {
                game.advance_tick();
            }
            lines += game
                .take_events()
                .iter()
                .filter_map(|e| e.lines_cleared())
                .sum::<usize>();

            if let Some(active) = game.active() {
                prop_assert!(game.board().fits(&active));
                if let Some(ghost) = game.ghost() {
                    prop_assert!(ghost.y >= active.y);
                    prop_assert!(!game.board().fits(&ghost.shifted(0, 1)));
                }
            }
            if game.phase() == GamePhase::Playing {
                prop_assert!(game.interval() >= game.config().minimum_interval);
            }
        }

        // Restarts reset the counters, so only the running game can be checked.
        if game.games_started() == 1 {
            let info = game.info();
            prop_assert_eq!(info.lines_destroyed as usize, lines);
            prop_assert_eq!(info.score, info.lines_destroyed * game.config().points_per_line);
        }
    }
}

#[test]
fn test_board_fits_matches_spawn_for_all_kinds() {
    let board = Board::new(10, 25);
    for kind in PieceKind::ALL {
        for rotation in 0..rotation_count(kind) {
            let piece = Piece { rotation, ..Piece::spawn(kind) };
            assert!(board.fits(&piece), "{kind:?} r{rotation}");
        }
    }
}
