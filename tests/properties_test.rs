//! Property tests for the board, rotation and scoring rules.

use proptest::prelude::*;

use token_tetris::core::scoring::{score_clear, LevelProgress};
use token_tetris::core::{line_clear_points, tokens_for_clear, Board, GameState, Shape};
use token_tetris::types::{
    GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, LINES_PER_LEVEL, LINE_SCORES,
};

fn any_kind() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(|i| PieceKind::ALL[i])
}

/// Player input or a frame tick of the given length.
#[derive(Debug, Clone, Copy)]
enum Step {
    Action(GameAction),
    Tick(u32),
}

fn any_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Action(GameAction::MoveLeft)),
        Just(Step::Action(GameAction::MoveRight)),
        Just(Step::Action(GameAction::SoftDrop)),
        Just(Step::Action(GameAction::Rotate)),
        Just(Step::Action(GameAction::HardDrop)),
        (1u32..2000).prop_map(Step::Tick),
    ]
}

proptest! {
    #[test]
    fn active_piece_always_fits(seed in any::<u32>(), steps in prop::collection::vec(any_step(), 0..300)) {
        let mut game = GameState::new(seed);
        game.start();

        let mut score = 0;
        let mut tokens = 0;
        let mut lines = 0;
        for step in steps {
            match step {
                Step::Action(action) => {
                    game.apply_action(action);
                }
                Step::Tick(ms) => {
                    game.tick(ms);
                }
            }

            if game.game_over() {
                break;
            }
            let active = game.active().unwrap();
            prop_assert!(active.fits(game.board()));
            for (dx, dy) in active.minos() {
                let (x, y) = (active.x + dx, active.y + dy);
                prop_assert!((0..BOARD_WIDTH as i8).contains(&x));
                prop_assert!(y < BOARD_HEIGHT as i8);
            }

            // Counters never go backwards within a session.
            prop_assert!(game.score() >= score);
            prop_assert!(game.tokens() >= tokens);
            prop_assert!(game.lines() >= lines);
            score = game.score();
            tokens = game.tokens();
            lines = game.lines();
        }
    }

    #[test]
    fn four_rotations_are_identity(kind in any_kind()) {
        let shape = Shape::spawn(kind);
        let turned = shape.rotated().rotated().rotated().rotated();
        prop_assert_eq!(turned, shape);
        prop_assert_eq!(shape.rotated().minos().len(), 4);
    }

    #[test]
    fn line_clear_keeps_remaining_row_order(
        rows in prop::collection::vec((any::<bool>(), any::<u16>()), BOARD_HEIGHT as usize)
    ) {
        let mut board = Board::new();
        let mut expected_rows: Vec<Vec<bool>> = Vec::new();
        let mut full_count = 0;

        for (y, (full, bits)) in rows.iter().enumerate() {
            let cells: Vec<bool> = (0..BOARD_WIDTH)
                .map(|x| *full || (bits >> x) & 1 == 1)
                .collect();
            for (x, &filled) in cells.iter().enumerate() {
                if filled {
                    board.set(x as i8, y as i8, Some(PieceKind::ALL[y % 7]));
                }
            }
            if cells.iter().all(|&c| c) {
                full_count += 1;
            } else {
                expected_rows.push(cells);
            }
        }

        let cleared = board.clear_full_rows();
        prop_assert_eq!(cleared.len(), full_count);
        // Reported bottom to top.
        prop_assert!(cleared.windows(2).all(|w| w[0] > w[1]));

        let offset = BOARD_HEIGHT as usize - expected_rows.len();
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                let want = y >= offset && expected_rows[y - offset][x];
                prop_assert_eq!(board.is_occupied(x as i8, y as i8), want, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn clear_rewards_follow_the_table(lines in 0u32..8, level in 1u32..200) {
        let expected = LINE_SCORES[(lines as usize).min(4)] * level;
        prop_assert_eq!(line_clear_points(lines, level), expected);
        prop_assert_eq!(tokens_for_clear(lines), lines.saturating_sub(1));
    }

    #[test]
    fn leveling_matches_a_running_counter(clears in prop::collection::vec(0u32..5, 0..200)) {
        let mut progress = LevelProgress::new();
        let mut level = 1;
        let mut counter = 0;

        for n in clears {
            let result = score_clear(n, &mut progress);
            prop_assert_eq!(result.points, line_clear_points(n, level));

            counter += n;
            if counter >= LINES_PER_LEVEL {
                level += 1;
                counter = 0;
                prop_assert_eq!(result.level_up, Some(level));
            } else {
                prop_assert_eq!(result.level_up, None);
            }
            prop_assert_eq!(progress.level(), level);
            prop_assert_eq!(progress.lines_since_level_up(), counter);
        }
    }
}
