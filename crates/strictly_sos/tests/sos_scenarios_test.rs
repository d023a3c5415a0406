//! End-to-end match scenarios driven through the event interface.

use strictly_sos::{
    Cell, Coord, Effect, Event, GameError, GridSize, Letter, Outcome, Phase, PlayerCount, SosGame,
};
use strum::IntoEnumIterator;

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

fn started(size: GridSize, players: usize) -> SosGame {
    let mut game = SosGame::new();
    game.handle(Event::SelectGridSize(size)).expect("Setup accepts size");
    game.handle(Event::SelectPlayerCount(
        PlayerCount::try_from(players).expect("Valid count"),
    ))
    .expect("Setup accepts count");
    game.start().expect("Match starts");
    game
}

/// Current player writes `letter` at `at` and ends the turn.
fn play_turn(game: &mut SosGame, at: Coord, letter: Letter) -> Effect {
    game.place(at, letter).expect("Placement accepted");
    game.end_turn().expect("Turn ends")
}

fn score_of(game: &SosGame, seat: usize) -> u32 {
    *game.roster().expect("Match running").players()[seat].score()
}

/// Leaves S(0,0), O(0,1), S(0,2) on the grid with P1 to act in `Claiming`.
fn sos_on_top_row() -> SosGame {
    let mut game = started(GridSize::Seven, 2);
    play_turn(&mut game, c(0, 0), Letter::S);
    play_turn(&mut game, c(0, 1), Letter::O);
    game.place(c(0, 2), Letter::S).expect("Placement accepted");
    game
}

#[test]
fn test_start_gives_empty_grid_for_every_size() {
    for size in GridSize::iter() {
        let game = started(size, 2);
        let grid = game.grid().expect("Grid allocated");
        assert_eq!(game.phase(), Phase::Placement);
        assert_eq!(grid.side(), size.side());
        assert_eq!(grid.empty_count(), size.side() * size.side());
        assert_eq!(game.roster().map(|r| r.current_index()), Some(0));
    }
}

#[test]
fn test_second_placement_on_cell_is_noop() {
    let mut game = started(GridSize::Eight, 2);
    play_turn(&mut game, c(4, 4), Letter::S);

    // P2 tries the same cell: the selector never opens.
    assert_eq!(game.tap(c(4, 4)), Ok(Effect::SelectorMoved(None)));
    assert_eq!(game.choose(Letter::O), Ok(Effect::Ignored));
    assert_eq!(
        game.grid().and_then(|g| g.get(c(4, 4))),
        Some(Cell::Filled(Letter::S))
    );
    assert_eq!(game.phase(), Phase::Placement);
}

#[test]
fn test_scenario_a_slash_before_letters_exist() {
    let mut game = started(GridSize::Seven, 2);
    game.place(c(0, 0), Letter::S).unwrap();
    assert_eq!(game.phase(), Phase::Claiming);

    let effect = game.slash(&[c(0, 0), c(0, 1), c(0, 2)]).unwrap();
    assert_eq!(effect, Effect::NoScore { duplicate: None });
    assert!(game.drag_path().is_empty());
    assert_eq!(score_of(&game, 0), 0);

    assert_eq!(game.end_turn(), Ok(Effect::TurnEnded { next: 1 }));
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.current_player().map(|p| p.name().as_str()), Some("P2"));
}

#[test]
fn test_scenario_b_slash_scores() {
    let mut game = sos_on_top_row();

    let effect = game.slash(&[c(0, 0), c(0, 1), c(0, 2)]).unwrap();
    let Effect::Scored(line) = effect else {
        panic!("Expected a score, got {:?}", effect);
    };
    assert_eq!(line.id().to_string(), "0,0-0,2");
    assert_eq!(*line.start(), c(0, 0));
    assert_eq!(*line.end(), c(0, 2));
    assert_eq!(score_of(&game, 0), 1);
    assert_eq!(game.snapshot().scored_lines.len(), 1);
    assert_eq!(
        game.snapshot().scored_lines[0].color(),
        game.roster().unwrap().players()[0].color()
    );
}

#[test]
fn test_scenario_c_repeat_slash_rejected() {
    let mut game = sos_on_top_row();
    game.slash(&[c(0, 0), c(0, 1), c(0, 2)]).unwrap();

    let again = game.slash(&[c(0, 0), c(0, 1), c(0, 2)]).unwrap();
    assert!(matches!(again, Effect::NoScore { duplicate: Some(_) }));
    let reversed = game.slash(&[c(0, 2), c(0, 1), c(0, 0)]).unwrap();
    assert!(matches!(reversed, Effect::NoScore { duplicate: Some(_) }));

    assert_eq!(score_of(&game, 0), 1);
    assert_eq!(game.ledger().map(|l| l.len()), Some(1));
}

#[test]
fn test_scenario_d_full_grid_ends_on_failed_slash() {
    let mut game = started(GridSize::Seven, 2);
    let cells: Vec<Coord> = (0..7).flat_map(|r| (0..7).map(move |col| c(r, col))).collect();
    let (last, rest) = cells.split_last().unwrap();
    for &at in rest {
        assert!(matches!(
            play_turn(&mut game, at, Letter::O),
            Effect::TurnEnded { .. }
        ));
    }

    game.place(*last, Letter::O).unwrap();
    assert_eq!(game.phase(), Phase::Claiming);
    assert!(game.grid().unwrap().is_full());

    let effect = game.slash(&[c(6, 4), c(6, 5), c(6, 6)]).unwrap();
    assert_eq!(
        effect,
        Effect::MatchOver {
            outcome: Outcome::Draw,
            scored: None
        }
    );
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_scoring_slash_that_ends_match_keeps_line() {
    let mut game = started(GridSize::Seven, 2);
    play_turn(&mut game, c(0, 0), Letter::S);
    let fillers: Vec<Coord> = (0..7)
        .flat_map(|r| (0..7).map(move |col| c(r, col)))
        .filter(|&at| at != c(0, 0) && at != c(0, 2))
        .collect();
    for at in fillers {
        play_turn(&mut game, at, Letter::O);
    }

    // 48 turns played, so P1 writes the last letter.
    game.place(c(0, 2), Letter::S).unwrap();
    let effect = game.slash(&[c(0, 0), c(0, 1), c(0, 2)]).unwrap();
    let Effect::MatchOver { outcome, scored } = effect else {
        panic!("Expected match over, got {:?}", effect);
    };
    assert_eq!(outcome, Outcome::Winner(0));
    let line = scored.expect("Final slash scored");
    assert_eq!(line.id().to_string(), "0,0-0,2");
    assert_eq!(game.ledger().map(|l| l.len()), Some(1));
}

#[test]
fn test_full_grid_ends_on_turn_end() {
    let mut game = started(GridSize::Seven, 3);
    let cells: Vec<Coord> = (0..7).flat_map(|r| (0..7).map(move |col| c(r, col))).collect();
    let mut last = Effect::Ignored;
    for at in cells {
        last = play_turn(&mut game, at, Letter::S);
    }
    assert!(matches!(last, Effect::MatchOver { scored: None, .. }));
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn test_tie_for_top_score_is_draw() {
    let mut game = started(GridSize::Seven, 2);
    play_turn(&mut game, c(0, 0), Letter::S);
    play_turn(&mut game, c(0, 1), Letter::O);
    game.place(c(0, 2), Letter::S).unwrap();
    assert!(matches!(
        game.slash(&[c(0, 0), c(0, 1), c(0, 2)]).unwrap(),
        Effect::Scored(_)
    ));
    game.end_turn().unwrap();

    play_turn(&mut game, c(2, 0), Letter::S);
    play_turn(&mut game, c(2, 1), Letter::O);
    // P2 to move.
    game.place(c(2, 2), Letter::S).unwrap();
    assert!(matches!(
        game.slash(&[c(2, 2), c(2, 1), c(2, 0)]).unwrap(),
        Effect::Scored(_)
    ));
    game.end_turn().unwrap();
    assert_eq!((score_of(&game, 0), score_of(&game, 1)), (1, 1));

    let empty: Vec<Coord> = (0..7)
        .flat_map(|r| (0..7).map(move |col| c(r, col)))
        .filter(|&at| game.grid().unwrap().is_empty_at(at))
        .collect();
    let mut last = Effect::Ignored;
    for at in empty {
        last = play_turn(&mut game, at, Letter::O);
    }
    assert_eq!(
        last,
        Effect::MatchOver {
            outcome: Outcome::Draw,
            scored: None
        }
    );
    assert!(game.outcome().is_some_and(|o| o.is_draw()));
}

#[test]
fn test_end_turn_without_placement_refused() {
    let mut game = started(GridSize::Nine, 4);
    let before = game.clone();
    let err = game.end_turn().unwrap_err();
    assert_eq!(err, GameError::MustPlaceFirst);
    assert!(err.is_rule_violation());
    assert_eq!(err.to_string(), "Place a letter first!");
    assert_eq!(game, before);
}

#[test]
fn test_turn_order_wraps_around_table() {
    let mut game = started(GridSize::Seven, 3);
    let seats: Vec<Effect> = [c(0, 0), c(1, 1), c(2, 2)]
        .into_iter()
        .map(|at| play_turn(&mut game, at, Letter::O))
        .collect();
    assert_eq!(
        seats,
        [
            Effect::TurnEnded { next: 1 },
            Effect::TurnEnded { next: 2 },
            Effect::TurnEnded { next: 0 },
        ]
    );
}

#[test]
fn test_bonus_placement_enables_second_slash() {
    let mut game = started(GridSize::Seven, 2);
    play_turn(&mut game, c(0, 0), Letter::S);
    play_turn(&mut game, c(1, 0), Letter::O);
    play_turn(&mut game, c(1, 1), Letter::O);
    play_turn(&mut game, c(2, 2), Letter::S);

    // P1 completes the column, then uses the bonus to complete the diagonal.
    game.place(c(2, 0), Letter::S).unwrap();
    assert!(matches!(
        game.slash(&[c(0, 0), c(1, 0), c(2, 0)]).unwrap(),
        Effect::Scored(_)
    ));
    assert!(game.snapshot().bonus_available);
    assert!(matches!(
        game.place(c(0, 2), Letter::S).unwrap(),
        Effect::Placed { bonus: true, .. }
    ));
    assert!(matches!(
        game.slash(&[c(0, 2), c(1, 1), c(2, 0)]).unwrap(),
        Effect::Scored(_)
    ));
    assert_eq!(score_of(&game, 0), 2);
}

#[test]
fn test_two_slashes_grant_one_bonus() {
    let mut game = started(GridSize::Seven, 2);
    play_turn(&mut game, c(0, 0), Letter::S);
    play_turn(&mut game, c(0, 1), Letter::O);
    play_turn(&mut game, c(1, 2), Letter::O);
    play_turn(&mut game, c(2, 2), Letter::S);

    // P1 closes the row and the column through (0,2) before placing again.
    game.place(c(0, 2), Letter::S).unwrap();
    assert!(matches!(
        game.slash(&[c(0, 0), c(0, 1), c(0, 2)]).unwrap(),
        Effect::Scored(_)
    ));
    assert!(matches!(
        game.slash(&[c(0, 2), c(1, 2), c(2, 2)]).unwrap(),
        Effect::Scored(_)
    ));
    assert_eq!(score_of(&game, 0), 2);

    assert!(matches!(
        game.place(c(3, 3), Letter::O).unwrap(),
        Effect::Placed { bonus: true, .. }
    ));
    assert!(!game.bonus_available());
    assert_eq!(game.tap(c(6, 6)), Ok(Effect::Ignored));
    assert_eq!(game.pending(), None);
    assert_eq!((score_of(&game, 0), score_of(&game, 1)), (2, 0));
}

#[test]
fn test_pivoted_diagonal_scores() {
    let mut game = started(GridSize::Seven, 2);
    play_turn(&mut game, c(3, 3), Letter::S);
    play_turn(&mut game, c(4, 4), Letter::O);
    game.place(c(5, 5), Letter::S).unwrap();

    // Finger clips (3,4) before settling on the diagonal.
    let effect = game.slash(&[c(3, 3), c(3, 4), c(4, 4), c(5, 5)]).unwrap();
    assert!(matches!(effect, Effect::Scored(line) if line.id().to_string() == "3,3-5,5"));
}

#[test]
fn test_release_discards_partial_drag() {
    let mut game = started(GridSize::Seven, 2);
    game.place(c(0, 0), Letter::S).unwrap();
    game.drag_enter(c(0, 0)).unwrap();
    game.drag_enter(c(1, 1)).unwrap();
    assert_eq!(game.release(), Ok(Effect::PathDiscarded));
    assert!(game.snapshot().drag_path.is_empty());
    assert_eq!(game.ledger().map(|l| l.len()), Some(0));
}

#[test]
fn test_out_of_bounds_tap_is_error() {
    let mut game = started(GridSize::Seven, 2);
    assert_eq!(
        game.tap(c(7, 0)),
        Err(GameError::OutOfBounds {
            coord: c(7, 0),
            side: 7
        })
    );
    assert_eq!(game.pending(), None);
}

#[test]
fn test_game_over_accepts_only_reset() {
    let mut game = started(GridSize::Seven, 2);
    let cells: Vec<Coord> = (0..7).flat_map(|r| (0..7).map(move |col| c(r, col))).collect();
    for at in cells {
        play_turn(&mut game, at, Letter::O);
    }
    assert_eq!(game.phase(), Phase::GameOver);

    assert_eq!(game.tap(c(0, 0)), Ok(Effect::Ignored));
    assert_eq!(game.drag_enter(c(0, 0)), Ok(Effect::Ignored));
    assert_eq!(game.end_turn(), Err(GameError::MatchOver));
    assert_eq!(game.start(), Err(GameError::NotInSetup(Phase::GameOver)));

    assert_eq!(game.reset(), Ok(Effect::Reset));
    assert_eq!(game.phase(), Phase::Setup);
    assert_eq!(game.start(), Ok(Effect::Started));
    assert_eq!(game.grid().map(|g| g.filled_count()), Some(0));
}

#[test]
fn test_setup_ignores_play_inputs() {
    let mut game = SosGame::new();
    assert_eq!(game.tap(c(0, 0)), Ok(Effect::Ignored));
    assert_eq!(game.drag_enter(c(0, 0)), Ok(Effect::Ignored));
    assert_eq!(game.end_turn(), Ok(Effect::Ignored));
    assert_eq!(game.phase(), Phase::Setup);
}
