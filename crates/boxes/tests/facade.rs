//! Integration test: the facade prelude covers a full game.

use boxes::prelude::*;

#[test]
fn prelude_plays_a_full_three_by_three_game() {
    let mut board = Board::new(BoardConfig::new(3)).unwrap();
    let lattice = *board.lattice();
    let mut player = Player::X;
    for side in lattice.sides() {
        let outcome = board.draw_side_outcome(side, player).unwrap().unwrap();
        // Keep the turn after closing a square.
        if outcome.claimed.is_empty() {
            player = player.opponent();
        }
    }
    assert!(board.is_complete());
    assert_eq!(
        board.claimed_count(Player::X) + board.claimed_count(Player::O),
        9
    );
    let text = render(&board);
    assert_eq!(text.matches(['X', 'O']).count(), 9);
}

#[test]
fn errors_surface_through_the_prelude() {
    let err: BoardError = Board::with_size(0).unwrap_err();
    assert_eq!(
        err,
        BoardError::Config(ConfigError::InvalidSize(IndexError::EmptyGrid))
    );

    let lattice = Lattice::new(2).unwrap();
    assert!(matches!(
        lattice.square_position(SquareIndex(5)),
        Err(IndexError::OutOfRange { .. })
    ));
}
