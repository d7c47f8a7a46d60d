use super::*;

#[test]
fn test_from_square() {
    assert_eq!(Bitboard::from_square(0).0, 1); // a1
    assert_eq!(Bitboard::from_square(7).0, 128); // h1
    assert_eq!(Bitboard::from_square(63).0, 1 << 63); // h8
}

#[test]
fn test_popcount() {
    assert_eq!(Bitboard::EMPTY.popcount(), 0);
    assert_eq!(Bitboard::FILE_A.popcount(), 8);
    assert_eq!(Bitboard::RANK_8.popcount(), 8);
    assert_eq!(Bitboard::DARK_SQUARES.popcount(), 32);
    assert_eq!(Bitboard::ALL.popcount(), 64);
}

#[test]
fn test_iterator_is_ascending() {
    let bb = Bitboard(0b1010) | Bitboard::from_square(40);
    let squares: Vec<u8> = bb.collect();
    assert_eq!(squares, vec![1, 3, 40]);
}

#[test]
fn test_set_and_clear() {
    let mut bb = Bitboard::EMPTY;
    bb.set(18);
    assert!(bb.contains(18));
    bb.clear(18);
    assert!(bb.is_empty());
}

#[test]
fn test_diagonal_shifts() {
    let d4 = Bitboard::from_square(27);
    assert_eq!(d4.north_east(), Bitboard::from_square(36)); // e5
    assert_eq!(d4.north_west(), Bitboard::from_square(34)); // c5
    assert_eq!(d4.south_east(), Bitboard::from_square(20)); // e3
    assert_eq!(d4.south_west(), Bitboard::from_square(18)); // c3
}

#[test]
fn test_diagonal_shifts_do_not_wrap() {
    let h4 = Bitboard::from_square(31);
    assert_eq!(h4.north_east(), Bitboard::EMPTY);
    assert_eq!(h4.south_east(), Bitboard::EMPTY);

    let a5 = Bitboard::from_square(32);
    assert_eq!(a5.north_west(), Bitboard::EMPTY);
    assert_eq!(a5.south_west(), Bitboard::EMPTY);

    let h8 = Bitboard::from_square(63);
    assert_eq!(h8.north_west(), Bitboard::EMPTY); // off the top edge
}

#[test]
fn test_dark_squares_pattern() {
    assert!(Bitboard::DARK_SQUARES.contains(0)); // a1
    assert!(!Bitboard::DARK_SQUARES.contains(1)); // b1
    assert!(Bitboard::DARK_SQUARES.contains(9)); // b2
    assert!(Bitboard::DARK_SQUARES.contains(63)); // h8
}
