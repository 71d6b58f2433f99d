//! Move notation parse, format, reverse and invert tests

use bigcube::notation::invert_sequence;
use bigcube::{
    format_move, format_moves, invert_moves, parse_move, parse_moves, reverse_moves, Direction,
    MoveToken, NotationError,
};

/// Sequences in the style of contest solutions
const SEQUENCES: [&str; 5] = [
    "r1",
    "r1.-f1",
    "f0.r1.-d2.d2.-r0",
    "-f3.-f3.-f3.r2.d1.-d0",
    "d10.-r11.f0",
];

#[test]
fn test_reverse_example() {
    assert_eq!(reverse_moves("a1.b2.c3"), "c3.b2.a1");
}

#[test]
fn test_invert_example() {
    assert_eq!(invert_moves("r1.-f1"), "f1.-r1");
}

#[test]
fn test_invert_is_involution() {
    for seq in SEQUENCES {
        assert_eq!(invert_moves(&invert_moves(seq)), seq);
    }
}

#[test]
fn test_reverse_is_involution() {
    for seq in SEQUENCES {
        assert_eq!(reverse_moves(&reverse_moves(seq)), seq);
    }
}

#[test]
fn test_invert_matches_token_level_inverse() {
    let row_size = 12;
    for seq in SEQUENCES {
        let moves = parse_moves(seq, row_size).unwrap();
        let inverted_text = invert_moves(seq);
        let inverted_moves = parse_moves(&inverted_text, row_size).unwrap();
        assert_eq!(inverted_moves, invert_sequence(&moves), "sequence {}", seq);
    }
}

#[test]
fn test_sequence_followed_by_inverse_cancels() {
    // Applying a word then its inverse pairs every move with its own undo
    let row_size = 12;
    for seq in SEQUENCES {
        let moves = parse_moves(seq, row_size).unwrap();
        let undo = parse_moves(&invert_moves(seq), row_size).unwrap();

        let mut stack: Vec<MoveToken> = Vec::new();
        for m in moves.iter().chain(undo.iter()) {
            match stack.last() {
                Some(top) if *top == m.inverse() => {
                    stack.pop();
                }
                _ => stack.push(*m),
            }
        }
        assert!(stack.is_empty(), "sequence {} did not cancel", seq);
    }
}

#[test]
fn test_parse_token_example() {
    assert_eq!(
        parse_move("-r3", 9).unwrap(),
        MoveToken {
            axis: 'r',
            layer: 5,
            direction: Direction::Reverse
        }
    );
}

#[test]
fn test_parse_sequence_edge_cases() {
    assert!(parse_moves("", 9).unwrap().is_empty());
    assert_eq!(parse_moves("r1.", 9).unwrap().len(), 1);
}

#[test]
fn test_parse_error_carries_token() {
    let err = parse_moves("r1.f9.d0", 9).unwrap_err();
    assert_eq!(
        err,
        NotationError::IndexOutOfRange {
            token: "f9".to_string(),
            index: 9,
            row_size: 9
        }
    );
    assert!(err.to_string().contains("f9"));
}

#[test]
fn test_format_moves_roundtrip() {
    let row_size = 12;
    for seq in SEQUENCES {
        let moves = parse_moves(seq, row_size).unwrap();
        assert_eq!(format_moves(&moves, row_size).as_deref(), Some(seq));
    }
}

#[test]
fn test_format_move_composes_into_sequence() {
    let mut text = String::new();
    text.push_str(&format_move('r', 1, 2));
    text.push_str(&format_move('f', 0, -1));
    assert_eq!(text, "r1.r1.-f0.");

    let trimmed = text.trim_end_matches('.');
    assert_eq!(parse_moves(trimmed, 3).unwrap().len(), 3);
    assert_eq!(invert_moves(trimmed), "f0.-r1.-r1");
}
