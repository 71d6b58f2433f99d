use super::{segments, Direction, MoveToken, NotationError};
use nom::{
    character::complete::{char, digit1, satisfy},
    combinator::{all_consuming, opt},
    sequence::tuple,
    IResult,
};

type Result<T> = std::result::Result<T, NotationError>;

// Token syntax: optional sign, one axis letter, decimal far-side index
fn move_token(input: &str) -> IResult<&str, (Option<char>, char, &str)> {
    all_consuming(tuple((
        opt(char('-')),
        satisfy(|c| c.is_ascii_alphabetic()),
        digit1,
    )))(input)
}

/// Parse a single token such as `r3` or `-f10` for a cube of side `row_size`.
pub fn parse_move(text: &str, row_size: u32) -> Result<MoveToken> {
    if text.is_empty() {
        return Err(NotationError::EmptyToken);
    }

    let (_, (sign, axis, digits)) = move_token(text).map_err(|_| NotationError::Malformed {
        token: text.to_string(),
    })?;

    let far_index: u32 = digits.parse().map_err(|_| NotationError::InvalidIndex {
        token: text.to_string(),
    })?;

    if far_index >= row_size {
        return Err(NotationError::IndexOutOfRange {
            token: text.to_string(),
            index: far_index,
            row_size,
        });
    }

    let direction = if sign.is_some() {
        Direction::Reverse
    } else {
        Direction::Forward
    };

    Ok(MoveToken {
        axis,
        layer: row_size - far_index - 1,
        direction,
    })
}

/// Parse a `.`-separated sequence. Empty segments, including a trailing
/// separator, are skipped. The first bad token fails the whole sequence.
pub fn parse_moves(text: &str, row_size: u32) -> Result<Vec<MoveToken>> {
    segments(text)
        .map(|token| parse_move(token, row_size))
        .collect()
}
