//! Lexical analyzer for build-order patterns.
//!
//! The lexer converts a normalized pattern into a stream of
//! [`Token`]s for parsing. The notation's alphabet is fixed and every
//! token is a single character, so the scan is total: characters outside
//! the alphabet become [`Token::Unknown`] for the validator to judge, and
//! [`tokenize`] cannot fail.

use winnow::{
    Parser as _,
    combinator::repeat,
    error::{ContextError, ErrMode},
    stream::LocatingSlice,
    token::any,
};

use skillpath_core::slot::SlotType;

use crate::{
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Lex one character into a positioned token.
fn token(input: &mut Input<'_>) -> IResult<PositionedToken> {
    let (c, range) = any.with_span().parse_next(input)?;

    let token = match c {
        '[' => Token::BracketOpen,
        ']' => Token::BracketClose,
        '(' => Token::ParenOpen,
        ')' => Token::ParenClose,
        '-' => Token::Minus,
        c => match SlotType::from_digit(c) {
            Some(slot) => Token::Slot(slot),
            None => Token::Unknown(c),
        },
    };

    Ok(PositionedToken::new(token, Span::new(range)))
}

/// Tokenize a normalized pattern.
///
/// Spans index the normalized pattern by byte offset. Unknown characters
/// are preserved as tokens rather than reported here; the validator owns
/// all judgement about them.
pub(crate) fn tokenize(source: &str) -> Vec<PositionedToken> {
    repeat(0.., token)
        .parse(LocatingSlice::new(source))
        .expect("single-character scan accepts every input")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_digits() {
        let tokens = tokenize("0123");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].token, Token::Slot(SlotType::Passive));
        assert_eq!(tokens[3].token, Token::Slot(SlotType::Weapon2));
    }

    #[test]
    fn test_tokenize_full_alphabet() {
        let tokens = tokenize("[12](-3)");

        let kinds: Vec<Token> = tokens.iter().map(|t| t.token).collect();
        assert_eq!(
            kinds,
            vec![
                Token::BracketOpen,
                Token::Slot(SlotType::Active),
                Token::Slot(SlotType::Weapon1),
                Token::BracketClose,
                Token::ParenOpen,
                Token::Minus,
                Token::Slot(SlotType::Weapon2),
                Token::ParenClose,
            ]
        );
    }

    #[test]
    fn test_tokenize_spans_are_byte_offsets() {
        let tokens = tokenize("[12]");

        assert_eq!(tokens[0].span, Span::new(0..1));
        assert_eq!(tokens[1].span, Span::new(1..2));
        assert_eq!(tokens[3].span, Span::new(3..4));
    }

    #[test]
    fn test_tokenize_is_total() {
        let tokens = tokenize("1x2");

        assert_eq!(tokens[1].token, Token::Unknown('x'));
        assert_eq!(tokens[1].span, Span::new(1..2));
    }

    #[test]
    fn test_tokenize_multibyte_unknown_character() {
        let tokens = tokenize("1é2");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].token, Token::Unknown('é'));
        // 'é' is two bytes; the following digit starts after it.
        assert_eq!(tokens[2].span, Span::new(3..4));
    }
}
