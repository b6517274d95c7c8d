//! Parser for build-order pattern tokens.
//!
//! This module transforms the token stream from the
//! [`lexer`](super::lexer) into the ordered [`BuildEvent`] list. The scan
//! runs left to right over an immutable token array via winnow
//! checkpoints, with one item of lookahead and no further backtracking.
//!
//! The parser is best-effort by design: structural judgement belongs to
//! the [`validate`](super::validate) pass, so on a malformed item the
//! parser resynchronizes and keeps going instead of failing. An
//! unterminated trailing construct is discarded wholesale; anything else
//! is skipped one token at a time.

use winnow::{
    Parser as _,
    combinator::{alt, opt},
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use skillpath_core::{
    event::{BracketGroupId, BuildEvent},
    slot::SlotType,
};

use crate::tokens::{PositionedToken, Token};

type Input<'t> = PatternTokenSlice<'t>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;
/// Type alias for winnow TokenSlice with our positioned tokens
type PatternTokenSlice<'t> = TokenSlice<'t, PositionedToken>;

/// One event before pair-id allocation.
#[derive(Debug, Clone, Copy)]
struct EventSeed {
    slot: SlotType,
    negative: bool,
    delayed: bool,
    source_index: usize,
}

impl EventSeed {
    fn into_event(self, group: Option<BracketGroupId>) -> BuildEvent {
        let event = match group {
            Some(group) => BuildEvent::paired(self.slot, self.source_index, group),
            None => BuildEvent::single(self.slot, self.source_index),
        };
        event
            .with_delayed(self.delayed)
            .with_negative_effect(self.negative)
    }
}

/// One parsed item: a lone pick or a parallel pair.
#[derive(Debug, Clone, Copy)]
enum ParsedItem {
    Single(EventSeed),
    Pair(EventSeed, EventSeed),
}

impl ParsedItem {
    fn mark_delayed(&mut self) {
        match self {
            ParsedItem::Single(seed) => seed.delayed = true,
            ParsedItem::Pair(first, second) => {
                first.delayed = true;
                second.delayed = true;
            }
        }
    }
}

/// Parse a slot digit, yielding the slot and its pattern offset.
fn slot_digit(input: &mut Input<'_>) -> IResult<(SlotType, usize)> {
    any.verify_map(|token: &PositionedToken| match token.token {
        Token::Slot(slot) => Some((slot, token.span.start())),
        _ => None,
    })
    .parse_next(input)
}

/// Parse the negative-effect marker.
fn minus(input: &mut Input<'_>) -> IResult<()> {
    any.verify(|token: &PositionedToken| matches!(token.token, Token::Minus))
        .void()
        .parse_next(input)
}

fn bracket_open(input: &mut Input<'_>) -> IResult<()> {
    any.verify(|token: &PositionedToken| matches!(token.token, Token::BracketOpen))
        .void()
        .parse_next(input)
}

fn bracket_close(input: &mut Input<'_>) -> IResult<()> {
    any.verify(|token: &PositionedToken| matches!(token.token, Token::BracketClose))
        .void()
        .parse_next(input)
}

fn paren_open(input: &mut Input<'_>) -> IResult<()> {
    any.verify(|token: &PositionedToken| matches!(token.token, Token::ParenOpen))
        .void()
        .parse_next(input)
}

fn paren_close(input: &mut Input<'_>) -> IResult<()> {
    any.verify(|token: &PositionedToken| matches!(token.token, Token::ParenClose))
        .void()
        .parse_next(input)
}

/// Parse one pick: an optional negative marker, then a slot digit.
fn pick_half(input: &mut Input<'_>) -> IResult<EventSeed> {
    let negative = opt(minus).parse_next(input)?.is_some();
    let (slot, source_index) = slot_digit(input)?;
    Ok(EventSeed {
        slot,
        negative,
        delayed: false,
        source_index,
    })
}

/// Parse a parallel pair: `[` pick pick `]`.
fn pair(input: &mut Input<'_>) -> IResult<(EventSeed, EventSeed)> {
    (bracket_open, pick_half, pick_half, bracket_close)
        .map(|(_, first, second, _)| (first, second))
        .parse_next(input)
}

fn single_item(input: &mut Input<'_>) -> IResult<ParsedItem> {
    pick_half.map(ParsedItem::Single).parse_next(input)
}

fn pair_item(input: &mut Input<'_>) -> IResult<ParsedItem> {
    pair.map(|(first, second)| ParsedItem::Pair(first, second))
        .parse_next(input)
}

/// Parse a delayed item: `(` pick-or-pair `)`.
///
/// Parens around a bracket pair mark both halves delayed.
fn delayed_item(input: &mut Input<'_>) -> IResult<ParsedItem> {
    let (_, mut item, _) =
        (paren_open, alt((pair_item, single_item)), paren_close).parse_next(input)?;
    item.mark_delayed();
    Ok(item)
}

/// Parse one item of the pattern.
fn item(input: &mut Input<'_>) -> IResult<ParsedItem> {
    alt((delayed_item, pair_item, single_item)).parse_next(input)
}

/// Whether the remaining tokens open a group that never closes.
///
/// Such a construct can only sit at the end of the pattern; the parser
/// discards it rather than degrading its picks into plain events the
/// author never wrote.
fn opens_unterminated_group(remaining: &[PositionedToken]) -> bool {
    let Some(first) = remaining.first() else {
        return false;
    };
    let closer = match first.token {
        Token::BracketOpen => Token::BracketClose,
        Token::ParenOpen => Token::ParenClose,
        _ => return false,
    };
    !remaining[1..].iter().any(|token| token.token == closer)
}

/// Build the best-effort event list from a token stream.
///
/// Bracket group ids are allocated left to right. The scan never fails;
/// tokens that fit no item are skipped and left for the validator to
/// report.
pub(crate) fn build_events(tokens: &[PositionedToken]) -> Vec<BuildEvent> {
    let mut input = TokenSlice::new(tokens);
    let mut events = Vec::new();
    let mut next_group: u32 = 0;

    while input.eof_offset() > 0 {
        let checkpoint = input.checkpoint();
        match item(&mut input) {
            Ok(ParsedItem::Single(seed)) => events.push(seed.into_event(None)),
            Ok(ParsedItem::Pair(first, second)) => {
                let group = BracketGroupId::new(next_group);
                next_group += 1;
                events.push(first.into_event(Some(group)));
                events.push(second.into_event(Some(group)));
            }
            Err(_) => {
                input.reset(&checkpoint);
                let remaining = &tokens[tokens.len() - input.eof_offset()..];
                if opens_unterminated_group(remaining) {
                    break;
                }
                let skipped: IResult<&PositionedToken> = any.parse_next(&mut input);
                if skipped.is_err() {
                    break;
                }
            }
        }
    }

    events
}
