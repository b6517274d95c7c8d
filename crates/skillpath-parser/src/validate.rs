//! Structural validation of the token stream.
//!
//! Validation runs independently of event parsing and judges the whole
//! stream in one left-to-right pass, collecting every violation instead
//! of stopping at the first. It never fails and never panics: the
//! complete outcome is a [`ValidationResult`] value.
//!
//! The rules are deliberately conservative. The only nesting the grammar
//! admits is a single bracket pair inside parens (`([12])`); a bracket
//! group holds exactly two picks; a paren group holds exactly one; a `-`
//! binds to the digit immediately after it. Groups left open at the very
//! end of the pattern are recoverable (the parser discards them) and
//! warn rather than err.

use crate::{
    error::{Diagnostic, ErrorCode, ValidationResult},
    span::Span,
    tokens::{PositionedToken, Token},
};

/// An open `(` group and the picks seen inside it so far.
struct OpenParen {
    open: Span,
    picks: usize,
    excess_reported: bool,
}

/// An open `[` group and the digits seen inside it so far.
struct OpenBracket {
    open: Span,
    digits: usize,
    excess_reported: bool,
}

/// Validate a tokenized pattern.
///
/// Positions in the produced diagnostics index the normalized pattern.
pub(crate) fn validate_tokens(tokens: &[PositionedToken]) -> ValidationResult {
    let mut result = ValidationResult::new();

    if tokens.is_empty() {
        result.push(
            Diagnostic::error("empty pattern")
                .with_code(ErrorCode::E100)
                .with_label(Span::default(), "nothing to parse")
                .with_help("a build order holds at least one pick, e.g. `0`"),
        );
        return result;
    }

    let mut paren: Option<OpenParen> = None;
    let mut bracket: Option<OpenBracket> = None;
    let mut pending_minus: Option<Span> = None;

    for token in tokens {
        // A negative marker binds to the digit immediately after it.
        if !matches!(token.token, Token::Slot(_)) {
            if let Some(span) = pending_minus.take() {
                result.push(dangling_minus(span));
            }
        }

        match token.token {
            Token::Unknown(c) => {
                result.push(
                    Diagnostic::error(format!("unrecognized character `{c}`"))
                        .with_code(ErrorCode::E001)
                        .with_label(token.span, "not part of the notation")
                        .with_help("patterns use only `0`-`3`, `[`, `]`, `(`, `)` and `-`"),
                );
            }

            Token::Minus => pending_minus = Some(token.span),

            Token::Slot(_) => {
                pending_minus = None;
                if let Some(open) = bracket.as_mut() {
                    open.digits += 1;
                    if open.digits > 2 && !open.excess_reported {
                        open.excess_reported = true;
                        result.push(
                            Diagnostic::error("bracket group holds more than two picks")
                                .with_code(ErrorCode::E202)
                                .with_label(token.span, "third pick in a pair")
                                .with_secondary_label(open.open, "group opened here")
                                .with_help("a parallel pair holds exactly two slot digits: `[12]`"),
                        );
                    }
                } else if let Some(open) = paren.as_mut() {
                    open.picks += 1;
                    if open.picks > 1 && !open.excess_reported {
                        open.excess_reported = true;
                        result.push(paren_excess(token.span, open.open));
                    }
                }
            }

            Token::BracketOpen => {
                if bracket.is_some() {
                    result.push(misnested(token.span, "bracket group inside a bracket group"));
                } else {
                    bracket = Some(OpenBracket {
                        open: token.span,
                        digits: 0,
                        excess_reported: false,
                    });
                }
            }

            Token::BracketClose => {
                if let Some(open) = bracket.take() {
                    if open.digits < 2 {
                        result.push(
                            Diagnostic::error("bracket group holds fewer than two picks")
                                .with_code(ErrorCode::E201)
                                .with_label(token.span, "closed here")
                                .with_secondary_label(open.open, "group opened here")
                                .with_help("a parallel pair holds exactly two slot digits: `[12]`"),
                        );
                    }
                    if let Some(enclosing) = paren.as_mut() {
                        enclosing.picks += 1;
                        if enclosing.picks > 1 && !enclosing.excess_reported {
                            enclosing.excess_reported = true;
                            result.push(paren_excess(token.span, enclosing.open));
                        }
                    }
                } else {
                    result.push(
                        Diagnostic::error("unmatched `]`")
                            .with_code(ErrorCode::E200)
                            .with_label(token.span, "no open bracket group")
                            .with_help("open a parallel pair with `[` first"),
                    );
                }
            }

            Token::ParenOpen => {
                if bracket.is_some() {
                    result.push(misnested(token.span, "paren group inside a bracket group"));
                } else if paren.is_some() {
                    result.push(misnested(token.span, "paren group inside a paren group"));
                } else {
                    paren = Some(OpenParen {
                        open: token.span,
                        picks: 0,
                        excess_reported: false,
                    });
                }
            }

            Token::ParenClose => {
                if let Some(open) = bracket.as_ref() {
                    result.push(
                        Diagnostic::error("mismatched `)`")
                            .with_code(ErrorCode::E200)
                            .with_label(token.span, "bracket group still open")
                            .with_secondary_label(open.open, "opened here")
                            .with_help("close the pair with `]` first"),
                    );
                } else if let Some(open) = paren.take() {
                    if open.picks == 0 {
                        result.push(
                            Diagnostic::error("paren group holds no pick")
                                .with_code(ErrorCode::E204)
                                .with_label(token.span, "closed without a pick")
                                .with_secondary_label(open.open, "group opened here")
                                .with_help("a delayed pick wraps one slot digit: `(0)`"),
                        );
                    }
                } else {
                    result.push(
                        Diagnostic::error("unmatched `)`")
                            .with_code(ErrorCode::E200)
                            .with_label(token.span, "no open paren group")
                            .with_help("open a delayed pick with `(` first"),
                    );
                }
            }
        }
    }

    if let Some(span) = pending_minus {
        result.push(dangling_minus(span));
    }

    let pattern_end = tokens.last().map(|token| token.span).unwrap_or_default();
    if let Some(open) = bracket {
        result.push(
            Diagnostic::warning("unterminated bracket group at end of pattern")
                .with_label(open.open.union(pattern_end), "this trailing construct is ignored")
                .with_help("close the pair with `]` to keep its picks"),
        );
    }
    if let Some(open) = paren {
        result.push(
            Diagnostic::warning("unterminated paren group at end of pattern")
                .with_label(open.open.union(pattern_end), "this trailing construct is ignored")
                .with_help("close the group with `)` to keep its pick"),
        );
    }

    result
}

fn dangling_minus(span: Span) -> Diagnostic {
    Diagnostic::error("dangling negative marker")
        .with_code(ErrorCode::E205)
        .with_label(span, "not followed by a slot digit")
        .with_help("write `-` immediately before the pick it marks: `-0`")
}

fn misnested(span: Span, message: &str) -> Diagnostic {
    Diagnostic::error(message)
        .with_code(ErrorCode::E203)
        .with_label(span, "group opened here")
        .with_help("the only permitted nesting is one bracket pair inside parens: `([12])`")
}

fn paren_excess(span: Span, open: Span) -> Diagnostic {
    Diagnostic::error("paren group holds more than one pick")
        .with_code(ErrorCode::E204)
        .with_label(span, "second pick in the group")
        .with_secondary_label(open, "group opened here")
        .with_help("a delayed pick wraps one slot digit: `(0)`")
}
