//! Outer attribute extraction.
//!
//! Only the `#[lang = "..."]` form is recognized. Everything else an
//! attribute may contain is skipped over without interpretation.

use std::sync::Arc;

use crate::base::TextRange;
use crate::base::constants::LANG_ATTRIBUTE;

use super::lexer::{Token, TokenKind};

/// A `lang` marker attached to an item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LangAttr {
    /// The marker value, without quotes (e.g. `add`).
    pub value: Arc<str>,
    /// Absolute range of the whole attribute, `#` through `]`.
    pub range: TextRange,
}

/// An outer attribute found in front of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OuterAttr {
    pub range: TextRange,
    pub lang: Option<LangAttr>,
}

/// Extract the marker value from a single attribute.
///
/// `tokens` must be the non-trivia tokens of one attribute, from `#` to
/// the closing `]`. Returns `None` for any other attribute and for
/// malformed `lang` attributes: a missing `=`, a non-string value, an
/// empty string, or an inner attribute (`#![...]`).
pub fn lang_attribute(tokens: &[Token<'_>]) -> Option<Arc<str>> {
    let [pound, open, name, eq, value, close] = tokens else {
        return None;
    };
    let shape_ok = pound.kind == TokenKind::Pound
        && open.kind == TokenKind::LBracket
        && name.kind == TokenKind::Ident
        && name.text == LANG_ATTRIBUTE
        && eq.kind == TokenKind::Eq
        && value.kind == TokenKind::Str
        && close.kind == TokenKind::RBracket;
    if !shape_ok {
        return None;
    }

    let unquoted = value.text.strip_prefix('"')?.strip_suffix('"')?;
    if unquoted.trim().is_empty() {
        return None;
    }
    Some(Arc::from(unquoted))
}

/// Parse the outer attribute starting at `tokens[start]` (a `#`).
///
/// Returns the attribute and the index just past its closing `]`, or
/// `None` when `tokens[start..]` does not begin an outer attribute or
/// the brackets never close.
pub(crate) fn outer_attribute(tokens: &[Token<'_>], start: usize) -> Option<(OuterAttr, usize)> {
    if tokens.get(start)?.kind != TokenKind::Pound
        || tokens.get(start + 1)?.kind != TokenKind::LBracket
    {
        return None;
    }
    let close = matching_close(tokens, start + 1)?;
    let attr_tokens = &tokens[start..=close];
    let range = tokens[start].range().cover(tokens[close].range());
    let lang = lang_attribute(attr_tokens).map(|value| LangAttr { value, range });
    Some((OuterAttr { range, lang }, close + 1))
}

/// Index of the token closing the group opened at `tokens[open]`.
///
/// All three bracket kinds are counted together, which is enough for
/// well-formed input and stops at the first unbalanced closer otherwise.
pub(crate) fn matching_close(tokens: &[Token<'_>], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::LBracket | TokenKind::LBrace | TokenKind::LParen => depth += 1,
            TokenKind::RBracket | TokenKind::RBrace | TokenKind::RParen => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}
