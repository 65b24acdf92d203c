//! Shallow item scanner.
//!
//! Finds `trait` items and the outer attributes written in front of them
//! without building a syntax tree. Items nested in modules, functions or
//! blocks are found too, since the scan never skips braces.

use std::sync::Arc;

use tracing::trace;

use crate::base::{TextRange, TextSize};

use super::attrs::{LangAttr, matching_close, outer_attribute};
use super::lexer::{Token, TokenKind, tokenize};

/// Kind of a scanned item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Trait,
}

/// An item found by [`scan_items`], positioned in absolute offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDecl {
    pub kind: ItemKind,
    pub name: Arc<str>,
    /// From the first outer attribute (or qualifier) to the closing `}` or `;`.
    pub range: TextRange,
    pub name_range: TextRange,
    pub lang: Option<LangAttr>,
}

/// Scan source text for trait items.
pub fn scan_items(text: &str) -> Vec<ItemDecl> {
    let tokens: Vec<Token<'_>> = tokenize(text)
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .collect();

    let mut items = Vec::new();
    // Outer attributes and qualifiers seen since the last unrelated token.
    let mut lang: Option<LangAttr> = None;
    let mut prefix_start: Option<TextSize> = None;

    let mut idx = 0;
    while idx < tokens.len() {
        let token = tokens[idx];
        match token.kind {
            TokenKind::Pound => {
                if let Some((attr, next)) = outer_attribute(&tokens, idx) {
                    prefix_start.get_or_insert(attr.range.start());
                    // Only the first lang attribute on an item counts.
                    if lang.is_none() {
                        lang = attr.lang;
                    }
                    idx = next;
                    continue;
                }
                // `#![...]` or a stray `#`: skip the inner attribute if any.
                lang = None;
                prefix_start = None;
                idx = skip_inner_attribute(&tokens, idx);
                continue;
            }
            TokenKind::PubKw => {
                prefix_start.get_or_insert(token.offset);
                idx += 1;
                if tokens.get(idx).map(|t| t.kind) == Some(TokenKind::LParen) {
                    idx = matching_close(&tokens, idx).map_or(tokens.len(), |close| close + 1);
                }
                continue;
            }
            TokenKind::UnsafeKw | TokenKind::AutoKw => {
                prefix_start.get_or_insert(token.offset);
            }
            TokenKind::TraitKw => {
                match tokens.get(idx + 1) {
                    Some(name) if name.kind == TokenKind::Ident => {
                        let start = prefix_start.unwrap_or(token.offset);
                        let end = item_end(&tokens, idx + 2).unwrap_or(TextSize::of(text));
                        trace!("scan_items: trait `{}` at {:?}", name.text, start);
                        items.push(ItemDecl {
                            kind: ItemKind::Trait,
                            name: Arc::from(name.text),
                            range: TextRange::new(start, end),
                            name_range: name.range(),
                            lang: lang.take(),
                        });
                        idx += 2;
                    }
                    _ => idx += 1,
                }
                lang = None;
                prefix_start = None;
                continue;
            }
            _ => {
                lang = None;
                prefix_start = None;
            }
        }
        idx += 1;
    }

    items
}

/// End offset of an item whose header continues at `tokens[from]`.
///
/// The header ends at the first `{` or `;` outside of parentheses and
/// brackets; a `{` body extends to its matching `}`.
fn item_end(tokens: &[Token<'_>], from: usize) -> Option<TextSize> {
    let mut idx = from;
    while idx < tokens.len() {
        match tokens[idx].kind {
            TokenKind::Semi => return Some(tokens[idx].range().end()),
            TokenKind::LBrace => {
                let close = matching_close(tokens, idx)?;
                return Some(tokens[close].range().end());
            }
            TokenKind::LParen | TokenKind::LBracket => {
                idx = matching_close(tokens, idx)? + 1;
            }
            _ => idx += 1,
        }
    }
    None
}

/// Index just past an inner attribute starting at `tokens[idx]`, or `idx + 1`.
fn skip_inner_attribute(tokens: &[Token<'_>], idx: usize) -> usize {
    let is_inner = tokens.get(idx + 1).map(|t| t.kind) == Some(TokenKind::Bang)
        && tokens.get(idx + 2).map(|t| t.kind) == Some(TokenKind::LBracket);
    if !is_inner {
        return idx + 1;
    }
    matching_close(tokens, idx + 2).map_or(tokens.len(), |close| close + 1)
}
