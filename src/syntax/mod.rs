//! Shallow syntax layer: tokens, outer attributes and trait items.
pub mod attrs;
pub mod items;
pub mod lexer;

pub use attrs::{LangAttr, OuterAttr, lang_attribute};
pub use items::{ItemDecl, ItemKind, scan_items};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
