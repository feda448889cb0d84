//! Scanner module, organized into focused components:
//! - `core` — the `Scanner` struct, whitespace skip, and longest-match dispatch
//! - `identifier` — the `ID` pattern and keyword promotion
//! - `number` — the `INT_NUM`/`FLOAT_NUM` patterns
//! - `operator` — the operator/punctuator table
//! - `comment` — the `BLOCK_COMMENT`/`INLINE_COMMENT` patterns

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use core::Scanner;
