//! Shared infrastructure for the kap toolchain: source buffering, diagnostics,
//! and the dense index types used to build grammar tables.

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;

pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
