//! Ordered collections backed by an arena-allocated red-black tree.
//!
//! The tree keeps parent links as arena indices so that both fixups walk upward iteratively and
//! in-order iteration needs no auxiliary stack.

#[macro_use]
extern crate log;

mod arena;
pub mod compare;
mod entry;
pub mod error;
pub mod red_black_tree;

pub use crate::error::{Error, Result, Violation};
