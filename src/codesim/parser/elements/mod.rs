//! Per-node `build` entry points
//!
//! Each syntax node type gets a `build(cursor) -> Option<Self>` constructor.
//! A builder either commits everything it consumed into the caller's cursor or
//! returns `None` with the cursor untouched.

pub mod blocks;
pub mod declaration;
pub mod expression;
pub mod primitives;
pub mod statements;
