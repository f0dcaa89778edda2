//! Route handlers.

pub mod diagnostics;
pub mod scores;
