//! CLI command implementations.

pub(crate) mod quotes;
pub(crate) mod search;
pub(crate) mod ticks;
