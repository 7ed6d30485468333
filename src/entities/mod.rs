//! Request/response entities and the lookup workflows behind them.

pub(crate) mod drug;
pub(crate) mod interactions;
