//! Defines some common functions used in this library.

/// Defines label statistics such as entropy and chi-square.
pub mod statistics;

/// Defines some checker functions.
pub(crate) mod checker;
