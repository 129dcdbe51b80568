//! Shared utilities.

pub mod currency;

pub use currency::{format_currency, round_currency};
