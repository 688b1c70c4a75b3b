pub mod change;
pub mod numbers;

pub use change::{format_change, parse_change};
pub use numbers::{format_number, parse_amount, round_amount, round_rate, AmountError};
