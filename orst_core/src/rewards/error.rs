use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

/// Alias for `Result<T, rewards::PairingError>`.
pub type Result<T> = StdResult<T, PairingError>;

/// The reasons a list of prices cannot be split into pairs of one uniform sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// Raised when there are fewer than two prices.
    TooFewItems { len: usize },

    /// Raised when the prices cannot all be paired up.
    OddLength { len: usize },

    /// Raised when a pair sums to something other than the pair before it.
    UnevenSums { expected: i64, found: i64 },

    /// Raised when a sum, product or the running reward does not fit in an `i64`.
    Overflow,
}

impl StdError for PairingError {}

impl fmt::Display for PairingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PairingError::TooFewItems { len } => {
                write!(f, "Too Few Items: {len} (expected at least 2)")
            }
            PairingError::OddLength { len } => {
                write!(f, "Odd Length: {len} (every item needs a partner)")
            }
            PairingError::UnevenSums { expected, found } => {
                write!(f, "Uneven Sums: found a pair summing to {found} (expected: {expected})")
            }
            PairingError::Overflow => f.write_str("Reward overflowed a 64 bit integer"),
        }
    }
}
