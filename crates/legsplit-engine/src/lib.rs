//! Exact fixed-point splitting of a monetary amount.
//!
//! Takes one percent of a balance, rounds it half-up to a chosen number of
//! decimal places, and divides it into three legs whose sum is exactly the
//! rounded one percent. All arithmetic is done on [`Decimal`] values; binary
//! floating point never touches an amount.
//!
//! ```
//! use legsplit_engine::{parse_amount, split, Precision};
//!
//! let balance = parse_amount("1000").unwrap();
//! let result = split(balance, Precision::new(2).unwrap()).unwrap();
//! assert_eq!(result.one_percent.to_string(), "10.00");
//! assert_eq!(result.legs.map(|leg| leg.to_string()), ["3.34", "3.33", "3.33"]);
//! ```

pub mod amount;
pub mod error;
pub mod precision;
pub mod split;

pub use amount::parse_amount;
pub use error::{Result, SplitError};
pub use precision::{Precision, DEFAULT_DECIMALS, MAX_DECIMALS};
pub use rust_decimal::Decimal;
pub use split::{split, SplitResult};
