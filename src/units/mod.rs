// Unit conversion and comparison for the three supported dimensions.
// Converters are pure functions of their arguments plus the read-only
// configuration, so they are safe to call from any thread.

pub mod compare;
pub mod convert;
pub mod distance;
pub mod error;
pub mod formatter;
pub mod temperature;
pub mod types;
pub mod validator;
pub mod weight;


pub use compare::{compare, Comparison};
pub use convert::convert;
pub use error::ConvertError;
pub use types::{Dimension, RawValue};
