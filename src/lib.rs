pub mod config;
pub mod units;

pub use config::Config;
pub use units::{compare, convert, Comparison, ConvertError, Dimension, RawValue};
