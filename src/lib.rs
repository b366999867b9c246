#[macro_use]
mod macros;

mod error;
pub use error::Error;

pub mod flat;
pub use flat::{flatten, hydrate, FlatRecord};

pub mod schema;
pub use schema::Registry;

pub mod value;
pub use value::Value;

/// A Result type alias that uses Inlay's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
