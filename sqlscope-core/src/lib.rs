mod as_value;
mod explain;
mod storable;
mod util;
mod value;
pub mod writer;

pub use ::anyhow::Context;
pub use as_value::*;
pub use explain::*;
pub use storable::*;
pub use value::*;
pub use writer::{GenericLiteralWriter, LiteralWriter};

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
