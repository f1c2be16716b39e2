mod context;
mod literal_writer;

pub use context::*;
pub use literal_writer::*;
