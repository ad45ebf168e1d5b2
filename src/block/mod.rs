//! Source block types.
//!
//! - [`SourceBlock`] - An ordered group of symbols handed to the encoder
//! - [`Symbol`] - A fixed-size binary unit read from the file

mod data;
mod symbol;

pub use data::SourceBlock;
pub use symbol::Symbol;
