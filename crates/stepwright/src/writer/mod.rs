//! Serialization of songs and charts to the tag-delimited text format, and
//! the durable file writes that put the result on disk.

pub mod edit;
pub mod ssc;
mod tag;

pub use tag::TagWriter;
