mod date_iterator;

pub mod date_codec;
pub mod date_ops;
pub use date_iterator::DateIterator;
