//! json-tree-buffers - output sink for the json-tree emitters.

mod writer;

pub use writer::Writer;
