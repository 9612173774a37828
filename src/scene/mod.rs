//! Scene snapshot: the read-only input contract.
//!
//! The exporter consumes a [`SceneSnapshot`](types::SceneSnapshot) taken
//! from the host authoring tool before the pipeline runs; nothing in the
//! pipeline mutates it or reaches back into the host. The parser reads
//! the serialized snapshot XML format.

pub mod parser;
pub mod types;

pub use parser::parse_snapshot;
pub use types::*;
