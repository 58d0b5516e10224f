pub mod chunking;
pub mod collect;
pub mod config;
pub mod error;
pub mod export;
pub mod listing;
pub mod writer;

pub use chunking::{Chunk, ChunkSizes, Partitioner, partition};
pub use config::Config;
pub use error::ExportError;
pub use export::ExportReport;
