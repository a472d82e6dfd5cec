//! I/O module
//!
//! Format-conversion collaborators around the engine:
//!
//! - `loader` - CSV/JSON input loading with extension-based detection
//! - `writer` - CSV output serialization and the summary filter

pub mod loader;
pub mod writer;

pub use loader::InputLoader;
pub use writer::OutputWriter;
