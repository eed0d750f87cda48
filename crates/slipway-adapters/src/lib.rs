//! Slipway Adapters - implementations of the core's outbound ports.
//!
//! Everything that touches the outside world lives here: the real
//! filesystem, subprocess invocation, and the embedded template skeletons.
//! `slipway-core` stays free of I/O and depends only on the port traits.

pub mod filesystem;
pub mod process;
pub mod templates;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::ProcessRunner;
pub use templates::EmbeddedTemplates;
