//! Input/Output for stumpgen: reading model documents and writing the
//! generated artifacts.

pub mod artifact;
pub mod reader;

pub use artifact::{ensure_output_dir, write_artifact};
pub use reader::ModelReader;
