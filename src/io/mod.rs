//! Plan serialization for the CLI and file output.

pub mod export;
