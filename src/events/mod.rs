//! Message types exchanged across systems and threads.
//!
//! Submodules:
//! - [`audio`] – commands and replies for the background audio thread
pub mod audio;
