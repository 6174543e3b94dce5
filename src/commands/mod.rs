//! Command implementations
//!
//! Commands are `impl Repository` blocks, split the same way git splits its own:
//!
//! - `plumbing`: low-level queries useful for scripting and debugging (inspect)
//! - `porcelain`: the everyday commands (record, show)

pub mod plumbing;
pub mod porcelain;
