//! Porcelain commands
//!
//! - `record`: append the `HEAD` commit to the log (the default command)
//! - `show`: list the rows already logged

pub mod record;
pub mod show;
