//! Plumbing commands
//!
//! - `inspect`: print the record for `HEAD` without writing it

pub mod inspect;
