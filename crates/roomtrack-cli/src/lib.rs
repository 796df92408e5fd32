//! roomtrack CLI library.
//!
//! Output formatting and terminal styling shared by the `roomtrack` binary.

pub mod output;
pub mod terminal;
