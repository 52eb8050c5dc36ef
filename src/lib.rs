//! Terminal 128 puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_128::{core,input,term,types}` and
//! holds the binary-side concerns: environment [`config`] and file
//! [`logging`].

pub mod config;
pub mod logging;

pub use tui_128_core as core;
pub use tui_128_input as input;
pub use tui_128_term as term;
pub use tui_128_types as types;
