//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_blockfall::{core,input,term,types}`; the implementation lives in
//! dedicated crates under `crates/`.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
