//! Pytromino (workspace facade crate).
//!
//! Exposes `pytromino::{core, types}` while the implementation lives in dedicated
//! crates under `crates/`.

pub use pytromino_core as core;
pub use pytromino_types as types;
