//! # Deckbridge Core
//!
//! Core data model for the analytics-to-renderer bridge: the fixed
//! element-type table, decoded matrix columns, the per-layer data buffer,
//! and the session slot that holds the current buffer between payloads.
//!
//! This crate is the leaf of the deckbridge workspace.

pub mod buffer;
pub mod dtype;
pub mod matrix;
pub mod session;

pub use buffer::DataBuffer;
pub use dtype::{Dtype, UnsupportedTypeError};
pub use matrix::{ElementBuffer, MatrixColumn, MatrixShape};
pub use session::SessionState;
