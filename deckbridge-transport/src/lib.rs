//! # Deckbridge Transport
//!
//! Wire payload types and the matrix deserializer. The host channel
//! delivers batches of typed, shaped, row-major byte columns; this crate
//! decodes them into [`DataBuffer`](deckbridge_core::DataBuffer) values
//! keyed by layer id and accessor name, and offers a session ingest
//! helper implementing the retain-last-good replacement policy.

pub mod deserialize;
pub mod payload;

pub use deserialize::{deserialize_matrix, ingest, TransportError};
pub use payload::{ColumnDescriptor, MatrixPayload, TransportPayload};
