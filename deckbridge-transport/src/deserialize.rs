use thiserror::Error;

use deckbridge_core::dtype::{Dtype, UnsupportedTypeError};
use deckbridge_core::matrix::{MatrixColumn, MatrixShape};
use deckbridge_core::{DataBuffer, SessionState};

use crate::payload::{ColumnDescriptor, TransportPayload};

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedTypeError),

    #[error(
        "Invalid shape {shape:?} for accessor {accessor} of layer {layer_id}: \
         expected [rows] or [rows, cols]"
    )]
    InvalidShape {
        layer_id: String,
        accessor: String,
        shape: Vec<usize>,
    },

    #[error(
        "Shape mismatch for accessor {accessor} of layer {layer_id}: \
         shape {rows}x{width} declares {expected} elements, payload decodes to {actual}"
    )]
    ShapeMismatch {
        layer_id: String,
        accessor: String,
        rows: usize,
        width: usize,
        expected: usize,
        actual: usize,
    },
}

// ── Matrix deserializer ───────────────────────────────────────────────

/// Decode one wire payload into a fresh [`DataBuffer`].
///
/// An absent payload means "no data update" and yields `Ok(None)`.
/// Descriptors are processed in payload order; a duplicate
/// `(layer_id, accessor)` pair overwrites the earlier column. Any
/// unresolvable dtype or shape fails the whole call: the caller never
/// sees a partially populated buffer.
pub fn deserialize_matrix(
    payload: Option<&TransportPayload>,
) -> Result<Option<DataBuffer>, TransportError> {
    let Some(payload) = payload else {
        return Ok(None);
    };

    let mut buffer = DataBuffer::new();
    for descriptor in &payload.payload {
        let column = decode_descriptor(descriptor)?;
        if column.elements.is_empty() {
            log::warn!(
                "No records in accessor {} belonging to layer {}",
                column.accessor,
                column.layer_id
            );
        }
        buffer.insert(column);
    }

    log::debug!(
        "Deserialized payload into buffer {} ({} layers, {} columns)",
        buffer.id,
        buffer.layer_count(),
        buffer.column_count()
    );
    Ok(Some(buffer))
}

fn decode_descriptor(descriptor: &ColumnDescriptor) -> Result<MatrixColumn, TransportError> {
    let dtype = Dtype::parse(&descriptor.matrix.dtype)?;
    let shape = parse_shape(descriptor)?;
    let elements = dtype.decode_le(&descriptor.matrix.data);

    if elements.len() != shape.element_count() {
        return Err(TransportError::ShapeMismatch {
            layer_id: descriptor.layer_id.clone(),
            accessor: descriptor.accessor.clone(),
            rows: shape.rows,
            width: shape.width(),
            expected: shape.element_count(),
            actual: elements.len(),
        });
    }

    Ok(MatrixColumn {
        layer_id: descriptor.layer_id.clone(),
        accessor: descriptor.accessor.clone(),
        column_name: descriptor.column_name.clone(),
        elements,
        shape,
    })
}

fn parse_shape(descriptor: &ColumnDescriptor) -> Result<MatrixShape, TransportError> {
    match descriptor.matrix.shape.as_slice() {
        [rows] => Ok(MatrixShape::vector(*rows)),
        [rows, cols] => Ok(MatrixShape::matrix(*rows, *cols)),
        _ => Err(TransportError::InvalidShape {
            layer_id: descriptor.layer_id.clone(),
            accessor: descriptor.accessor.clone(),
            shape: descriptor.matrix.shape.clone(),
        }),
    }
}

// ── Session ingest ────────────────────────────────────────────────────

/// Deserialize a payload and install the result in the session.
///
/// Returns `true` when a new buffer was installed, `false` for the
/// no-update case. On error the previously installed buffer is left
/// untouched, so the renderer keeps the last good data.
pub fn ingest(
    session: &mut SessionState,
    payload: Option<&TransportPayload>,
) -> Result<bool, TransportError> {
    match deserialize_matrix(payload)? {
        Some(buffer) => {
            session.install(buffer);
            Ok(true)
        }
        None => Ok(false),
    }
}
