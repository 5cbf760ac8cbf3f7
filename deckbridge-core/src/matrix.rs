use serde::{Deserialize, Serialize};

use crate::dtype::Dtype;

/// Decoded element storage for one matrix column.
///
/// Owns its values; the raw wire bytes are released once a buffer exists.
/// 64-bit integer columns keep integer storage so values past the f64
/// mantissa survive intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementBuffer {
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    I64(Vec<i64>),
    U64(Vec<u64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl ElementBuffer {
    /// Number of decoded elements.
    pub fn len(&self) -> usize {
        match self {
            ElementBuffer::I8(v) => v.len(),
            ElementBuffer::U8(v) => v.len(),
            ElementBuffer::I16(v) => v.len(),
            ElementBuffer::U16(v) => v.len(),
            ElementBuffer::I32(v) => v.len(),
            ElementBuffer::U32(v) => v.len(),
            ElementBuffer::I64(v) => v.len(),
            ElementBuffer::U64(v) => v.len(),
            ElementBuffer::F32(v) => v.len(),
            ElementBuffer::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type this buffer was decoded as.
    pub fn dtype(&self) -> Dtype {
        match self {
            ElementBuffer::I8(_) => Dtype::Int8,
            ElementBuffer::U8(_) => Dtype::Uint8,
            ElementBuffer::I16(_) => Dtype::Int16,
            ElementBuffer::U16(_) => Dtype::Uint16,
            ElementBuffer::I32(_) => Dtype::Int32,
            ElementBuffer::U32(_) => Dtype::Uint32,
            ElementBuffer::I64(_) => Dtype::Int64,
            ElementBuffer::U64(_) => Dtype::Uint64,
            ElementBuffer::F32(_) => Dtype::Float32,
            ElementBuffer::F64(_) => Dtype::Float64,
        }
    }
}

/// Shape of a row-major matrix: row count plus optional element width.
///
/// A plain vector arrives as `[rows]`; a matrix as `[rows, cols]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixShape {
    pub rows: usize,
    pub cols: Option<usize>,
}

impl MatrixShape {
    /// Shape of a 1-wide column vector.
    pub fn vector(rows: usize) -> Self {
        Self { rows, cols: None }
    }

    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols: Some(cols),
        }
    }

    /// Element width of one row. An absent width means a scalar column.
    pub fn width(&self) -> usize {
        self.cols.unwrap_or(1)
    }

    /// Total number of elements the shape describes.
    pub fn element_count(&self) -> usize {
        self.rows * self.width()
    }
}

/// One decoded column: a row-major matrix bound to a layer accessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixColumn {
    /// Id of the target visual layer.
    pub layer_id: String,
    /// Semantic role the renderer reads this column through,
    /// e.g. "getPosition".
    pub accessor: String,
    /// Human-readable source column label. Informational only.
    pub column_name: String,
    pub elements: ElementBuffer,
    pub shape: MatrixShape,
}

impl MatrixColumn {
    /// Whether the decoded element count matches the declared shape.
    pub fn is_consistent(&self) -> bool {
        self.elements.len() == self.shape.element_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shape_width() {
        let shape = MatrixShape::vector(5);
        assert_eq!(shape.width(), 1);
        assert_eq!(shape.element_count(), 5);
    }

    #[test]
    fn test_matrix_shape_element_count() {
        let shape = MatrixShape::matrix(3, 2);
        assert_eq!(shape.width(), 2);
        assert_eq!(shape.element_count(), 6);
    }

    #[test]
    fn test_column_consistency() {
        let column = MatrixColumn {
            layer_id: "L1".to_string(),
            accessor: "getPosition".to_string(),
            column_name: "position".to_string(),
            elements: ElementBuffer::F32(vec![0.0; 6]),
            shape: MatrixShape::matrix(3, 2),
        };
        assert!(column.is_consistent());

        let truncated = MatrixColumn {
            elements: ElementBuffer::F32(vec![0.0; 5]),
            ..column
        };
        assert!(!truncated.is_consistent());
    }
}
