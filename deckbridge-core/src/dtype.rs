use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matrix::ElementBuffer;

/// An element-type code outside the supported table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported dtype '{0}'")]
pub struct UnsupportedTypeError(pub String);

/// Fixed-width numeric element type of a wire matrix.
///
/// The wire spelling is the lowercase variant name, e.g. `"int8"`,
/// `"float64"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
}

impl Dtype {
    /// All supported element types, in wire order.
    pub const ALL: [Dtype; 10] = [
        Dtype::Int8,
        Dtype::Uint8,
        Dtype::Int16,
        Dtype::Uint16,
        Dtype::Int32,
        Dtype::Uint32,
        Dtype::Int64,
        Dtype::Uint64,
        Dtype::Float32,
        Dtype::Float64,
    ];

    /// Resolve a wire type code. Unknown codes are the single failure path
    /// of the type table.
    pub fn parse(code: &str) -> Result<Dtype, UnsupportedTypeError> {
        match code {
            "int8" => Ok(Dtype::Int8),
            "uint8" => Ok(Dtype::Uint8),
            "int16" => Ok(Dtype::Int16),
            "uint16" => Ok(Dtype::Uint16),
            "int32" => Ok(Dtype::Int32),
            "uint32" => Ok(Dtype::Uint32),
            "int64" => Ok(Dtype::Int64),
            "uint64" => Ok(Dtype::Uint64),
            "float32" => Ok(Dtype::Float32),
            "float64" => Ok(Dtype::Float64),
            other => Err(UnsupportedTypeError(other.to_string())),
        }
    }

    /// Wire spelling of this type code.
    pub fn name(&self) -> &'static str {
        match self {
            Dtype::Int8 => "int8",
            Dtype::Uint8 => "uint8",
            Dtype::Int16 => "int16",
            Dtype::Uint16 => "uint16",
            Dtype::Int32 => "int32",
            Dtype::Uint32 => "uint32",
            Dtype::Int64 => "int64",
            Dtype::Uint64 => "uint64",
            Dtype::Float32 => "float32",
            Dtype::Float64 => "float64",
        }
    }

    /// Width of a single element in bytes.
    pub fn byte_width(&self) -> usize {
        match self {
            Dtype::Int8 | Dtype::Uint8 => 1,
            Dtype::Int16 | Dtype::Uint16 => 2,
            Dtype::Int32 | Dtype::Uint32 | Dtype::Float32 => 4,
            Dtype::Int64 | Dtype::Uint64 | Dtype::Float64 => 8,
        }
    }

    /// Interpret raw bytes as a dense little-endian sequence of this
    /// element type. Trailing bytes that do not fill a whole element are
    /// dropped; the caller reconciles the element count against the
    /// declared shape.
    pub fn decode_le(&self, data: &[u8]) -> ElementBuffer {
        match self {
            Dtype::Int8 => ElementBuffer::I8(data.iter().map(|&b| b as i8).collect()),
            Dtype::Uint8 => ElementBuffer::U8(data.to_vec()),
            Dtype::Int16 => ElementBuffer::I16(
                data.chunks_exact(2)
                    .map(|c| i16::from_le_bytes([c[0], c[1]]))
                    .collect(),
            ),
            Dtype::Uint16 => ElementBuffer::U16(
                data.chunks_exact(2)
                    .map(|c| u16::from_le_bytes([c[0], c[1]]))
                    .collect(),
            ),
            Dtype::Int32 => ElementBuffer::I32(
                data.chunks_exact(4)
                    .map(|c| i32::from_le_bytes(c.try_into().unwrap()))
                    .collect(),
            ),
            Dtype::Uint32 => ElementBuffer::U32(
                data.chunks_exact(4)
                    .map(|c| u32::from_le_bytes(c.try_into().unwrap()))
                    .collect(),
            ),
            Dtype::Int64 => ElementBuffer::I64(
                data.chunks_exact(8)
                    .map(|c| i64::from_le_bytes(c.try_into().unwrap()))
                    .collect(),
            ),
            Dtype::Uint64 => ElementBuffer::U64(
                data.chunks_exact(8)
                    .map(|c| u64::from_le_bytes(c.try_into().unwrap()))
                    .collect(),
            ),
            Dtype::Float32 => ElementBuffer::F32(
                data.chunks_exact(4)
                    .map(|c| f32::from_le_bytes(c.try_into().unwrap()))
                    .collect(),
            ),
            Dtype::Float64 => ElementBuffer::F64(
                data.chunks_exact(8)
                    .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
                    .collect(),
            ),
        }
    }
}

impl std::str::FromStr for Dtype {
    type Err = UnsupportedTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dtype::parse(s)
    }
}

impl std::fmt::Display for Dtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
