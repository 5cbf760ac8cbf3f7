use serde::{Deserialize, Serialize};

/// Wire form of one binary update: the batch of column descriptors the
/// host channel delivers in a single message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportPayload {
    pub payload: Vec<ColumnDescriptor>,
}

/// One numeric column targeted at a layer accessor.
///
/// Each descriptor carries a single column of the host-side dataframe,
/// already packed into raw bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Id of the target visual layer.
    pub layer_id: String,
    /// Accessor the renderer reads this column through, e.g. "getPosition".
    pub accessor: String,
    /// Human-readable source column label. Informational only.
    pub column_name: String,
    pub matrix: MatrixPayload,
}

/// Raw matrix bytes plus the metadata needed to interpret them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixPayload {
    /// Row-major, little-endian packed elements.
    pub data: Vec<u8>,
    /// `[rows]` for a scalar column, `[rows, cols]` for a matrix.
    pub shape: Vec<usize>,
    /// Wire type code, resolved against the fixed dtype table.
    pub dtype: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_json_shape() {
        let json = r#"{
            "payload": [{
                "layer_id": "scatter-1",
                "accessor": "getPosition",
                "column_name": "position",
                "matrix": {
                    "data": [0, 0, 128, 63],
                    "shape": [1, 1],
                    "dtype": "float32"
                }
            }]
        }"#;
        let payload: TransportPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.payload.len(), 1);

        let descriptor = &payload.payload[0];
        assert_eq!(descriptor.layer_id, "scatter-1");
        assert_eq!(descriptor.matrix.shape, vec![1, 1]);
        assert_eq!(descriptor.matrix.dtype, "float32");
        assert_eq!(descriptor.matrix.data, 1.0f32.to_le_bytes());
    }
}
