use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matrix::MatrixColumn;

/// Decoded columnar data for every layer mentioned in one payload, keyed
/// by layer id and accessor name.
///
/// A buffer is rebuilt wholesale per payload and immutable once built;
/// "updating" means constructing a new instance and swapping the session
/// slot. Layers absent from the payload have no entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataBuffer {
    /// Revision identifier, fresh per rebuild.
    pub id: Uuid,
    layers: HashMap<String, HashMap<String, MatrixColumn>>,
}

impl DataBuffer {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            layers: HashMap::new(),
        }
    }

    // ── Column management ────────────────────────────────────────────

    /// Insert a column under its `(layer_id, accessor)` pair. A duplicate
    /// pair overwrites the earlier column: last write wins.
    pub fn insert(&mut self, column: MatrixColumn) {
        self.layers
            .entry(column.layer_id.clone())
            .or_default()
            .insert(column.accessor.clone(), column);
    }

    /// All columns of one layer, keyed by accessor name.
    pub fn layer(&self, layer_id: &str) -> Option<&HashMap<String, MatrixColumn>> {
        self.layers.get(layer_id)
    }

    pub fn column(&self, layer_id: &str, accessor: &str) -> Option<&MatrixColumn> {
        self.layers.get(layer_id).and_then(|a| a.get(accessor))
    }

    pub fn layer_ids(&self) -> Vec<&str> {
        self.layers.keys().map(|k| k.as_str()).collect()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn column_count(&self) -> usize {
        self.layers.values().map(|a| a.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    // ── Serialization ────────────────────────────────────────────────

    /// The buffer doubles as queryable session state; these helpers make
    /// it inspectable from the host side.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for DataBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{ElementBuffer, MatrixShape};

    fn column(layer_id: &str, accessor: &str, values: Vec<f32>) -> MatrixColumn {
        MatrixColumn {
            layer_id: layer_id.to_string(),
            accessor: accessor.to_string(),
            column_name: accessor.to_string(),
            shape: MatrixShape::vector(values.len()),
            elements: ElementBuffer::F32(values),
        }
    }

    #[test]
    fn test_buffer_create() {
        let buffer = DataBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.layer_count(), 0);
        assert_eq!(buffer.column_count(), 0);
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut buffer = DataBuffer::new();
        buffer.insert(column("L1", "getPosition", vec![1.0, 2.0]));
        buffer.insert(column("L1", "getColor", vec![0.5]));
        buffer.insert(column("L2", "getRadius", vec![3.0]));

        assert_eq!(buffer.layer_count(), 2);
        assert_eq!(buffer.column_count(), 3);
        assert_eq!(buffer.layer("L1").unwrap().len(), 2);
        assert_eq!(
            buffer.column("L1", "getPosition").unwrap().elements,
            ElementBuffer::F32(vec![1.0, 2.0])
        );
        assert!(buffer.column("L3", "getPosition").is_none());
    }

    #[test]
    fn test_duplicate_pair_last_write_wins() {
        let mut buffer = DataBuffer::new();
        buffer.insert(column("L1", "getPosition", vec![1.0, 2.0]));
        buffer.insert(column("L1", "getPosition", vec![9.0]));

        assert_eq!(buffer.column_count(), 1);
        assert_eq!(
            buffer.column("L1", "getPosition").unwrap().elements,
            ElementBuffer::F32(vec![9.0])
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let mut buffer = DataBuffer::new();
        buffer.insert(column("L1", "getPosition", vec![1.0, 2.0]));

        let json = buffer.to_json().unwrap();
        let back = DataBuffer::from_json(&json).unwrap();
        assert_eq!(back.id, buffer.id);
        assert_eq!(
            back.column("L1", "getPosition").unwrap().elements,
            ElementBuffer::F32(vec![1.0, 2.0])
        );
    }
}
