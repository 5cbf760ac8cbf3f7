use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use deckbridge_core::{DataBuffer, ElementBuffer};

/// Per-layer attribute table ready for the rendering engine: flat typed
/// arrays plus the element width of each accessor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerAttributeSet {
    /// Maximum row count across the layer's accessors. Accessors may
    /// disagree on row count; the renderer tolerates the difference.
    pub length: usize,
    pub attributes: HashMap<String, AttributeColumn>,
}

/// Flat values for one accessor of one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeColumn {
    /// Element width of one row (1 for scalar columns).
    pub size: usize,
    /// Row-major values, owned by the attribute set.
    pub values: ElementBuffer,
}

impl LayerAttributeSet {
    /// The "no data" set: zero rows, no attributes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the attribute set for one layer from the current buffer.
    ///
    /// A layer with no buffer entry yields the empty set; missing data is
    /// not an error.
    pub fn from_buffer(buffer: &DataBuffer, layer_id: &str) -> Self {
        let Some(columns) = buffer.layer(layer_id) else {
            log::debug!("No data buffer entry for layer {}", layer_id);
            return Self::empty();
        };

        let mut set = Self::empty();
        for (accessor, column) in columns {
            set.length = set.length.max(column.shape.rows);
            set.attributes.insert(
                accessor.clone(),
                AttributeColumn {
                    size: column.shape.width(),
                    values: column.elements.clone(),
                },
            );
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
