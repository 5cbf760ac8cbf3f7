use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use deckbridge_core::DataBuffer;

use crate::attributes::LayerAttributeSet;

/// Data slot of a scene layer.
///
/// Scene JSON authors a declarative placeholder (a URL, an inline row
/// array, or nothing at all); the merger replaces it with attributes
/// resolved from the data buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerData {
    /// Concrete per-row attributes resolved from the data buffer.
    Attributes(LayerAttributeSet),
    /// Declarative placeholder authored in the scene JSON.
    Declared(Value),
}

impl Default for LayerData {
    fn default() -> Self {
        LayerData::Declared(Value::Null)
    }
}

/// A single renderable layer in the parsed scene description.
///
/// Only the fields the merger touches are modeled; everything else the
/// scene author wrote passes through in `props` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayer {
    /// Stable layer id, the key into the data buffer.
    pub id: String,
    /// Renderer type tag, e.g. "ScatterplotLayer".
    #[serde(rename = "@@type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default)]
    pub data: LayerData,
    /// Remaining layer properties, passed through untouched.
    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl SceneLayer {
    /// Derived copy with the data slot replaced. Every other field is
    /// cloned unchanged; the original layer is not mutated.
    pub fn with_data(&self, data: LayerAttributeSet) -> SceneLayer {
        SceneLayer {
            data: LayerData::Attributes(data),
            ..self.clone()
        }
    }
}

/// Parsed scene description: renderable layers in draw order plus any
/// non-layer content (views, initial view state, ...) passed through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub layers: Vec<SceneLayer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SceneDescription {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Replace every layer's data slot with attributes resolved from the
/// buffer.
///
/// Layer order and count are preserved; a layer absent from the buffer
/// receives the empty attribute set. Introduces no failure modes of its
/// own.
pub fn resolve_scene(buffer: &DataBuffer, scene: &SceneDescription) -> SceneDescription {
    let layers = scene
        .layers
        .iter()
        .map(|layer| layer.with_data(LayerAttributeSet::from_buffer(buffer, &layer.id)))
        .collect();

    SceneDescription {
        layers,
        extra: scene.extra.clone(),
    }
}

/// Parse a scene JSON document and resolve it against the buffer. The
/// parse failure of the conversion step propagates unmodified.
pub fn resolve_scene_json(
    buffer: &DataBuffer,
    json: &str,
) -> Result<SceneDescription, serde_json::Error> {
    let scene = SceneDescription::from_json(json)?;
    Ok(resolve_scene(buffer, &scene))
}
