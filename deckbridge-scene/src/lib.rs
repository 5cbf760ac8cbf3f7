//! # Deckbridge Scene
//!
//! Parsed scene description model and the layer data merger. A scene is a
//! JSON document listing renderable layers in draw order; the merger
//! replaces each layer's declarative data slot with concrete per-row
//! attributes resolved from the current data buffer, producing new layer
//! objects ready for the rendering engine.

pub mod attributes;
pub mod scene;

pub use attributes::{AttributeColumn, LayerAttributeSet};
pub use scene::{resolve_scene, resolve_scene_json, LayerData, SceneDescription, SceneLayer};
