//! Serialization and deserialization for layout files.
//!
//! A layout file is pretty-printed JSON holding the room, objects, cables
//! and groups of a workspace together with some metadata. A bare JSON array
//! of objects is also accepted on load.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use deskplan_core::{Cable, Group, LayoutError, PlacedObject, Room};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layout file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete layout file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    pub version: String,
    pub metadata: LayoutMetadata,
    /// Absent in bare object arrays; the workspace keeps its own room then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
    #[serde(default)]
    pub objects: Vec<PlacedObject>,
    #[serde(default)]
    pub cables: Vec<Cable>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Layout metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl LayoutFile {
    /// Create an empty layout file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            room: None,
            objects: Vec::new(),
            cables: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Parse a layout file, or a bare array of objects.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(content).context("Failed to parse layout JSON")?;

        if value.is_array() {
            let objects: Vec<PlacedObject> =
                serde_json::from_value(value).context("Failed to parse object list")?;
            let mut layout = Self::new("Imported layout");
            layout.objects = objects;
            return Ok(layout);
        }

        let version = value
            .get("version")
            .and_then(|v| v.as_str())
            .ok_or_else(|| LayoutError::Malformed {
                reason: "missing version".to_string(),
            })?;
        if version.split('.').next() != FILE_FORMAT_VERSION.split('.').next() {
            return Err(LayoutError::UnsupportedVersion {
                version: version.to_string(),
            }
            .into());
        }

        let layout: LayoutFile =
            serde_json::from_value(value).context("Failed to parse layout file")?;
        if let Some(room) = &layout.room {
            room.validate()?;
        }
        Ok(layout)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize layout")
    }

    /// Save layout to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json_string()?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write layout file {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Load layout from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read layout file {}", path.as_ref().display()))?;
        let mut layout = Self::from_json_str(&content)?;
        layout.metadata.modified = Utc::now();
        Ok(layout)
    }
}
