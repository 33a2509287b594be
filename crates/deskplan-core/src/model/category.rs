//! Object categories and their catalog defaults.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::object::Dimensions;
use super::Vec3;

/// Closed set of object kinds that can be placed in a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectCategory {
    Desk,
    Monitor,
    PcTower,
    Lamp,
    Speaker,
    Plant,
    Keyboard,
    Mouse,
    Chair,
    Shelf,
    Mug,
    Headphones,
    Books,
    Notebook,
    Pen,
    Phone,
    Tablet,
    Webcam,
    Microphone,
    Clock,
    Poster,
    CableTray,
    MonitorStand,
}

impl ObjectCategory {
    /// Every category, in catalog order.
    pub const ALL: [ObjectCategory; 23] = [
        ObjectCategory::Desk,
        ObjectCategory::Monitor,
        ObjectCategory::PcTower,
        ObjectCategory::Lamp,
        ObjectCategory::Speaker,
        ObjectCategory::Plant,
        ObjectCategory::Keyboard,
        ObjectCategory::Mouse,
        ObjectCategory::Chair,
        ObjectCategory::Shelf,
        ObjectCategory::Mug,
        ObjectCategory::Headphones,
        ObjectCategory::Books,
        ObjectCategory::Notebook,
        ObjectCategory::Pen,
        ObjectCategory::Phone,
        ObjectCategory::Tablet,
        ObjectCategory::Webcam,
        ObjectCategory::Microphone,
        ObjectCategory::Clock,
        ObjectCategory::Poster,
        ObjectCategory::CableTray,
        ObjectCategory::MonitorStand,
    ];

    /// The kebab-case identifier used in layout files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desk => "desk",
            Self::Monitor => "monitor",
            Self::PcTower => "pc-tower",
            Self::Lamp => "lamp",
            Self::Speaker => "speaker",
            Self::Plant => "plant",
            Self::Keyboard => "keyboard",
            Self::Mouse => "mouse",
            Self::Chair => "chair",
            Self::Shelf => "shelf",
            Self::Mug => "mug",
            Self::Headphones => "headphones",
            Self::Books => "books",
            Self::Notebook => "notebook",
            Self::Pen => "pen",
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Webcam => "webcam",
            Self::Microphone => "microphone",
            Self::Clock => "clock",
            Self::Poster => "poster",
            Self::CableTray => "cable-tray",
            Self::MonitorStand => "monitor-stand",
        }
    }

    /// Desks use a floor-anchored origin; everything else is center-anchored.
    pub fn is_floor_anchored(&self) -> bool {
        matches!(self, Self::Desk)
    }
}

impl std::fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a category name is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown object category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for ObjectCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Defaults applied when a new object of a category is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub color: &'static str,
    pub scale: Vec3,
    pub dimensions: Dimensions,
}

const fn entry(
    name: &'static str,
    color: &'static str,
    scale: Vec3,
    dims: [f64; 3],
    radius: Option<f64>,
) -> CatalogEntry {
    CatalogEntry {
        name,
        color,
        scale,
        dimensions: Dimensions {
            width: Some(dims[0]),
            height: Some(dims[1]),
            depth: Some(dims[2]),
            radius,
        },
    }
}

/// Look up the catalog defaults for a category.
pub fn catalog_entry(category: ObjectCategory) -> CatalogEntry {
    use ObjectCategory::*;
    match category {
        Desk => entry("Desk", "#8B4513", [2.0, 0.05, 1.0], [2.0, 0.05, 1.0], None),
        Monitor => entry("Monitor", "#1a1a2e", [0.8, 0.5, 0.05], [0.8, 0.5, 0.03], None),
        PcTower => entry("PC Tower", "#2d2d2d", [0.3, 0.6, 0.5], [0.2, 0.45, 0.4], None),
        Lamp => entry("Desk Lamp", "#f4d03f", [0.15, 0.4, 0.15], [0.15, 0.4, 0.15], None),
        Speaker => entry("Speaker", "#333333", [0.2, 0.35, 0.2], [0.15, 0.3, 0.15], None),
        Plant => entry("Plant", "#228B22", [0.2, 0.35, 0.2], [0.2, 0.35, 0.2], None),
        Keyboard => entry("Keyboard", "#404040", [0.5, 0.03, 0.18], [0.45, 0.02, 0.15], None),
        Mouse => entry("Mouse", "#303030", [0.08, 0.03, 0.12], [0.08, 0.03, 0.12], None),
        Chair => entry("Chair", "#1a1a1a", [0.6, 1.2, 0.6], [0.5, 0.6, 0.5], None),
        Shelf => entry("Shelf", "#654321", [1.0, 0.05, 0.3], [1.0, 0.03, 0.25], None),
        Mug => entry("Coffee Mug", "#ffffff", [0.08, 0.1, 0.08], [0.08, 0.1, 0.08], Some(0.04)),
        Headphones => entry("Headphones", "#1a1a1a", [0.25, 0.25, 0.1], [0.25, 0.25, 0.1], None),
        Books => entry("Books", "#8B4513", [0.15, 0.2, 0.12], [0.12, 0.15, 0.08], None),
        Notebook => entry("Notebook", "#ffffff", [0.2, 0.01, 0.15], [0.18, 0.005, 0.13], None),
        Pen => entry("Pen", "#000000", [0.01, 0.12, 0.01], [0.01, 0.12, 0.01], Some(0.003)),
        Phone => entry("Phone", "#1a1a1a", [0.06, 0.12, 0.01], [0.05, 0.1, 0.005], None),
        Tablet => entry("Tablet", "#1a1a1a", [0.15, 0.2, 0.01], [0.13, 0.18, 0.005], None),
        Webcam => entry("Webcam", "#2d2d2d", [0.08, 0.05, 0.08], [0.06, 0.03, 0.06], None),
        Microphone => entry("Microphone", "#333333", [0.05, 0.2, 0.05], [0.05, 0.2, 0.05], Some(0.02)),
        Clock => entry("Clock", "#ffffff", [0.15, 0.15, 0.02], [0.15, 0.15, 0.015], Some(0.07)),
        Poster => entry("Poster", "#1a1a2e", [0.5, 0.7, 0.01], [0.48, 0.68, 0.005], None),
        CableTray => entry("Cable Tray", "#404040", [0.8, 0.05, 0.1], [0.75, 0.03, 0.08], None),
        MonitorStand => entry("Monitor Stand", "#2d2d2d", [0.6, 0.1, 0.3], [0.55, 0.08, 0.25], None),
    }
}
