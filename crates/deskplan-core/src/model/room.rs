use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Axis-aligned room centered on the origin in x/z with the floor at y = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            width: 4.0,
            depth: 4.0,
            height: 3.0,
        }
    }
}

impl Room {
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        for (axis, value) in [
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidRoom {
                    reason: format!("{} must be positive, got {}", axis, value),
                });
            }
        }
        Ok(())
    }

    /// z coordinate of the back wall.
    pub fn back_wall(&self) -> f64 {
        -self.depth / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_room() {
        let room = Room::default();
        assert_eq!(room.width, 4.0);
        assert_eq!(room.back_wall(), -2.0);
        assert!(room.validate().is_ok());
    }

    #[test]
    fn test_invalid_room() {
        assert!(Room::new(0.0, 4.0, 3.0).validate().is_err());
        assert!(Room::new(4.0, f64::NAN, 3.0).validate().is_err());
    }
}
