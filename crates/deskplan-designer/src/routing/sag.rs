//! Gravity sag profile for routed cables.
//!
//! A routed path is a taut polyline. For display, each segment with enough
//! horizontal span gets one extra midpoint pulled down by a parabolic sag
//! estimate.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Sag parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SagConfig {
    pub gravity: f64,
    /// Resistance to sagging in [0, 1]; 1 keeps the cable straight.
    pub stiffness: f64,
    /// Segments with a shorter horizontal span are left straight.
    pub min_span: f64,
}

impl Default for SagConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            stiffness: 0.3,
            min_span: 0.1,
        }
    }
}

impl SagConfig {
    fn sag_for_span(&self, span: f64) -> f64 {
        span * span * self.gravity * (1.0 - self.stiffness) / 8.0
    }
}

/// Insert a sagging midpoint into every long enough segment of `path`.
///
/// All points of `path` are kept in order. On a descending segment the sag
/// is measured from the segment midpoint and capped at half the vertical
/// drop; on level or rising segments it is measured from the lower end.
pub fn apply_sag(path: &[Point3<f64>], config: &SagConfig) -> Vec<Point3<f64>> {
    let mut sagged = Vec::with_capacity(path.len() * 2);

    for (i, start) in path.iter().enumerate() {
        sagged.push(*start);
        let Some(end) = path.get(i + 1) else {
            break;
        };

        let span = ((end.x - start.x).powi(2) + (end.z - start.z).powi(2)).sqrt();
        if span <= config.min_span {
            continue;
        }

        let mid_x = (start.x + end.x) / 2.0;
        let mid_z = (start.z + end.z) / 2.0;
        let sag = config.sag_for_span(span);
        let y = if end.y < start.y {
            let drop = start.y - end.y;
            (start.y + end.y) / 2.0 - sag.min(drop * 0.5)
        } else {
            start.y.min(end.y) - sag
        };
        sagged.push(Point3::new(mid_x, y, mid_z));
    }

    sagged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_segments_untouched() {
        let path = [Point3::new(0.0, 1.0, 0.0), Point3::new(0.05, 0.5, 0.0)];
        assert_eq!(apply_sag(&path, &SagConfig::default()), path.to_vec());
    }

    #[test]
    fn test_level_segment_sags_below() {
        let path = [Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 0.0)];
        let sagged = apply_sag(&path, &SagConfig::default());
        assert_eq!(sagged.len(), 3);
        let expected = 1.0 - 9.8 * 0.7 / 8.0;
        assert!((sagged[1].y - expected).abs() < 1e-12);
        assert_eq!(sagged[1].x, 0.5);
    }

    #[test]
    fn test_descending_sag_capped() {
        let path = [Point3::new(0.0, 1.0, 0.0), Point3::new(2.0, 0.8, 0.0)];
        let sagged = apply_sag(&path, &SagConfig::default());
        // half of the 0.2 drop, measured from the midpoint height 0.9
        assert!((sagged[1].y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_stiff_cable_stays_straight() {
        let config = SagConfig {
            stiffness: 1.0,
            ..Default::default()
        };
        let path = [Point3::new(0.0, 1.0, 0.0), Point3::new(0.0, 1.0, 1.0)];
        let sagged = apply_sag(&path, &config);
        assert_eq!(sagged[1], Point3::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn test_empty_and_single_point() {
        let config = SagConfig::default();
        assert!(apply_sag(&[], &config).is_empty());
        let one = [Point3::new(1.0, 2.0, 3.0)];
        assert_eq!(apply_sag(&one, &config), one.to_vec());
    }
}
