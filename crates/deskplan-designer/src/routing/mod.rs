//! # Cable Routing
//!
//! Obstacle-aware polyline routing between the anchor points of two placed
//! objects.
//!
//! The router tries the straight segment first. When another object's
//! bounding box blocks it, a small set of candidate routes is generated
//! (under the desk, low with side steps, two L-shapes at mid height) and
//! the shortest candidate whose every segment is clear wins. Routing never
//! fails: with no clear candidate the direct segment is returned anyway.

mod anchor;
mod sag;

pub use anchor::anchor_point;
pub use sag::{apply_sag, SagConfig};

use deskplan_core::geometry::{bounding_box_of, path_length, segment_intersects_box};
use deskplan_core::{ObjectId, PlacedObject, Vec3};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Clearances used when building candidate routes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Gap between the desk's underside and the under-desk route.
    pub desk_clearance: f64,
    /// How far the low route runs below the lower anchor.
    pub low_route_drop: f64,
    /// Margin added around an obstacle when side-stepping it.
    pub sidestep_clearance: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            desk_clearance: 0.1,
            low_route_drop: 0.3,
            sidestep_clearance: 0.1,
        }
    }
}

/// Candidate route kinds, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Direct,
    UnderDesk,
    LowSidestep,
    LxThenZ,
    LzThenX,
}

/// A routed cable path and the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub kind: RouteKind,
    pub points: Vec<Point3<f64>>,
}

impl Route {
    pub fn length(&self) -> f64 {
        path_length(&self.points)
    }

    /// Points as plain arrays, the shape stored on a cable.
    pub fn to_array(&self) -> Vec<Vec3> {
        path_to_array(&self.points)
    }
}

/// Cable router with configurable clearances.
#[derive(Debug, Clone, Default)]
pub struct CableRouter {
    config: RoutingConfig,
}

impl CableRouter {
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Route a cable from `from` to `to` around every other object in
    /// `objects`. When `desk` is given, an under-desk candidate is tried
    /// and the desk itself does not block that candidate.
    pub fn find_path(
        &self,
        from: &PlacedObject,
        to: &PlacedObject,
        objects: &[PlacedObject],
        desk: Option<&PlacedObject>,
    ) -> Vec<Point3<f64>> {
        self.route(from, to, objects, desk).points
    }

    /// Like [`find_path`](Self::find_path), also reporting which strategy
    /// won.
    pub fn route(
        &self,
        from: &PlacedObject,
        to: &PlacedObject,
        objects: &[PlacedObject],
        desk: Option<&PlacedObject>,
    ) -> Route {
        let start = anchor_point(from);
        let end = anchor_point(to);
        let endpoints = [&from.id, &to.id];

        if first_collision(&start, &end, objects, &endpoints).is_none() {
            return Route {
                kind: RouteKind::Direct,
                points: vec![start, end],
            };
        }

        let mut best: Option<(f64, Route)> = None;
        for candidate in self.candidates(start, end, objects, &endpoints, desk) {
            let exclude: Vec<&ObjectId> = match (candidate.kind, desk) {
                (RouteKind::UnderDesk, Some(desk)) => vec![&from.id, &to.id, &desk.id],
                _ => endpoints.to_vec(),
            };
            if !is_clear(&candidate.points, objects, &exclude) {
                tracing::trace!("Route {:?} rejected", candidate.kind);
                continue;
            }
            let length = candidate.length();
            // strictly shorter only, so earlier candidates win ties
            if best.as_ref().map_or(true, |(best_len, _)| length < *best_len) {
                best = Some((length, candidate));
            }
        }

        match best {
            Some((length, route)) => {
                tracing::debug!(
                    "Routed {} -> {} via {:?} ({} points, {:.3} m)",
                    from.id,
                    to.id,
                    route.kind,
                    route.points.len(),
                    length
                );
                route
            }
            None => {
                tracing::debug!(
                    "No clear route {} -> {}, using direct segment",
                    from.id,
                    to.id
                );
                Route {
                    kind: RouteKind::Direct,
                    points: vec![start, end],
                }
            }
        }
    }

    fn candidates(
        &self,
        start: Point3<f64>,
        end: Point3<f64>,
        objects: &[PlacedObject],
        endpoints: &[&ObjectId],
        desk: Option<&PlacedObject>,
    ) -> Vec<Route> {
        let mut routes = Vec::with_capacity(4);

        if let Some(desk) = desk {
            let underside = desk.position[1] - desk.size()[1] / 2.0 - self.config.desk_clearance;
            routes.push(Route {
                kind: RouteKind::UnderDesk,
                points: vec![
                    start,
                    Point3::new(start.x, underside, start.z),
                    Point3::new(end.x, underside, end.z),
                    end,
                ],
            });
        }

        routes.push(Route {
            kind: RouteKind::LowSidestep,
            points: self.low_route(start, end, objects, endpoints),
        });

        let mid_y = (start.y + end.y) / 2.0;
        routes.push(Route {
            kind: RouteKind::LxThenZ,
            points: vec![
                start,
                Point3::new(start.x, mid_y, start.z),
                Point3::new(end.x, mid_y, start.z),
                Point3::new(end.x, mid_y, end.z),
                end,
            ],
        });
        routes.push(Route {
            kind: RouteKind::LzThenX,
            points: vec![
                start,
                Point3::new(start.x, mid_y, start.z),
                Point3::new(start.x, mid_y, end.z),
                Point3::new(end.x, mid_y, end.z),
                end,
            ],
        });

        routes
    }

    /// Route below the lower anchor with one forward side-step pass.
    ///
    /// Each blocked segment gets a single waypoint past the obstacle side
    /// nearest the segment start. The segment leaving an inserted waypoint
    /// is not scanned again, so dense scenes may keep residual collisions;
    /// those are caught by the per-segment validation of the candidate.
    fn low_route(
        &self,
        start: Point3<f64>,
        end: Point3<f64>,
        objects: &[PlacedObject],
        endpoints: &[&ObjectId],
    ) -> Vec<Point3<f64>> {
        let level = start.y.min(end.y) - self.config.low_route_drop;
        let margin = self.config.sidestep_clearance;
        let mut path = vec![
            start,
            Point3::new(start.x, level, start.z),
            Point3::new(end.x, level, end.z),
            end,
        ];

        let mut i = 0;
        while i + 1 < path.len() {
            let (a, b) = (path[i], path[i + 1]);
            let Some(obstacle) = first_collision(&a, &b, objects, endpoints) else {
                i += 1;
                continue;
            };

            let bbox = bounding_box_of(obstacle);
            let left = (a.x - bbox.min_x).abs();
            let right = (a.x - bbox.max_x).abs();
            let front = (a.z - bbox.max_z).abs();
            let back = (a.z - bbox.min_z).abs();
            let nearest = left.min(right).min(front).min(back);

            let waypoint = if nearest == left {
                Point3::new(bbox.min_x - margin, level, (a.z + b.z) / 2.0)
            } else if nearest == right {
                Point3::new(bbox.max_x + margin, level, (a.z + b.z) / 2.0)
            } else if nearest == front {
                Point3::new((a.x + b.x) / 2.0, level, bbox.max_z + margin)
            } else {
                Point3::new((a.x + b.x) / 2.0, level, bbox.min_z - margin)
            };

            tracing::trace!("Side-stepping {} at segment {}", obstacle.id, i);
            path.insert(i + 1, waypoint);
            i += 2;
        }

        path
    }
}

/// Route with the default clearances.
pub fn find_path(
    from: &PlacedObject,
    to: &PlacedObject,
    objects: &[PlacedObject],
    desk: Option<&PlacedObject>,
) -> Vec<Point3<f64>> {
    CableRouter::default().find_path(from, to, objects, desk)
}

/// Route with the default clearances, returning plain coordinate arrays.
pub fn compute_cable_path(
    from: &PlacedObject,
    to: &PlacedObject,
    objects: &[PlacedObject],
    desk: Option<&PlacedObject>,
) -> Vec<Vec3> {
    path_to_array(&find_path(from, to, objects, desk))
}

pub fn path_to_array(points: &[Point3<f64>]) -> Vec<Vec3> {
    points.iter().map(|p| [p.x, p.y, p.z]).collect()
}

pub fn path_from_array(points: &[Vec3]) -> Vec<Point3<f64>> {
    points.iter().map(|&p| Point3::from(p)).collect()
}

/// First object, in collection order, whose box the segment touches.
pub fn first_collision<'a>(
    start: &Point3<f64>,
    end: &Point3<f64>,
    objects: &'a [PlacedObject],
    exclude: &[&ObjectId],
) -> Option<&'a PlacedObject> {
    objects
        .iter()
        .filter(|o| !exclude.contains(&&o.id))
        .find(|o| segment_intersects_box(start, end, &bounding_box_of(o)))
}

/// Whether every segment of `points` avoids every non-excluded object.
pub fn is_clear(points: &[Point3<f64>], objects: &[PlacedObject], exclude: &[&ObjectId]) -> bool {
    points
        .windows(2)
        .all(|seg| first_collision(&seg[0], &seg[1], objects, exclude).is_none())
}
