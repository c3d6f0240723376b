// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Connection routes.
//!
//! A route is an ordered list of waypoints; consecutive pairs form segments.
//! While the host reshapes a route it records, on each moved waypoint, the
//! coordinate it had before the gesture started (`source_point`). Comparing
//! old and new routes through that coordinate tells which waypoints survived
//! the reshape even when their index shifted.

use crate::error::{BehaviorError, Result};
use kurbo::{Line, Point, Rect};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A single routing point of a connection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    /// Position before the current reshape, when the host recorded one
    #[serde(default, alias = "original", skip_serializing_if = "Option::is_none")]
    pub source_point: Option<Point>,
}

impl Waypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            source_point: None,
        }
    }

    /// Attach the pre-reshape coordinate
    pub fn with_source(mut self, source: impl Into<Point>) -> Self {
        self.source_point = Some(source.into());
        self
    }

    /// Current position
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The position used to correlate routes: the source point if recorded,
    /// otherwise the current position
    pub fn reference_point(&self) -> Point {
        self.source_point.unwrap_or_else(|| self.point())
    }
}

impl From<Point> for Waypoint {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Waypoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A connection route with at least two waypoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Waypoint>", into = "Vec<Waypoint>")]
pub struct Waypoints(Vec<Waypoint>);

impl Waypoints {
    /// Build a route, rejecting fewer than two points
    pub fn new(points: Vec<Waypoint>) -> Result<Self> {
        if points.len() < 2 {
            return Err(BehaviorError::TooFewWaypoints(points.len()));
        }
        Ok(Self(points))
    }

    /// Build a route from plain coordinates
    pub fn from_points<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Waypoint>,
    {
        Self::new(points.into_iter().map(Into::into).collect())
    }

    /// Number of segments (always at least one)
    pub fn segment_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Segment `index` through the reference (pre-reshape) positions
    pub fn reference_segment(&self, index: usize) -> Option<Line> {
        let start = self.0.get(index)?;
        let end = self.0.get(index + 1)?;
        Some(Line::new(start.reference_point(), end.reference_point()))
    }

    /// Iterate over all segments through the current positions
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.0
            .windows(2)
            .map(|pair| Line::new(pair[0].point(), pair[1].point()))
    }

    /// Axis-aligned bounds of the route
    pub fn bounds(&self) -> Rect {
        let first = self.0[0].point();
        self.0
            .iter()
            .skip(1)
            .fold(Rect::from_points(first, first), |rect, wp| {
                rect.union_pt(wp.point())
            })
    }
}

impl Deref for Waypoints {
    type Target = [Waypoint];

    fn deref(&self) -> &[Waypoint] {
        &self.0
    }
}

impl TryFrom<Vec<Waypoint>> for Waypoints {
    type Error = BehaviorError;

    fn try_from(points: Vec<Waypoint>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<Waypoints> for Vec<Waypoint> {
    fn from(waypoints: Waypoints) -> Self {
        waypoints.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_routes() {
        assert!(matches!(
            Waypoints::new(vec![]),
            Err(BehaviorError::TooFewWaypoints(0))
        ));
        assert!(matches!(
            Waypoints::from_points([(1.0, 1.0)]),
            Err(BehaviorError::TooFewWaypoints(1))
        ));
        assert!(Waypoints::from_points([(0.0, 0.0), (1.0, 0.0)]).is_ok());
    }

    #[test]
    fn segments() {
        let route = Waypoints::from_points([(0.0, 0.0), (10.0, 0.0), (10.0, 5.0)]).unwrap();
        assert_eq!(route.segment_count(), 2);
        assert_eq!(route.segments().nth(1), Some(Line::new((10.0, 0.0), (10.0, 5.0))));
        assert_eq!(route.reference_segment(2), None);
        assert_eq!(route.segments().count(), 2);
    }

    #[test]
    fn reference_point_prefers_source() {
        let moved = Waypoint::new(5.0, 5.0).with_source((1.0, 2.0));
        assert_eq!(moved.point(), Point::new(5.0, 5.0));
        assert_eq!(moved.reference_point(), Point::new(1.0, 2.0));
        assert_eq!(Waypoint::new(3.0, 4.0).reference_point(), Point::new(3.0, 4.0));
    }

    #[test]
    fn bounds_cover_all_points() {
        let route = Waypoints::from_points([(5.0, 10.0), (-5.0, 10.0), (-5.0, 40.0)]).unwrap();
        assert_eq!(route.bounds(), Rect::new(-5.0, 10.0, 5.0, 40.0));
    }

    #[test]
    fn deserializes_host_waypoints() {
        let json = r#"[
            { "x": 0, "y": 0 },
            { "x": 100, "y": 0, "original": { "x": 90, "y": 0 } }
        ]"#;
        let route: Waypoints = serde_json::from_str(json).unwrap();
        assert_eq!(route.len(), 2);
        assert_eq!(route[1].source_point, Some(Point::new(90.0, 0.0)));

        let short = serde_json::from_str::<Waypoints>(r#"[{ "x": 0, "y": 0 }]"#);
        assert!(short.is_err());
    }
}
