// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Planar geometry helpers: point/line distances and perpendicular feet.
//!
//! All functions are pure. A `Line` is treated as the infinite line through
//! its two points. A zero-length line has no direction; projecting
//! onto it divides by zero and yields NaN coordinates. Callers check
//! `is_degenerate` first.

use kurbo::{Line, Point, Vec2};

/// Solve `a + r * b = c` for the real parameter `r` in the least-squares
/// sense, where `b` is the line direction.
fn solve_lambda(a: Point, b: Vec2, c: Point) -> f64 {
    let n = (a - c).dot(b);
    let l = b.dot(b);
    -n / l
}

/// Position of the perpendicular foot of `point` on `line`
pub fn perpendicular_foot(point: Point, line: Line) -> Point {
    let direction = line.p1 - line.p0;
    let r = solve_lambda(line.p0, direction, point);
    line.p0 + direction * r
}

/// Distance between a point and the infinite line through `line`
pub fn distance_point_to_line(point: Point, line: Line) -> f64 {
    distance_point_to_point(point, perpendicular_foot(point, line))
}

/// Euclidean distance between two points
pub fn distance_point_to_point(p1: Point, p2: Point) -> f64 {
    (p1 - p2).hypot()
}

/// Whether both ends of `line` coincide
pub fn is_degenerate(line: Line) -> bool {
    line.p0 == line.p1
}
