// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Initial placement of external labels

use crate::model::{Element, Waypoints};
use crate::settings;
use kurbo::{Point, Rect, Size};

/// The middle of a route: halfway between its two middle waypoints
pub fn waypoints_mid(waypoints: &Waypoints) -> Point {
    let (first, second) = mid_pair(waypoints);
    first.midpoint(second)
}

/// Default position of a flow label.
///
/// Starts at `waypoints_mid` and steps aside by the flow label indent so the
/// label does not sit on the line: upward when the middle segment is within
/// 45° of horizontal, to the right otherwise.
pub fn default_label_anchor(waypoints: &Waypoints) -> Point {
    let (first, second) = mid_pair(waypoints);
    let mut position = first.midpoint(second);

    let delta = second - first;
    if delta.y.abs() <= delta.x.abs() {
        position.y -= settings::label::FLOW_INDENT;
    } else {
        position.x += settings::label::FLOW_INDENT;
    }

    position
}

/// Mid of the external label of `element`.
///
/// Connections use `default_label_anchor`; shapes get their label centered
/// beneath them.
pub fn external_label_mid(element: &Element) -> Point {
    match element.waypoints() {
        Some(waypoints) => default_label_anchor(waypoints),
        None => {
            let bounds = element.bounds();
            Point::new(
                bounds.center().x,
                bounds.y1 + settings::label::DEFAULT_SIZE.height / 2.0,
            )
        }
    }
}

/// Bounds for the external label of `element`.
///
/// Stored label bounds keep their mid and height, widened to at least the
/// default label width. Without stored bounds the label gets the default
/// size around `external_label_mid`.
pub fn external_label_bounds(existing: Option<Rect>, element: &Element) -> Rect {
    let (mid, size) = match existing {
        Some(bounds) => (
            bounds.center(),
            Size::new(
                settings::label::DEFAULT_SIZE.width.max(bounds.width()),
                bounds.height(),
            ),
        ),
        None => (external_label_mid(element), settings::label::DEFAULT_SIZE),
    };

    Rect::from_center_size(mid, size)
}

/// Indices `n/2 - 1` and `n/2`: the two waypoints around the middle
fn mid_pair(waypoints: &Waypoints) -> (Point, Point) {
    let first = waypoints.len() / 2 - 1;
    (waypoints[first].point(), waypoints[first + 1].point())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connection, ElementKind, Shape};

    fn route(points: &[(f64, f64)]) -> Waypoints {
        Waypoints::from_points(points.iter().copied()).unwrap()
    }

    #[test]
    fn mid_of_two_points() {
        assert_eq!(waypoints_mid(&route(&[(0.0, 0.0), (100.0, 0.0)])), Point::new(50.0, 0.0));
    }

    #[test]
    fn mid_of_odd_route_uses_first_middle_segment() {
        // n = 3: indices 0 and 1
        let mid = waypoints_mid(&route(&[(0.0, 0.0), (40.0, 0.0), (40.0, 100.0)]));
        assert_eq!(mid, Point::new(20.0, 0.0));

        // n = 5: indices 1 and 2
        let mid = waypoints_mid(&route(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 30.0),
            (50.0, 30.0),
            (50.0, 60.0),
        ]));
        assert_eq!(mid, Point::new(10.0, 15.0));
    }

    #[test]
    fn mid_of_even_route_uses_center_segment() {
        let mid = waypoints_mid(&route(&[
            (0.0, 0.0),
            (0.0, 50.0),
            (80.0, 50.0),
            (80.0, 100.0),
        ]));
        assert_eq!(mid, Point::new(40.0, 50.0));
    }

    #[test]
    fn horizontal_flow_label_moves_up() {
        let anchor = default_label_anchor(&route(&[(100.0, 200.0), (300.0, 200.0)]));
        assert_eq!(anchor, Point::new(200.0, 185.0));
    }

    #[test]
    fn vertical_flow_label_moves_right() {
        let anchor = default_label_anchor(&route(&[(100.0, 200.0), (100.0, 400.0)]));
        assert_eq!(anchor, Point::new(115.0, 300.0));

        let upward = default_label_anchor(&route(&[(100.0, 400.0), (100.0, 200.0)]));
        assert_eq!(upward, Point::new(115.0, 300.0));
    }

    #[test]
    fn steep_diagonal_moves_right_flat_diagonal_moves_up() {
        let steep = default_label_anchor(&route(&[(0.0, 0.0), (10.0, 100.0)]));
        assert_eq!(steep, Point::new(20.0, 50.0));

        let flat = default_label_anchor(&route(&[(0.0, 0.0), (100.0, -10.0)]));
        assert_eq!(flat, Point::new(50.0, -20.0));
    }

    #[test]
    fn shape_label_sits_below() {
        let event = Element::from(Shape::new(
            ElementKind::Event,
            Rect::new(100.0, 100.0, 136.0, 136.0),
        ));
        assert_eq!(external_label_mid(&event), Point::new(118.0, 146.0));

        let bounds = external_label_bounds(None, &event);
        assert_eq!(bounds, Rect::new(73.0, 136.0, 163.0, 156.0));
    }

    #[test]
    fn connection_label_bounds_center_on_anchor() {
        let flow = Element::from(Connection::new(
            ElementKind::SequenceFlow,
            route(&[(100.0, 200.0), (300.0, 200.0)]),
        ));
        let bounds = external_label_bounds(None, &flow);
        assert_eq!(bounds, Rect::new(155.0, 175.0, 245.0, 195.0));
    }

    #[test]
    fn stored_bounds_are_widened_not_moved() {
        let event = Element::from(Shape::new(ElementKind::Event, Rect::new(0.0, 0.0, 36.0, 36.0)));

        let narrow = external_label_bounds(Some(Rect::new(0.0, 50.0, 40.0, 64.0)), &event);
        assert_eq!(narrow, Rect::new(-25.0, 50.0, 65.0, 64.0));

        let wide = Rect::new(0.0, 50.0, 120.0, 90.0);
        assert_eq!(external_label_bounds(Some(wide), &event), wide);
    }
}
