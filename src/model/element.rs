// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Diagram elements as seen by the behaviors.
//!
//! This is a deliberately small view of the host model: the BPMN kind of an
//! element, its geometry, its label text and its detached label. The host
//! owns the real model; these values are snapshots handed in for a single
//! decision.

use super::entity_id::ElementId;
use super::waypoints::Waypoints;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

// ============================================================================
// ELEMENT KINDS
// ============================================================================

/// BPMN element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ElementKind {
    Task,
    SubProcess { expanded: bool },
    /// A pool; collapsed pools are drawn as a bare band
    Participant { expanded: bool },
    Lane,
    TextAnnotation,
    Event,
    Gateway,
    DataStoreReference,
    DataObjectReference,
    SequenceFlow,
    MessageFlow,
    Association,
}

/// Which business attribute holds an element's label text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAttribute {
    Name,
    Text,
}

impl ElementKind {
    /// Elements of this kind carry their label outside their own bounds
    pub fn has_external_label(self) -> bool {
        match self {
            ElementKind::Event
            | ElementKind::Gateway
            | ElementKind::DataStoreReference
            | ElementKind::DataObjectReference
            | ElementKind::SequenceFlow
            | ElementKind::MessageFlow => true,
            ElementKind::Task
            | ElementKind::SubProcess { .. }
            | ElementKind::Participant { .. }
            | ElementKind::Lane
            | ElementKind::TextAnnotation
            | ElementKind::Association => false,
        }
    }

    /// The attribute holding the label text, `None` if the kind has no label
    pub fn label_attribute(self) -> Option<LabelAttribute> {
        match self {
            ElementKind::TextAnnotation => Some(LabelAttribute::Text),
            ElementKind::Association => None,
            ElementKind::Task
            | ElementKind::SubProcess { .. }
            | ElementKind::Participant { .. }
            | ElementKind::Lane
            | ElementKind::Event
            | ElementKind::Gateway
            | ElementKind::DataStoreReference
            | ElementKind::DataObjectReference
            | ElementKind::SequenceFlow
            | ElementKind::MessageFlow => Some(LabelAttribute::Name),
        }
    }

    /// Kinds that contain other shapes and may grow to fit them
    pub fn is_container(self) -> bool {
        matches!(
            self,
            ElementKind::Participant { .. } | ElementKind::Lane | ElementKind::SubProcess { .. }
        )
    }
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A detached label, positioned independently of its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: ElementId,
    /// The shape or connection this label belongs to
    pub target: ElementId,
    /// Kind of the owner; a label shares its owner's business object
    pub target_kind: ElementKind,
    pub bounds: Rect,
    #[serde(default)]
    pub text: Option<String>,
}

impl Label {
    pub fn new(target: ElementId, target_kind: ElementKind, bounds: Rect) -> Self {
        Self {
            id: ElementId::next(),
            target,
            target_kind,
            bounds,
            text: None,
        }
    }

    /// Center of the label box
    pub fn mid(&self) -> Point {
        self.bounds.center()
    }

    /// Bounds after translating the label by `delta`
    pub fn moved_by(&self, delta: Vec2) -> Rect {
        self.bounds + delta
    }
}

/// A shape (activity, event, pool, annotation, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ElementId,
    pub kind: ElementKind,
    pub bounds: Rect,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<Label>,
}

impl Shape {
    pub fn new(kind: ElementKind, bounds: Rect) -> Self {
        Self {
            id: ElementId::next(),
            kind,
            bounds,
            name: None,
            label: None,
        }
    }
}

/// A routed connection (sequence flow, message flow, association)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ElementId,
    pub kind: ElementKind,
    pub waypoints: Waypoints,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<Label>,
}

impl Connection {
    pub fn new(kind: ElementKind, waypoints: Waypoints) -> Self {
        Self {
            id: ElementId::next(),
            kind,
            waypoints,
            name: None,
            label: None,
        }
    }
}

/// Any element the behaviors can be asked about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    Shape(Shape),
    Connection(Connection),
    Label(Label),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Shape(shape) => shape.id,
            Element::Connection(connection) => connection.id,
            Element::Label(label) => label.id,
        }
    }

    /// BPMN kind; a label reports its owner's kind
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Shape(shape) => shape.kind,
            Element::Connection(connection) => connection.kind,
            Element::Label(label) => label.target_kind,
        }
    }

    /// Diagram-space bounds (route bounds for connections)
    pub fn bounds(&self) -> Rect {
        match self {
            Element::Shape(shape) => shape.bounds,
            Element::Connection(connection) => connection.waypoints.bounds(),
            Element::Label(label) => label.bounds,
        }
    }

    pub fn waypoints(&self) -> Option<&Waypoints> {
        match self {
            Element::Connection(connection) => Some(&connection.waypoints),
            Element::Shape(_) | Element::Label(_) => None,
        }
    }

    /// The detached label owned by this element
    pub fn label(&self) -> Option<&Label> {
        match self {
            Element::Shape(shape) => shape.label.as_ref(),
            Element::Connection(connection) => connection.label.as_ref(),
            Element::Label(_) => None,
        }
    }

    pub fn is_label(&self) -> bool {
        matches!(self, Element::Label(_))
    }

    /// Current label text.
    ///
    /// `None` means the element has no label at all; an unnamed element whose
    /// kind supports a label yields an empty string.
    pub fn label_text(&self) -> Option<&str> {
        self.kind().label_attribute()?;
        let text = match self {
            Element::Shape(shape) => shape.name.as_deref(),
            Element::Connection(connection) => connection.name.as_deref(),
            Element::Label(label) => label.text.as_deref(),
        };
        Some(text.unwrap_or(""))
    }
}

impl From<Shape> for Element {
    fn from(shape: Shape) -> Self {
        Element::Shape(shape)
    }
}

impl From<Connection> for Element {
    fn from(connection: Connection) -> Self {
        Element::Connection(connection)
    }
}

impl From<Label> for Element {
    fn from(label: Label) -> Self {
        Element::Label(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_label_kinds() {
        assert!(ElementKind::Event.has_external_label());
        assert!(ElementKind::Gateway.has_external_label());
        assert!(ElementKind::DataStoreReference.has_external_label());
        assert!(ElementKind::DataObjectReference.has_external_label());
        assert!(ElementKind::SequenceFlow.has_external_label());
        assert!(ElementKind::MessageFlow.has_external_label());

        assert!(!ElementKind::Task.has_external_label());
        assert!(!ElementKind::TextAnnotation.has_external_label());
        assert!(!ElementKind::Association.has_external_label());
    }

    #[test]
    fn containers() {
        assert!(ElementKind::Lane.is_container());
        assert!(ElementKind::Participant { expanded: false }.is_container());
        assert!(ElementKind::SubProcess { expanded: true }.is_container());
        assert!(!ElementKind::Task.is_container());
        assert!(!ElementKind::TextAnnotation.is_container());
    }

    #[test]
    fn label_text_defaults_to_empty() {
        let task = Element::from(Shape::new(ElementKind::Task, Rect::new(0.0, 0.0, 100.0, 80.0)));
        assert_eq!(task.label_text(), Some(""));

        let mut named = Shape::new(ElementKind::Task, Rect::new(0.0, 0.0, 100.0, 80.0));
        named.name = Some("Review".to_string());
        assert_eq!(Element::from(named).label_text(), Some("Review"));
    }

    #[test]
    fn associations_have_no_label() {
        let route = Waypoints::from_points([(0.0, 0.0), (10.0, 10.0)]).unwrap();
        let association = Element::from(Connection::new(ElementKind::Association, route));
        assert_eq!(association.label_text(), None);
    }

    #[test]
    fn label_reports_owner_kind() {
        let owner = Shape::new(ElementKind::Event, Rect::new(0.0, 0.0, 36.0, 36.0));
        let label = Label::new(owner.id, owner.kind, Rect::new(-27.0, 46.0, 63.0, 66.0));
        let element = Element::from(label);

        assert_eq!(element.kind(), ElementKind::Event);
        assert!(element.is_label());
        assert!(matches!(&element, Element::Label(label) if label.target == owner.id));
        assert_eq!(element.label(), None);
    }

    #[test]
    fn label_mid_and_move() {
        let label = Label::new(
            ElementId::next(),
            ElementKind::SequenceFlow,
            Rect::new(10.0, 20.0, 100.0, 40.0),
        );
        assert_eq!(label.mid(), Point::new(55.0, 30.0));
        assert_eq!(
            label.moved_by(Vec2::new(5.0, -5.0)),
            Rect::new(15.0, 15.0, 105.0, 35.0)
        );
    }
}
