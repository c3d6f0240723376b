// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Seams to the host diagram editor.
//!
//! The behaviors never touch the model directly. They read from a `Canvas`
//! and an `ElementFactory` and write through `Modeling`, whose commands the
//! host executes atomically (and makes undoable).

use crate::error::HostError;
use crate::model::{Element, ElementKind};
use kurbo::{Rect, Size};

/// Read access to the rendered diagram
pub trait Canvas {
    /// Current zoom level (1.0 = 100%)
    fn zoom(&self) -> f64;

    /// Screen-space bounds for diagram-space `bounds`
    fn absolute_bbox(&self, bounds: Rect) -> Rect;
}

/// Sizes the host uses for newly created elements
pub trait ElementFactory {
    fn default_size(&self, kind: ElementKind) -> Size;
}

/// Transactional model changes
pub trait Modeling {
    /// Resize a shape to `bounds`
    fn resize_shape(&mut self, target: &Element, bounds: Rect) -> Result<(), HostError>;

    /// Resize a pool or lane, redistributing its lanes
    fn resize_lane(&mut self, target: &Element, bounds: Rect) -> Result<(), HostError>;

    /// Set the label text and, optionally, new label bounds as one command
    fn update_label(
        &mut self,
        element: &Element,
        new_text: &str,
        new_bounds: Option<Rect>,
    ) -> Result<(), HostError>;
}

impl<T: Canvas + ?Sized> Canvas for &T {
    fn zoom(&self) -> f64 {
        (**self).zoom()
    }

    fn absolute_bbox(&self, bounds: Rect) -> Rect {
        (**self).absolute_bbox(bounds)
    }
}

impl<T: ElementFactory + ?Sized> ElementFactory for &T {
    fn default_size(&self, kind: ElementKind) -> Size {
        (**self).default_size(kind)
    }
}

/// Scripted host collaborators for tests
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use kurbo::{Affine, Vec2};

    /// Canvas with a plain scale + translate viewbox
    pub struct TestCanvas {
        pub zoom: f64,
        pub offset: Vec2,
    }

    impl TestCanvas {
        pub fn at_zoom(zoom: f64) -> Self {
            Self {
                zoom,
                offset: Vec2::ZERO,
            }
        }
    }

    impl Canvas for TestCanvas {
        fn zoom(&self) -> f64 {
            self.zoom
        }

        fn absolute_bbox(&self, bounds: Rect) -> Rect {
            (Affine::translate(self.offset) * Affine::scale(self.zoom)).transform_rect_bbox(bounds)
        }
    }

    /// bpmn-js default sizes
    pub struct TestFactory;

    impl ElementFactory for TestFactory {
        fn default_size(&self, kind: ElementKind) -> Size {
            match kind {
                ElementKind::TextAnnotation => Size::new(100.0, 30.0),
                ElementKind::Task | ElementKind::SubProcess { expanded: false } => {
                    Size::new(100.0, 80.0)
                }
                ElementKind::SubProcess { expanded: true } => Size::new(350.0, 200.0),
                ElementKind::Participant { .. } => Size::new(600.0, 250.0),
                ElementKind::Lane => Size::new(400.0, 100.0),
                ElementKind::Gateway => Size::new(50.0, 50.0),
                _ => Size::new(36.0, 36.0),
            }
        }
    }

    /// One recorded modeling command
    #[derive(Debug, Clone, PartialEq)]
    pub enum Command {
        ResizeShape(Rect),
        ResizeLane(Rect),
        UpdateLabel {
            text: String,
            bounds: Option<Rect>,
        },
    }

    /// Records every command; fails all of them when `reject` is set
    #[derive(Default)]
    pub struct RecordingModeling {
        pub commands: Vec<Command>,
        pub reject: bool,
    }

    impl RecordingModeling {
        fn record(&mut self, command: Command) -> Result<(), HostError> {
            if self.reject {
                return Err("command rejected".into());
            }
            self.commands.push(command);
            Ok(())
        }
    }

    impl Modeling for RecordingModeling {
        fn resize_shape(&mut self, _target: &Element, bounds: Rect) -> Result<(), HostError> {
            self.record(Command::ResizeShape(bounds))
        }

        fn resize_lane(&mut self, _target: &Element, bounds: Rect) -> Result<(), HostError> {
            self.record(Command::ResizeLane(bounds))
        }

        fn update_label(
            &mut self,
            _element: &Element,
            new_text: &str,
            new_bounds: Option<Rect>,
        ) -> Result<(), HostError> {
            self.record(Command::UpdateLabel {
                text: new_text.to_string(),
                bounds: new_bounds,
            })
        }
    }

    /// Route `tracing` output to the test harness
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}
