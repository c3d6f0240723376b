// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Direct editing session - at most one in-place label editor at a time.
//!
//! A session goes Idle → Active when a provider accepts an element, and back
//! to Idle when it is completed (changes committed through the provider) or
//! cancelled (changes dropped). Any model change while an editor is open
//! cancels it; there is no merging of concurrent edits.

use super::edit_types::{EditOutcome, EditTrigger, PointerEnvironment};
use super::provider::{Activation, LabelEditingProvider};
use crate::error::Result;
use crate::host::{Canvas, Modeling};
use crate::model::{Element, ElementKind};
use kurbo::Size;

/// Whether an editor is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Active,
}

/// The open editor
#[derive(Debug, Clone)]
struct ActiveEdit {
    /// Index of the provider that accepted the element
    provider: usize,
    element: Element,
    activation: Activation,
    text: String,
    size: Size,
}

/// Direct editing controller holding the registered providers
#[derive(Debug, Clone)]
pub struct DirectEditing<P> {
    providers: Vec<P>,
    environment: PointerEnvironment,
    active: Option<ActiveEdit>,
}

impl<P: LabelEditingProvider> DirectEditing<P> {
    pub fn new(environment: PointerEnvironment) -> Self {
        Self {
            providers: Vec::new(),
            environment,
            active: None,
        }
    }

    /// Add a provider; earlier providers get the first chance to accept
    pub fn register_provider(&mut self, provider: P) {
        self.providers.push(provider);
    }

    pub fn state(&self) -> EditState {
        if self.active.is_some() {
            EditState::Active
        } else {
            EditState::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Element being edited
    pub fn active_element(&self) -> Option<&Element> {
        self.active.as_ref().map(|edit| &edit.element)
    }

    /// Placement and options of the open editor
    pub fn activation(&self) -> Option<&Activation> {
        self.active.as_ref().map(|edit| &edit.activation)
    }

    /// Current (possibly edited) text
    pub fn text(&self) -> Option<&str> {
        self.active.as_ref().map(|edit| edit.text.as_str())
    }

    /// Open an editor on `element`.
    ///
    /// A session that is already open is cancelled first. Returns `false`
    /// when no provider accepts the element.
    pub fn activate<C: Canvas + ?Sized>(&mut self, canvas: &C, element: &Element) -> bool {
        if self.active.is_some() {
            self.cancel();
        }

        let accepted = self
            .providers
            .iter()
            .enumerate()
            .find_map(|(index, provider)| {
                provider
                    .activate(canvas, element)
                    .map(|activation| (index, activation))
            });

        let Some((provider, activation)) = accepted else {
            tracing::debug!("no label editing provider for {:?}", element.id());
            return false;
        };

        self.active = Some(ActiveEdit {
            provider,
            element: element.clone(),
            text: activation.text.clone(),
            size: activation.bounds.size(),
            activation,
        });
        true
    }

    /// Replace the editor text
    pub fn set_text(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.active.as_mut() {
            edit.text = text.into();
        }
    }

    /// Record the editor's new size (autosizing or user resize), in the
    /// same units as the activation box
    pub fn resize_box(&mut self, size: Size) {
        if let Some(edit) = self.active.as_mut() {
            edit.size = size;
        }
    }

    /// Close the editor, committing text and size if either changed.
    ///
    /// The session is closed even when the host rejects the update.
    /// Returns `None` if no editor was open.
    pub fn complete<M: Modeling + ?Sized>(
        &mut self,
        modeling: &mut M,
    ) -> Result<Option<EditOutcome>> {
        let Some(edit) = self.active.take() else {
            return Ok(None);
        };

        let changed =
            edit.text != edit.activation.text || edit.size != edit.activation.bounds.size();
        if !changed {
            return Ok(Some(EditOutcome::Unchanged));
        }

        let model_size = edit.activation.model_size(edit.size);
        self.providers[edit.provider].update(modeling, &edit.element, &edit.text, model_size)?;
        Ok(Some(EditOutcome::Committed))
    }

    /// Close the editor and drop its changes
    pub fn cancel(&mut self) -> Option<EditOutcome> {
        let edit = self.active.take()?;
        tracing::debug!("cancelled label editing on {:?}", edit.element.id());
        Some(EditOutcome::Cancelled)
    }

    /// React to a host event
    pub fn handle<C, M>(
        &mut self,
        trigger: EditTrigger<'_>,
        canvas: &C,
        modeling: &mut M,
    ) -> Result<Option<EditOutcome>>
    where
        C: Canvas + ?Sized,
        M: Modeling + ?Sized,
    {
        match trigger {
            EditTrigger::DoubleClick(element) => {
                self.activate(canvas, element);
                Ok(None)
            }
            EditTrigger::MouseDown | EditTrigger::DragInit | EditTrigger::ViewboxChanged => {
                self.complete(modeling)
            }
            EditTrigger::CommandStackChanged => Ok(self.cancel()),
            EditTrigger::CreateEnd {
                element,
                can_execute,
            } => {
                if can_execute
                    && self.environment == PointerEnvironment::Desktop
                    && edits_on_create(element.kind())
                {
                    self.activate(canvas, element);
                }
                Ok(None)
            }
        }
    }
}

impl<P: LabelEditingProvider> Default for DirectEditing<P> {
    fn default() -> Self {
        Self::new(PointerEnvironment::default())
    }
}

/// Kinds that open an editor right after being created
fn edits_on_create(kind: ElementKind) -> bool {
    matches!(
        kind,
        ElementKind::Task | ElementKind::TextAnnotation | ElementKind::SubProcess { expanded: false }
    )
}
