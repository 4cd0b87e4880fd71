//! Native validity reporting.
//!
//! Platforms with built-in constraint validation expose a custom validity
//! message per element plus a "report" call that surfaces it. The engine
//! mirrors every recorded failure into that channel so a UI can rely on
//! either the outcome or the platform for display.

use std::fmt;

use parking_lot::Mutex;

use crate::field::InputElement;
use crate::foundation::Message;

/// Message sent to clear an element's custom validity.
pub const CLEAR: &str = "";

/// Sink for the platform's native validity channel.
pub trait ValidityReporter: Send + Sync + fmt::Debug {
    /// Sets the element's custom validity message; [`CLEAR`] marks it valid.
    fn set_custom_validity(&self, element: &InputElement, message: &str);

    /// Asks the platform to surface the element's validity state.
    fn report_validity(&self, element: &InputElement);
}

/// Reporter that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ValidityReporter for NoopReporter {
    fn set_custom_validity(&self, _element: &InputElement, _message: &str) {}

    fn report_validity(&self, _element: &InputElement) {}
}

// ============================================================================
// RECORDING REPORTER
// ============================================================================

/// A call received by a [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidityEvent {
    /// `set_custom_validity(element, message)`
    SetCustomValidity {
        /// Element id.
        element: String,
        /// Message, [`CLEAR`] for valid.
        message: String,
    },
    /// `report_validity(element)`
    ReportValidity {
        /// Element id.
        element: String,
    },
}

/// Reporter that keeps every call, for headless hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ValidityEvent>>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all calls so far.
    #[must_use]
    pub fn events(&self) -> Vec<ValidityEvent> {
        self.events.lock().clone()
    }

    /// The messages passed to `set_custom_validity`, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ValidityEvent::SetCustomValidity { message, .. } => Some(message.clone()),
                ValidityEvent::ReportValidity { .. } => None,
            })
            .collect()
    }

    /// How many times the clear signal was sent.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.messages().iter().filter(|m| m.as_str() == CLEAR).count()
    }

    /// Drains the recorded calls.
    pub fn take(&self) -> Vec<ValidityEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl ValidityReporter for RecordingReporter {
    fn set_custom_validity(&self, element: &InputElement, message: &str) {
        self.events.lock().push(ValidityEvent::SetCustomValidity {
            element: element.id.clone(),
            message: message.to_owned(),
        });
    }

    fn report_validity(&self, element: &InputElement) {
        self.events.lock().push(ValidityEvent::ReportValidity {
            element: element.id.clone(),
        });
    }
}

// ============================================================================
// NATIVE VALIDITY
// ============================================================================

/// The engine's handle on the reporter for one call.
///
/// Every signal targets the field's original input element and is dropped
/// when native validation is off.
pub(crate) struct NativeValidity<'a> {
    reporter: &'a dyn ValidityReporter,
    element: &'a InputElement,
    enabled: bool,
}

impl<'a> NativeValidity<'a> {
    pub(crate) fn new(
        reporter: &'a dyn ValidityReporter,
        element: &'a InputElement,
        enabled: bool,
    ) -> Self {
        Self {
            reporter,
            element,
            enabled,
        }
    }

    /// Flags the element invalid. An empty message becomes a single space
    /// so the platform still treats the element as invalid.
    pub(crate) fn fail(&self, message: &Message) {
        let text = if message.is_empty() {
            " "
        } else {
            message.as_str()
        };
        self.send(text);
    }

    pub(crate) fn clear(&self) {
        self.send(CLEAR);
    }

    /// Final signal of a call that did not return early: the headline in
    /// exhaustive mode when something failed, otherwise clear.
    pub(crate) fn finish(&self, collect_all: bool, headline: Option<&Message>) {
        match headline {
            Some(message) if collect_all => self.fail(message),
            _ => self.clear(),
        }
    }

    fn send(&self, message: &str) {
        if !self.enabled {
            return;
        }
        self.reporter.set_custom_validity(self.element, message);
        self.reporter.report_validity(self.element);
    }
}
