//! Shapes the per-field error entry.

use indexmap::IndexMap;

use crate::foundation::{FieldError, Message, RuleKind, ValidationOutcome};

/// Collects failures for one field into a single [`FieldError`].
///
/// Every failure replaces the headline. In exhaustive mode the failure is
/// also added to `types`; in first-error mode `types` stays `None`.
#[derive(Debug)]
pub(crate) struct ErrorAccumulator {
    collect_all: bool,
    entry: Option<FieldError>,
}

impl ErrorAccumulator {
    pub(crate) fn new(collect_all: bool) -> Self {
        Self {
            collect_all,
            entry: None,
        }
    }

    pub(crate) fn record(&mut self, kind: RuleKind, message: Message, target: &str) {
        let types = self.collect_all.then(|| {
            let mut types = self
                .entry
                .take()
                .and_then(|entry| entry.types)
                .unwrap_or_else(IndexMap::new);
            types.insert(kind.clone(), message.clone());
            types
        });

        self.entry = Some(FieldError {
            kind,
            message,
            target: target.to_owned(),
            types,
        });
    }

    /// Message of the last recorded failure.
    pub(crate) fn headline(&self) -> Option<&Message> {
        self.entry.as_ref().map(|entry| &entry.message)
    }

    pub(crate) fn finish(self, name: &str) -> ValidationOutcome {
        self.entry.map_or_else(ValidationOutcome::new, |entry| {
            ValidationOutcome::single(name, entry)
        })
    }
}
