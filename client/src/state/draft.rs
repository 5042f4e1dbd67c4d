//! Parent-side draft state.
//!
//! DESIGN
//! ======
//! The draft text is the single source of truth for what the map shows. The
//! map widget writes to it through its update callback and reads it back
//! through a signal. The last import diagnostic sits beside it so the page can
//! show why a hand-edited draft did not reach the map.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use widget::draft::parse_draft;

/// Draft text plus the map's last diagnostic for the editor page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftState {
    /// Serialized feature collection, possibly hand-edited and invalid.
    pub text: String,
    /// Why the map last refused the draft, if it did.
    pub last_error: Option<String>,
}

impl DraftState {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    /// Store new draft text. Returns `false` if the text is unchanged.
    /// A change clears the previous diagnostic.
    pub fn replace(&mut self, text: String) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        self.last_error = None;
        true
    }

    /// Remember why the map refused the draft. Returns `false` if the same
    /// message is already recorded, so a repeated report notifies nobody.
    pub fn record_error(&mut self, message: String) -> bool {
        if self.last_error.as_ref() == Some(&message) {
            return false;
        }
        self.last_error = Some(message);
        true
    }

    /// Number of features in the draft, or `None` if it does not parse.
    pub fn feature_count(&self) -> Option<usize> {
        match parse_draft(&self.text) {
            Ok(collection) => Some(collection.features.len()),
            Err(_) => None,
        }
    }
}

/// Admits each distinct draft text once.
///
/// The map component re-runs its draft effect whenever any tracked input
/// changes. The gate keeps a text that was already handed to the map from
/// being applied again, so a diagnostic written back by the parent cannot
/// feed the same draft into the widget in a loop.
#[derive(Clone, Debug, Default)]
pub struct DraftGate {
    last: Option<String>,
}

impl DraftGate {
    /// `true` if `text` differs from the last admitted text. Admitting it
    /// makes it the new reference.
    pub fn admit(&mut self, text: &str) -> bool {
        if self.last.as_deref() == Some(text) {
            return false;
        }
        self.last = Some(text.to_owned());
        true
    }

    /// Forget the last admitted text, so the next one always passes.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
