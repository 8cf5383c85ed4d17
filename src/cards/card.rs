//! Versioned card records.
//!
//! A `Card` is one version of one card. All versions of a card share its
//! `number`; the collection groups on it.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};
use crate::collection::Versioned;
use crate::version::SemanticVersion;

/// Kind of change a card version records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    /// Text or stats changed.
    Updated,
    /// Redesigned from scratch.
    Reworked,
    /// Replaced by a different card.
    Replaced,
    /// The change has been applied to the playtesting version.
    Implemented,
}

/// Change note attached to a card version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// What kind of change this is.
    #[serde(rename = "type")]
    pub kind: NoteKind,

    /// Free-form description of the change.
    #[serde(default, alias = "display", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Note {
    /// Create a note without text.
    #[must_use]
    pub fn new(kind: NoteKind) -> Self {
        Self { kind, text: None }
    }

    /// Attach a description (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Whether the change is still waiting to reach playtesting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.kind != NoteKind::Implemented
    }
}

/// One version of a card.
///
/// Fields the collection does not interpret are kept in `attributes` and
/// flattened back into the record on serialization.
///
/// ## Example
///
/// ```
/// use card_collections::cards::{Card, Note, NoteKind};
///
/// let card = Card::new(12, "1.1.0".parse().unwrap())
///     .with_note(Note::new(NoteKind::Updated))
///     .with_attr("name", "Gandalf");
///
/// assert!(card.is_draft());
/// assert_eq!(card.get_text("name"), Some("Gandalf"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Card number, shared by every version of the card.
    pub number: u32,

    /// This record's version.
    pub version: SemanticVersion,

    /// Version currently under playtest. Read off the card's latest record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playtesting: Option<SemanticVersion>,

    /// Change note for this version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,

    /// Remaining record fields.
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Card {
    /// Create a card version with no marker, note, or attributes.
    #[must_use]
    pub fn new(number: u32, version: SemanticVersion) -> Self {
        Self {
            number,
            version,
            playtesting: None,
            note: None,
            attributes: Attributes::default(),
        }
    }

    /// Set the playtesting marker (builder pattern).
    #[must_use]
    pub fn with_playtesting(mut self, version: SemanticVersion) -> Self {
        self.playtesting = Some(version);
        self
    }

    /// Set the change note (builder pattern).
    #[must_use]
    pub fn with_note(mut self, note: Note) -> Self {
        self.note = Some(note);
        self
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(|v| v.as_text())
    }

    /// Below 1.0.0 and never playtested.
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.version.is_preview() && self.playtesting.is_none()
    }

    /// Exactly 1.0.0 and not yet playtested.
    #[must_use]
    pub fn is_pre_testing(&self) -> bool {
        self.version == SemanticVersion::RELEASE && self.playtesting.is_none()
    }

    /// Still under editing: a preview, pre-testing, or carrying a change
    /// note that has not been implemented.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.is_preview()
            || self.is_pre_testing()
            || self.note.as_ref().map_or(false, Note::is_pending)
    }
}

impl Versioned for Card {
    type Key = u32;

    fn group_key(&self) -> u32 {
        self.number
    }

    fn version(&self) -> SemanticVersion {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_preview() {
        assert!(Card::new(1, v("0.5.0")).is_preview());
        assert!(!Card::new(1, v("0.5.0")).with_playtesting(v("0.5.0")).is_preview());
        assert!(!Card::new(1, v("1.0.0")).is_preview());
    }

    #[test]
    fn test_pre_testing() {
        assert!(Card::new(1, v("1.0.0")).is_pre_testing());
        assert!(!Card::new(1, v("1.0.0")).with_playtesting(v("1.0.0")).is_pre_testing());
        assert!(!Card::new(1, v("1.0.1")).is_pre_testing());
    }

    #[test]
    fn test_draft_from_notes() {
        let updated = Card::new(1, v("2.0.0")).with_note(Note::new(NoteKind::Updated));
        let implemented = Card::new(1, v("2.0.0")).with_note(Note::new(NoteKind::Implemented));
        let plain = Card::new(1, v("2.0.0"));

        assert!(updated.is_draft());
        assert!(!implemented.is_draft());
        assert!(!plain.is_draft());
    }

    #[test]
    fn test_implemented_preview_is_still_draft() {
        let card = Card::new(1, v("0.3.0")).with_note(Note::new(NoteKind::Implemented));
        assert!(card.is_draft());
    }

    #[test]
    fn test_deserialize_record() {
        let card: Card = serde_json::from_str(
            r#"{
                "number": 42,
                "version": "1.2.0",
                "playtesting": "1.1.0",
                "note": { "type": "reworked", "display": "New ability" },
                "name": "Aragorn",
                "cost": 4
            }"#,
        )
        .unwrap();

        assert_eq!(card.number, 42);
        assert_eq!(card.version, v("1.2.0"));
        assert_eq!(card.playtesting, Some(v("1.1.0")));
        assert_eq!(
            card.note,
            Some(Note::new(NoteKind::Reworked).with_text("New ability"))
        );
        assert_eq!(card.get_text("name"), Some("Aragorn"));
        assert_eq!(card.get_attr("cost").and_then(|a| a.as_int()), Some(4));
        assert!(card.get_attr("number").is_none());
    }

    #[test]
    fn test_missing_version_fails() {
        let err = serde_json::from_str::<Card>(r#"{"number": 1}"#).unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let card = Card::new(3, v("1.0.0"))
            .with_playtesting(v("1.0.0"))
            .with_attr("name", "Legolas");

        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
