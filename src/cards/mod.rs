//! Card records and card collections.
//!
//! ## Key Types
//!
//! - `Card`: one version of a card, grouped by card number
//! - `Note` / `NoteKind`: change note attached to a version
//! - `CardRules`: draft and playtesting partition rules
//! - `CardCollection`: a `VersionedCollection` of cards
//!
//! ## Partitions
//!
//! On top of `latest`, a card collection derives:
//!
//! - `draft`: per card, the highest version still under editing
//! - `playtesting`: per card, the version named by the latest record's
//!   `playtesting` marker, when that version exists

pub mod attributes;
pub mod card;
pub mod rules;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use card::{Card, Note, NoteKind};
pub use rules::CardRules;

use crate::collection::{CollectionConfig, CollectionResult, VersionedCollection};

/// Collection of card versions.
pub type CardCollection = VersionedCollection<Card>;

impl VersionedCollection<Card> {
    /// Build with `CardRules` and the default configuration.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> CollectionResult<Self> {
        Self::build(cards, &CardRules, CollectionConfig::default())
    }

    /// Build with `CardRules` and a custom configuration.
    pub fn from_cards_with(
        cards: impl IntoIterator<Item = Card>,
        config: CollectionConfig,
    ) -> CollectionResult<Self> {
        Self::build(cards, &CardRules, config)
    }

    /// Build from a JSON array of card records.
    pub fn from_json_str(json: &str) -> CollectionResult<Self> {
        Self::from_json(json, &CardRules, CollectionConfig::default())
    }
}
