//! Partition rules for card collections.

use super::card::Card;
use crate::collection::PartitionRule;
use crate::version::SemanticVersion;

/// Derives the `draft` and `playtesting` partitions for cards.
///
/// - draft candidates are previews, pre-testing cards, and versions with a
///   change note that is not yet implemented (`Card::is_draft`)
/// - the playtesting version is the one named by the card's latest record
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardRules;

impl PartitionRule<Card> for CardRules {
    fn is_draft(&self, record: &Card) -> bool {
        record.is_draft()
    }

    fn playtesting_marker(&self, latest: &Card) -> Option<SemanticVersion> {
        latest.playtesting
    }
}
