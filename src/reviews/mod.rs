//! Review records and review collections.
//!
//! Reviews are grouped by the number of the card they review and versioned
//! alongside it. A review collection only derives `latest`.

pub mod review;

pub use review::Review;

use crate::collection::{CollectionConfig, CollectionResult, NoPartitions, VersionedCollection};

/// Collection of reviews.
pub type ReviewCollection = VersionedCollection<Review>;

impl VersionedCollection<Review> {
    /// Build with the default configuration.
    pub fn from_reviews(reviews: impl IntoIterator<Item = Review>) -> CollectionResult<Self> {
        Self::build(reviews, &NoPartitions, CollectionConfig::default())
    }

    /// Build with a custom configuration.
    pub fn from_reviews_with(
        reviews: impl IntoIterator<Item = Review>,
        config: CollectionConfig,
    ) -> CollectionResult<Self> {
        Self::build(reviews, &NoPartitions, config)
    }

    /// Build from a JSON array of review records.
    pub fn from_json_str(json: &str) -> CollectionResult<Self> {
        Self::from_json(json, &NoPartitions, CollectionConfig::default())
    }
}
