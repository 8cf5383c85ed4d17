//! Semantic versions for card and review records.
//!
//! Every record carries a `MAJOR.MINOR.PATCH` version. Versions are
//! totally ordered by numeric component comparison; pre-release and build
//! metadata are not part of the format.

pub mod errors;
pub mod semantic;

pub use errors::{VersionError, VersionResult};
pub use semantic::{compare, SemanticVersion};
