//! Visual asset model.

use serde::{Deserialize, Serialize};

/// A generated (or placeholder) visual attached to one day-slot.
///
/// Created once per plan item and immutable thereafter; formatted posts
/// carry a copy of the record, never a mutated variant of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    /// Unique identifier, `asset_` followed by a v4 UUID
    pub id: String,

    /// Resolvable locator for the visual (https or file URL)
    pub url: String,

    /// Text prompt the visual was produced from
    pub prompt: String,
}
