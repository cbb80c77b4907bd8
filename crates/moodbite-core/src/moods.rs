//! The mood catalog: named user intents mapped to search parameters.
//!
//! Each mood carries a default radius plus a primary tag set and, where the
//! primary set is narrow, a fallback set with a user-facing tip shown when
//! the fallback produced the results. Broad moods search widely from the
//! start and need no fallback.

use crate::place::TagFilter;

/// Search radii offered to the user, in meters.
pub const DISTANCE_OPTIONS_M: &[u32] = &[500, 1_000, 1_500, 2_000, 3_000];

/// A named user intent with its search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mood {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub default_radius_m: u32,
    primary: &'static [(&'static str, &'static str)],
    fallback: &'static [(&'static str, &'static str)],
    pub fallback_message: &'static str,
}

impl Mood {
    /// Tag filter for the first search pass.
    #[must_use]
    pub fn primary_filter(&self) -> TagFilter {
        TagFilter::from_pairs(self.primary.iter().copied())
    }

    /// Tag filter for the escalation pass; empty for broad moods.
    #[must_use]
    pub fn fallback_filter(&self) -> TagFilter {
        TagFilter::from_pairs(self.fallback.iter().copied())
    }
}

/// The full catalog, in presentation order.
pub const MOODS: &[Mood] = &[
    Mood {
        id: "work",
        name: "Work",
        description: "Quiet cafes for focus",
        default_radius_m: 500,
        primary: &[("amenity", "cafe")],
        fallback: &[("amenity", "restaurant")],
        fallback_message: "No cafes found nearby. Showing restaurants instead.",
    },
    Mood {
        id: "quick_bite",
        name: "Quick Bite",
        description: "Fast food & takeaway",
        default_radius_m: 1_000,
        primary: &[("amenity", "fast_food")],
        fallback: &[("amenity", "restaurant"), ("amenity", "cafe")],
        fallback_message: "No fast food found. Showing other food places.",
    },
    Mood {
        id: "budget",
        name: "Budget",
        description: "Affordable local spots",
        default_radius_m: 2_000,
        // Already broad, so no escalation target exists.
        primary: &[
            ("amenity", "restaurant"),
            ("amenity", "fast_food"),
            ("amenity", "cafe"),
        ],
        fallback: &[],
        fallback_message: "",
    },
    Mood {
        id: "casual",
        name: "Casual",
        description: "All food options",
        default_radius_m: 1_500,
        primary: &[
            ("amenity", "restaurant"),
            ("amenity", "cafe"),
            ("amenity", "fast_food"),
            ("amenity", "bar"),
            ("amenity", "pub"),
        ],
        fallback: &[],
        fallback_message: "",
    },
];

/// Looks up a mood by identifier.
#[must_use]
pub fn mood_by_id(id: &str) -> Option<&'static Mood> {
    MOODS.iter().find(|m| m.id == id)
}
