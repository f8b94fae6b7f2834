//! Expense categories
//!
//! The tracker ships a fixed set of seven categories. Expenses store their
//! category as a plain string so that values written by other tools survive a
//! load/save cycle untouched; unknown strings are shown as "other".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Glyph shown for categories outside the known set
pub const DEFAULT_EMOJI: &str = "📦";

/// One of the built-in expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Health,
    Other,
}

impl Category {
    /// Every built-in category, in display order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Health,
        Category::Other,
    ];

    /// The storage key for this category ("food", "transport", ...)
    pub fn key(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Bills => "bills",
            Self::Health => "health",
            Self::Other => "other",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Food => "🍕",
            Self::Transport => "🚗",
            Self::Entertainment => "🎬",
            Self::Shopping => "🛍️",
            Self::Bills => "💡",
            Self::Health => "🏥",
            Self::Other => DEFAULT_EMOJI,
        }
    }

    /// Look up a built-in category by its exact key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }

    /// Resolve a stored category string for display, falling back to `Other`
    pub fn display_for(key: &str) -> Self {
        Self::from_key(key).unwrap_or(Self::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::from_key(&key).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Emoji for an arbitrary stored category string
pub fn category_emoji(key: &str) -> &'static str {
    Category::from_key(key)
        .map(|c| c.emoji())
        .unwrap_or(DEFAULT_EMOJI)
}

/// Error returned when parsing a string outside the built-in set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            Category::ALL.map(|c| c.key()).join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}
