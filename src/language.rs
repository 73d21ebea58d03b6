/*!
 * Language pairs and translation directions.
 *
 * A direction only makes sense relative to its pair, so it is stored as
 * "towards the dialect" or "from the dialect" and the user-facing labels are
 * derived from the pair. An English → Teochew direction under the Hokkien pair
 * cannot be represented.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// The dialects we translate to and from English
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LanguagePair {
    /// English ⇄ Hokkien
    #[default]
    #[serde(rename = "English ⇄ Hokkien")]
    Hokkien,
    /// English ⇄ Teochew
    #[serde(rename = "English ⇄ Teochew")]
    Teochew,
}

impl LanguagePair {
    /// All pairs in selector order
    pub const ALL: [LanguagePair; 2] = [LanguagePair::Hokkien, LanguagePair::Teochew];

    /// Selector label, also the value stored in the history table
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hokkien => "English ⇄ Hokkien",
            Self::Teochew => "English ⇄ Teochew",
        }
    }

    /// Name of the dialect side of the pair
    pub fn dialect_name(&self) -> &'static str {
        match self {
            Self::Hokkien => "Hokkien",
            Self::Teochew => "Teochew",
        }
    }

    /// The two routes offered for this pair, in radio order
    pub fn routes(&self) -> [TranslationRoute; 2] {
        [
            TranslationRoute::new(*self, Direction::ToDialect),
            TranslationRoute::new(*self, Direction::FromDialect),
        ]
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LanguagePair {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|pair| pair.label() == s || pair.dialect_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownLanguagePair(s.to_string()))
    }
}

/// Which way a translation goes, relative to its pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// English into the dialect
    #[default]
    ToDialect,
    /// The dialect into English
    FromDialect,
}

/// A language pair together with a direction valid for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TranslationRoute {
    pub pair: LanguagePair,
    pub direction: Direction,
}

impl TranslationRoute {
    pub fn new(pair: LanguagePair, direction: Direction) -> Self {
        Self { pair, direction }
    }

    /// Radio label for this route, also the value stored in the history table
    pub fn direction_label(&self) -> &'static str {
        match (self.pair, self.direction) {
            (LanguagePair::Hokkien, Direction::ToDialect) => "English → Hokkien",
            (LanguagePair::Hokkien, Direction::FromDialect) => "Hokkien → English",
            (LanguagePair::Teochew, Direction::ToDialect) => "English → Teochew",
            (LanguagePair::Teochew, Direction::FromDialect) => "Teochew → English",
        }
    }

    /// Resolve a direction label under the given pair.
    ///
    /// Fails with `DirectionMismatch` when the label belongs to the other pair
    /// or to no pair at all.
    pub fn from_labels(pair: LanguagePair, direction: &str) -> Result<Self, ValidationError> {
        let direction = direction.trim();
        pair.routes()
            .into_iter()
            .find(|route| route.direction_label() == direction)
            .ok_or_else(|| ValidationError::DirectionMismatch {
                language_pair: pair.label().to_string(),
                direction: direction.to_string(),
            })
    }

    /// Like `from_labels`, but an unknown or missing direction falls back to
    /// the pair's first route. Used when the pair selector changes and the
    /// previously chosen direction no longer applies.
    pub fn from_labels_or_default(pair: LanguagePair, direction: Option<&str>) -> Self {
        direction
            .and_then(|d| Self::from_labels(pair, d).ok())
            .unwrap_or_else(|| Self::new(pair, Direction::ToDialect))
    }
}

impl fmt::Display for TranslationRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.direction_label())
    }
}
