/*!
 * History records.
 */

use serde::{Serialize, Serializer};
use serde::ser::SerializeStruct;

use crate::language::{LanguagePair, TranslationRoute};

/// One logged translation
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRecord {
    /// Store-assigned id
    pub id: i64,
    /// Pair and direction the text was translated along
    pub route: TranslationRoute,
    /// Trimmed source text
    pub input_text: String,
    /// Raw model output
    pub output_text: String,
    /// Insert time as stored, `YYYY-MM-DD HH:MM:SS.SSS` UTC
    pub created_at: String,
}

impl TranslationRecord {
    pub fn language_pair(&self) -> LanguagePair {
        self.route.pair
    }

    pub fn direction_label(&self) -> &'static str {
        self.route.direction_label()
    }
}

// Pair and direction go out as their display labels, matching the table
impl Serialize for TranslationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TranslationRecord", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("language_pair", self.route.pair.label())?;
        state.serialize_field("direction", self.route.direction_label())?;
        state.serialize_field("input_text", &self.input_text)?;
        state.serialize_field("output_text", &self.output_text)?;
        state.serialize_field("created_at", &self.created_at)?;
        state.end()
    }
}

/// A raw `translations` row before labels are checked
#[derive(Debug, Clone)]
pub(crate) struct TranslationRow {
    pub id: i64,
    pub language_pair: String,
    pub direction: String,
    pub input_text: String,
    pub output_text: String,
    pub created_at: String,
}
