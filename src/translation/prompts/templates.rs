/*!
 * Prompt templates for dialect translation.
 *
 * English → dialect prompts pin the answer to a three-field layout
 * (Words / Pronunciation / Usage) separated by `<br>`, which the history view
 * later trims with `extract_summary`. Dialect → English prompts ask for a few
 * candidate readings in free prose.
 */

use crate::language::{Direction, LanguagePair, TranslationRoute};

/// A prompt with `{dialect}` and `{text}` placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// English into a dialect, answered in the fixed three-field layout.
    pub const TO_DIALECT: &'static str = r#"Please translate the following English text to {dialect}.

{text}

Leave out random explanations, just give the best option.

Only include the words, the pronunciation guide and usage.

Format it like this:

<b> Words </b>: ...
<br>
<b> Pronunciation </b>: ...
<br>
<b> Usage </b>: ..."#;

    /// A dialect into English, answered as free prose.
    pub const FROM_DIALECT: &'static str = r#"Please translate the following {dialect} text to English.

{text}

Leave out random explanations, just give the best few options and pronunciation.

Return the replies you are most confident in."#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Template for the given direction.
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::ToDialect => Self::new(Self::TO_DIALECT),
            Direction::FromDialect => Self::new(Self::FROM_DIALECT),
        }
    }

    /// Render the template. The text goes in verbatim.
    pub fn render(&self, dialect: &str, text: &str) -> String {
        // {text} last so user text containing "{dialect}" is left alone
        self.template
            .replace("{dialect}", dialect)
            .replace("{text}", text)
    }
}

pub fn to_hokkien(text: &str) -> String {
    build_prompt(TranslationRoute::new(LanguagePair::Hokkien, Direction::ToDialect), text)
}

pub fn from_hokkien(text: &str) -> String {
    build_prompt(TranslationRoute::new(LanguagePair::Hokkien, Direction::FromDialect), text)
}

pub fn to_teochew(text: &str) -> String {
    build_prompt(TranslationRoute::new(LanguagePair::Teochew, Direction::ToDialect), text)
}

pub fn from_teochew(text: &str) -> String {
    build_prompt(TranslationRoute::new(LanguagePair::Teochew, Direction::FromDialect), text)
}

/// Build the prompt sent to the model for a route.
pub fn build_prompt(route: TranslationRoute, text: &str) -> String {
    PromptTemplate::for_direction(route.direction).render(route.pair.dialect_name(), text)
}
