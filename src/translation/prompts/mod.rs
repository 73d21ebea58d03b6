/*!
 * Prompt construction for each translation route.
 */

pub mod templates;

// Re-export main types
pub use templates::{
    build_prompt, from_hokkien, from_teochew, to_hokkien, to_teochew, PromptTemplate,
};
