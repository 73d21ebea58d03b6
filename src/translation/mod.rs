/*!
 * Text handling around the model call.
 *
 * - `prompts`: prompt templates for each translation route
 * - `extract`: trimming stored output down to its Words + Pronunciation fields
 */

// Re-export main functions for easier usage
pub use self::extract::extract_summary;
pub use self::prompts::{build_prompt, PromptTemplate};

// Submodules
pub mod extract;
pub mod prompts;
