/*!
 * Summary extraction for stored model output.
 *
 * English → dialect answers follow the Words / Pronunciation / Usage layout.
 * The history panel only needs the first two fields, so they are cut out
 * here. Output that does not follow the layout is passed through untouched.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Words field, `<br>`, Pronunciation field, then `<br>` or end of input.
/// A single trailing newline before the end is left out of the match.
/// Case-insensitive and `.` spans newlines.
static WORDS_PRONUNCIATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(<b>\s*Words\s*</b>:\s*.*?)(<br>)(<b>\s*Pronunciation\s*</b>:\s*.*?)(<br>|\n?\z)")
        .unwrap()
});

/// Reduce model output to its Words and Pronunciation fields.
///
/// Returns the input unchanged when the layout is not found.
pub fn extract_summary(text: &str) -> String {
    match WORDS_PRONUNCIATION_REGEX.captures(text) {
        Some(caps) => format!("{}<br>{}", &caps[1], &caps[3]),
        None => text.to_string(),
    }
}
