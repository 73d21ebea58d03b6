/*!
 * HTML for the translator page.
 *
 * Everything the user typed is escaped. Model output is inserted as markup on
 * purpose so `<b>` and `<br>` from the three-field layout render.
 */

use std::fmt::Write;

use crate::app_controller::{HistoryEntry, Notice};
use crate::language::{LanguagePair, TranslationRoute};

/// Everything one render of the page needs
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub route: TranslationRoute,
    pub show_history: bool,
    /// Text area content
    pub text: String,
    pub notice: Option<Notice>,
    /// `None` when the panel is hidden
    pub history: Option<Vec<HistoryEntry>>,
    /// Set when the history query itself failed
    pub history_error: Option<String>,
}

const TITLE: &str = "Hokkien &amp; Teochew Translator";

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
.controls { display: flex; gap: 2rem; margin: 1rem 0; }
textarea { width: 100%; height: 150px; }
.notice { padding: .75rem; margin: 1rem 0; border-radius: 4px; }
.success { background: #e6f4ea; }
.warning { background: #fff4e5; }
.error { background: #fdecea; }
.output { white-space: pre-wrap; margin-top: .5rem; }
.row { display: flex; justify-content: space-between; gap: 1rem; border-bottom: 1px solid #ddd; padding: .5rem 0; }
"#;

/// Escape text for HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the full page
pub fn render_page(view: &PageView) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title><style>{style}</style></head><body><h1>{title}</h1>",
        title = TITLE,
        style = STYLE
    );

    // GET keeps selector changes bookmarkable; the buttons switch to POST
    html.push_str("<form method=\"get\" action=\"/\">");
    html.push_str("<input type=\"hidden\" name=\"submitted\" value=\"1\">");

    let _ = write!(
        html,
        "<label><input type=\"checkbox\" name=\"show_history\" value=\"on\" onchange=\"this.form.submit()\"{}> Show Recent Translations</label>",
        if view.show_history { " checked" } else { "" }
    );

    html.push_str("<div class=\"controls\">");
    render_pair_selector(&mut html, view.route.pair);
    render_direction_radios(&mut html, view.route);
    html.push_str("</div>");

    let _ = write!(
        html,
        "<label>Enter text to translate<textarea name=\"text\">{}</textarea></label>",
        escape_html(&view.text)
    );
    html.push_str(
        "<p><button type=\"submit\" formmethod=\"post\" formaction=\"/translate\">Translate</button></p>",
    );

    if let Some(notice) = &view.notice {
        render_notice(&mut html, notice);
    }

    if view.show_history {
        render_history(&mut html, view);
    }

    html.push_str("</form></body></html>");
    html
}

fn render_pair_selector(html: &mut String, selected: LanguagePair) {
    html.push_str("<label>Select Language Pair <select name=\"language_pair\" onchange=\"this.form.submit()\">");
    for pair in LanguagePair::ALL {
        let _ = write!(
            html,
            "<option value=\"{label}\"{sel}>{label}</option>",
            label = escape_html(pair.label()),
            sel = if pair == selected { " selected" } else { "" }
        );
    }
    html.push_str("</select></label>");
}

fn render_direction_radios(html: &mut String, selected: TranslationRoute) {
    html.push_str("<fieldset><legend>Translation Direction</legend>");
    for route in selected.pair.routes() {
        let _ = write!(
            html,
            "<label><input type=\"radio\" name=\"direction\" value=\"{label}\"{chk}> {label}</label><br>",
            label = escape_html(route.direction_label()),
            chk = if route == selected { " checked" } else { "" }
        );
    }
    html.push_str("</fieldset>");
}

fn render_notice(html: &mut String, notice: &Notice) {
    match notice {
        Notice::Translated(output) => {
            let _ = write!(
                html,
                "<div class=\"notice success\">Translation:<div class=\"output\">{}</div></div>",
                output
            );
        }
        Notice::Warning(message) => {
            let _ = write!(html, "<div class=\"notice warning\">{}</div>", escape_html(message));
        }
        Notice::Error(message) => {
            let _ = write!(html, "<div class=\"notice error\">{}</div>", escape_html(message));
        }
    }
}

fn render_history(html: &mut String, view: &PageView) {
    html.push_str("<h3>Recent translations</h3>");

    if let Some(message) = &view.history_error {
        let _ = write!(html, "<div class=\"notice error\">{}</div>", escape_html(message));
        return;
    }

    let entries = view.history.as_deref().unwrap_or_default();
    if entries.is_empty() {
        html.push_str("<p>No recent translations.</p>");
        return;
    }

    for entry in entries {
        let _ = write!(
            html,
            "<div class=\"row\"><div><p><strong>Direction:</strong> {direction}</p><p><strong>Input:</strong> {input}</p><p><strong>Output:</strong></p><div class=\"output\">{summary}</div></div>\
             <div><button type=\"submit\" formmethod=\"post\" formaction=\"/history/{id}/delete\">Del</button></div></div>",
            direction = escape_html(entry.direction),
            input = escape_html(&entry.input_text),
            summary = entry.summary,
            id = entry.id
        );
    }
}
