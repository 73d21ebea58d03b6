/*!
 * History table definition.
 *
 * The schema is created if absent every time a connection opens. There is no
 * schema version and no migration step.
 */

use anyhow::{Context, Result};
use log::debug;
use rusqlite::Connection;

/// Create the translations table and its lookup index if they do not exist
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    // Millisecond timestamps so rows inserted within one second still order
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS translations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            language_pair TEXT,
            direction TEXT,
            input_text TEXT,
            output_text TEXT,
            timestamp DATETIME DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_translations_pair_time
            ON translations(language_pair, timestamp);
        "#,
    )
    .context("Failed to create translations table")?;

    debug!("Translations schema ready");
    Ok(())
}
