//! History file plumbing shared by the subcommands.

use aqualog_store::HistoryStore;
use std::path::Path;

/// Load the history CSV, treating a missing file as an empty history.
pub fn load_history(path: &str) -> anyhow::Result<HistoryStore> {
    if !Path::new(path).exists() {
        log::info!("history file {path} not found, starting empty");
        return Ok(HistoryStore::new());
    }
    let data = std::fs::read_to_string(path)?;
    HistoryStore::from_csv(&data)
}

/// Write the history back to its CSV file.
pub fn save_history(path: &str, store: &HistoryStore) -> anyhow::Result<()> {
    std::fs::write(path, store.to_csv()?)?;
    log::info!("wrote {} records to {path}", store.len());
    Ok(())
}
