use contracts::search::config::{load_config, SearchConfig};

/// localStorage key holding an optional TOML override of the embedded config
pub const CONFIG_STORAGE_KEY: &str = "tm_search.config";

/// Load the search configuration for this browser session.
///
/// Search order:
/// 1. TOML stored in localStorage under `tm_search.config`
/// 2. Falls back to embedded default config
pub fn load_search_config() -> anyhow::Result<SearchConfig> {
    let override_toml = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    let config = load_config(override_toml.as_deref())?;
    log::debug!("Search endpoint: {}", config.search.endpoint);
    Ok(config.search)
}
