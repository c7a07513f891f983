use tracing::{debug, warn};
use web_sys::{Storage, UrlSearchParams};

use crate::config::PickerConfig;
use crate::error::DomError;

const CONFIG_KEY: &str = "fp_config";

fn local_storage() -> Result<Storage, DomError> {
    super::window()?
        .local_storage()
        .ok()
        .flatten()
        .ok_or(DomError::NoStorage)
}

/// Stored configuration, or defaults when nothing usable is stored.
pub fn load_config() -> PickerConfig {
    let raw = match local_storage().map(|store| store.get_item(CONFIG_KEY)) {
        Ok(Ok(Some(raw))) => raw,
        Ok(_) => return PickerConfig::default(),
        Err(err) => {
            debug!(%err, "no storage, using default config");
            return PickerConfig::default();
        }
    };
    PickerConfig::from_json(&raw).unwrap_or_else(|err| {
        warn!(%err, "ignoring stored config");
        PickerConfig::default()
    })
}

pub fn save_config(config: &PickerConfig) -> Result<(), DomError> {
    let raw = config.to_json().map_err(|err| DomError::Js {
        op: "serialize config",
        message: err.to_string(),
    })?;
    local_storage()?
        .set_item(CONFIG_KEY, &raw)
        .map_err(|e| DomError::js("localStorage.setItem", e))
}

/// `?seed=<u64>` in the page URL, for reproducible picks.
pub fn seed_from_location() -> Option<u64> {
    let search = super::window().ok()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    let raw = params.get("seed")?;
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            warn!(%raw, "ignoring non-numeric seed");
            None
        }
    }
}
