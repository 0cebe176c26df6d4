//! Regional base URL resolution

use ledgerbridge_domain::{AccountingError, Result};
use url::Url;

pub const ESTONIA_BASE_URL: &str = "https://aktiva.merit.ee/api/";
pub const POLAND_BASE_URL: &str = "https://program.360ksiegowosc.pl/api/";

/// Base URL for a region name. `"pl"` and `"poland"` (any case) select the
/// Polish deployment; everything else falls back to Estonia.
pub fn base_url_for(region: &str) -> &'static str {
    match region.trim().to_ascii_lowercase().as_str() {
        "pl" | "poland" => POLAND_BASE_URL,
        _ => ESTONIA_BASE_URL,
    }
}

/// Pick the explicit override when present, the regional default otherwise.
///
/// The result always ends with `/` so endpoints can be appended directly.
pub fn resolve_base_url(base_url: Option<&str>, region: &str) -> Result<String> {
    let Some(raw) = base_url.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(base_url_for(region).to_string());
    };

    let parsed = Url::parse(raw)
        .map_err(|err| AccountingError::Config(format!("invalid base URL '{raw}': {err}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AccountingError::Config(format!(
            "base URL must use http or https, got '{}'",
            parsed.scheme()
        )));
    }

    let mut resolved = raw.to_string();
    if !resolved.ends_with('/') {
        resolved.push('/');
    }
    Ok(resolved)
}
