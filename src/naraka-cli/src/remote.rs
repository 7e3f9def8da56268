//! Remote share-code retrieval
//!
//! Share links point at a page whose body is the share code itself.

use anyhow::{anyhow, Context, Result};

/// Whether `input` looks like an http(s) URL
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Fetch the share code behind a URL; any other input is returned unchanged
pub fn resolve_token(input: &str, proxy: Option<&str>) -> Result<String> {
    if !is_url(input) {
        return Ok(input.to_string());
    }

    let url = request_url(input, proxy);
    tracing::info!(%url, "fetching share code");

    fetch(&url).map_err(|e| {
        tracing::error!(error = %e, "Error fetching Naraka data");
        e
    })
}

fn request_url(input: &str, proxy: Option<&str>) -> String {
    match proxy {
        Some(prefix) => format!("{}{}", prefix, input),
        None => input.to_string(),
    }
}

fn fetch(url: &str) -> Result<String> {
    let response = ureq::get(url).call().map_err(|e| match e {
        ureq::Error::Status(code, _) => {
            anyhow!("Failed to fetch Naraka data from URL (HTTP {})", code)
        }
        other => anyhow::Error::new(other).context("Failed to fetch Naraka data from URL"),
    })?;

    let body = response
        .into_string()
        .context("Failed to read response body")?;

    Ok(body.trim().to_string())
}
