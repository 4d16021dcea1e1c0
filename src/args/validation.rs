use std::path::Path;
use url::Url;

use crate::router::RoutePrefix;

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url that can take a path
pub fn check_aggregator_base(value: &str) -> Result<Url, String> {
    let url = Url::parse(value.trim())
        .map_err(|e| format!("The aggregator base '{value}' is not a valid url: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "The aggregator base '{value}' must use http or https."
        ));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(format!("The aggregator base '{value}' has no host."));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(format!(
            "The aggregator base '{value}' must not carry a query or fragment."
        ));
    }
    Ok(url)
}

/// # Errors
///
/// Will return `Err` if the prefix contains characters that would be read as a route pattern
pub fn check_route_prefix(value: &str) -> Result<String, String> {
    if value.contains(['{', '}', '?', '#', '*']) {
        return Err(format!(
            "The route prefix '{value}' may only contain plain path segments."
        ));
    }
    Ok(RoutePrefix::new(value).as_str().to_string())
}

/// # Errors
///
/// Will return `Err` if the path is not a readable directory
pub fn check_readable_dir(path: &Path) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!(
            "The public directory '{}' is not readable.",
            path.display()
        ));
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the path is not a readable file
pub fn check_readable_file(path: &Path) -> Result<(), String> {
    if !path.is_file() || std::fs::metadata(path).is_err() {
        return Err(format!("The file '{}' is not readable.", path.display()));
    }
    Ok(())
}
