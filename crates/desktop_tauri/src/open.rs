//! Native `open_file` / `open_url` command handlers.
//!
//! Targets are validated here before the opener plugin hands them to the OS default handler, so
//! the webview sees a typed [`DispatchError`] instead of an opaque spawn failure.

use std::fs;
use std::path::PathBuf;

use platform_host::DispatchError;
use tauri_plugin_opener::OpenerExt;
use url::Url;

/// Resolves a file target, classifying missing or unreadable paths.
pub fn resolve_file_target(file_path: &str) -> Result<PathBuf, DispatchError> {
    if file_path.trim().is_empty() {
        return Err(DispatchError::unknown("file path must not be empty"));
    }
    let path = PathBuf::from(file_path);
    fs::metadata(&path).map_err(|err| DispatchError::from_io(&err))?;
    Ok(path)
}

/// Parses a URL target.
pub fn parse_url_target(url: &str) -> Result<Url, DispatchError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(DispatchError::unknown("url must not be empty"));
    }
    Url::parse(trimmed)
        .map_err(|err| DispatchError::unknown(format!("invalid url `{trimmed}`: {err}")))
}

/// Opens a local file with the system default application.
#[tauri::command]
pub fn open_file(app: tauri::AppHandle, file_path: String) -> Result<(), DispatchError> {
    log::info!("open_file requested for `{file_path}`");
    let path = resolve_file_target(&file_path).inspect_err(|err| {
        log::warn!("open_file rejected `{file_path}` ({}): {err}", err.kind());
    })?;
    app.opener()
        .open_path(path.to_string_lossy().into_owned(), None::<String>)
        .map_err(|err| {
            log::warn!("open_file failed for `{file_path}`: {err}");
            DispatchError::unknown(format!("Failed to open file: {err}"))
        })
}

/// Opens a URL with the system default browser.
#[tauri::command]
pub fn open_url(app: tauri::AppHandle, url: String) -> Result<(), DispatchError> {
    log::info!("open_url requested for `{url}`");
    let parsed = parse_url_target(&url).inspect_err(|err| {
        log::warn!("open_url rejected `{url}`: {err}");
    })?;
    app.opener()
        .open_url(parsed.as_str(), None::<String>)
        .map_err(|err| {
            log::warn!("open_url failed for `{url}`: {err}");
            DispatchError::unknown(format!("Failed to open URL: {err}"))
        })
}
