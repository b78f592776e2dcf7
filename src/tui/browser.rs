//! Opening news links in the system browser.
//!
//! Links come from the news API, so they are checked before anything is
//! launched: only absolute `http`/`https` URLs pass. The launcher is started
//! directly (never through a shell) with the URL as a single argument and
//! null stdio, so the page has no handle back into the dashboard.

use std::fmt;
use std::process::{Child, Command, Stdio};

use log::{debug, info, warn};
use reqwest::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    /// The item carries no link.
    NoLink,
    /// The link does not parse as an absolute URL.
    Invalid(String),
    /// The link uses a scheme other than http or https.
    UnsupportedScheme(String),
    /// No launcher could be started.
    Launch(String),
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::NoLink => write!(f, "No link for this item"),
            OpenError::Invalid(e) => write!(f, "Invalid link: {e}"),
            OpenError::UnsupportedScheme(scheme) => {
                write!(f, "Refusing to open {scheme}: link")
            }
            OpenError::Launch(e) => write!(f, "Could not launch browser: {e}"),
        }
    }
}

impl std::error::Error for OpenError {}

/// Parses `raw` and accepts it only if it is an absolute http(s) URL.
pub fn checked_url(raw: &str) -> Result<Url, OpenError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(OpenError::NoLink);
    }
    let url = Url::parse(raw).map_err(|e| OpenError::Invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(OpenError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(target_os = "windows")]
const LAUNCHERS: &[(&str, &[&str])] = &[("rundll32", &["url.dll,FileProtocolHandler"])];

#[cfg(target_os = "macos")]
const LAUNCHERS: &[(&str, &[&str])] = &[("open", &[])];

// xdg-open first, then open for systems that ship it instead.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const LAUNCHERS: &[(&str, &[&str])] = &[("xdg-open", &[]), ("open", &[])];

/// Launcher commands to try, in order, for an already checked URL.
pub fn browser_commands(url: &Url) -> Vec<Command> {
    LAUNCHERS
        .iter()
        .map(|(program, args)| {
            let mut command = Command::new(program);
            command
                .args(*args)
                .arg(url.as_str())
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
            command
        })
        .collect()
}

/// Opens `raw` in the system browser.
///
/// `Ok` means a launcher process started. Whether it managed to show the page
/// is only known later and is logged.
pub fn open_url(raw: &str) -> Result<(), OpenError> {
    let url = checked_url(raw)?;

    let mut last_error = String::from("no launcher available");
    for mut command in browser_commands(&url) {
        match command.spawn() {
            Ok(child) => {
                info!("Opening {} with {:?}", url, command.get_program());
                reap(child, url.to_string());
                return Ok(());
            }
            Err(e) => {
                debug!("Launcher {:?} failed: {}", command.get_program(), e);
                last_error = e.to_string();
            }
        }
    }

    warn!("Failed to launch browser for {}: {}", url, last_error);
    Err(OpenError::Launch(last_error))
}

fn reap(mut child: Child, url: String) {
    std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => {
            warn!("Browser launcher for {} exited with {}", url, status);
        }
        Ok(_) => {}
        Err(e) => warn!("Failed to wait on browser launcher for {}: {}", url, e),
    });
}
