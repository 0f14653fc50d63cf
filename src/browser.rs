use std::env;
use std::process::{Command, Stdio};

const DEFAULT_BROWSER: &str = "chromium-browser";

/// Fire-and-forget: the operator reads the page while the prompts run.
/// A browser that fails to spawn is a warning, not a reason to stop.
pub fn open_listing(url: &str) {
    let browser = env::var("BROWSER").unwrap_or_else(|_| DEFAULT_BROWSER.to_string());
    if let Err(e) = Command::new(&browser)
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        eprintln!("⚠️ Could not launch {browser}: {e}");
    }
}
