//! Desktop glue: default-browser launch and notifications.
//!
//! Both shell out to the platform helper and detach. A missing helper comes
//! back as an io::Error for the caller to log and fall back on; these calls
//! must never take a lookup down with them.

use std::io;
use std::process::{Command, Stdio};

/// Opens `url` in the default browser.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    spawn_detached(Command::new("open").arg(url))?;
    #[cfg(target_os = "windows")]
    spawn_detached(Command::new("cmd").args(["/C", "start", "", url]))?;
    #[cfg(all(not(target_os = "macos"), not(target_os = "windows")))]
    spawn_detached(Command::new("xdg-open").arg(url))?;
    Ok(())
}

/// Shows a desktop notification with the given title and body.
pub fn notify(title: &str, message: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            "display notification {} with title {}",
            applescript_quote(message),
            applescript_quote(title)
        );
        spawn_detached(Command::new("osascript").args(["-e", &script]))
    }
    #[cfg(not(target_os = "macos"))]
    {
        spawn_detached(Command::new("notify-send").args([title, message]))
    }
}

#[cfg(target_os = "macos")]
fn applescript_quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Fire-and-forget spawn with all stdio detached.
fn spawn_detached(command: &mut Command) -> io::Result<()> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
