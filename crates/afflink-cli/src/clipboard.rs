use anyhow::Context;
use arboard::Clipboard;

use crate::messages::copied_message;

/// X11 and Wayland serve the clipboard from the process that set it, so a
/// copy made by a process that then exits is lost unless a clipboard manager
/// takes it over.
const COPY_OUTLIVES_PROCESS: bool = !cfg!(target_os = "linux");

/// Copy text to the system clipboard.
///
/// Fails in headless sessions or when the platform denies access; callers
/// report the failure and carry on.
pub(crate) fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new().context("failed to access system clipboard")?;
    clipboard
        .set_text(text)
        .context("failed to copy text to clipboard")?;
    Ok(())
}

/// Copies a conversion result, reporting failure on stderr without failing
/// the command. `exiting` marks a copy made just before the process exits.
pub(crate) fn copy_result(text: &str, exiting: bool) {
    match copy_to_clipboard(text) {
        Ok(()) => eprintln!("{}", copied_message(exiting && !COPY_OUTLIVES_PROCESS)),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed");
            eprintln!("could not copy to clipboard ({e:#}); copy the link manually");
        }
    }
}
