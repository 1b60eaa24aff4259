//! `afflink convert`, `afflink brands`, and `afflink shell` handlers.

use std::io::{IsTerminal, Write};
use std::sync::Arc;

use afflink_client::{KeyValueStore, LoadedBrands, Session};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::clipboard::copy_result;
use crate::messages::{convert_error_message, load_outcome_message, NO_KEY_HINT};

/// Loads brands for the stored key, failing with a readable message when no
/// key is stored or it did not validate.
async fn ensure_loaded<S: KeyValueStore>(
    session: &Session<S>,
) -> anyhow::Result<Arc<LoadedBrands>> {
    let outcome = session
        .load_stored()
        .await?
        .ok_or_else(|| anyhow::anyhow!(NO_KEY_HINT))?;
    if !outcome.is_valid_key() {
        anyhow::bail!(load_outcome_message(&outcome));
    }
    session
        .loaded()
        .ok_or_else(|| anyhow::anyhow!(load_outcome_message(&outcome)))
}

/// Converts a single URL and prints the tracking link.
///
/// # Errors
///
/// Returns an error if brands cannot be loaded or the URL cannot be
/// converted. A clipboard failure is reported but not returned.
pub(crate) async fn run_convert<S: KeyValueStore>(
    session: &Session<S>,
    url: &str,
    copy: bool,
) -> anyhow::Result<()> {
    ensure_loaded(session).await?;
    let tracking_url = session
        .convert(url)
        .map_err(|e| anyhow::anyhow!(convert_error_message(&e)))?;
    println!("{tracking_url}");
    if copy {
        copy_result(&tracking_url, true);
    }
    Ok(())
}

/// Lists indexed brands as `domain<TAB>name`.
///
/// # Errors
///
/// Returns an error if brands cannot be loaded.
pub(crate) async fn run_brands<S: KeyValueStore>(session: &Session<S>) -> anyhow::Result<()> {
    let loaded = ensure_loaded(session).await?;
    let mut out = std::io::stdout().lock();
    for (domain, entry) in loaded.index.iter() {
        writeln!(out, "{domain}\t{}", entry.name)?;
    }
    eprintln!(
        "{} of {} brands have a convertible domain",
        loaded.index.len(),
        loaded.offer_count
    );
    Ok(())
}

/// Loads brands once, then converts URLs from stdin until EOF.
///
/// # Errors
///
/// Returns an error if brands cannot be loaded or stdin/stdout fail.
/// Conversion failures are printed and the loop continues.
pub(crate) async fn run_shell<S: KeyValueStore>(
    session: &Session<S>,
    copy: bool,
) -> anyhow::Result<()> {
    let loaded = ensure_loaded(session).await?;
    eprintln!(
        "{} brands loaded; paste a URL per line, Ctrl-D to quit",
        loaded.index.len()
    );

    let prompt = std::io::stdin().is_terminal();
    let reader = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    let converted = shell_loop(session, reader, &mut out, prompt, copy).await?;
    tracing::debug!(converted, "shell finished");
    Ok(())
}

/// Converts each line of `reader`, writing results and error messages to
/// `out`. Returns the number of successful conversions.
pub(crate) async fn shell_loop<S, R, W>(
    session: &Session<S>,
    reader: R,
    out: &mut W,
    prompt: bool,
    copy: bool,
) -> anyhow::Result<usize>
where
    S: KeyValueStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    let mut converted = 0;

    loop {
        if prompt {
            eprint!("> ");
            std::io::stderr().flush()?;
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match session.convert(line.trim()) {
            Ok(tracking_url) => {
                writeln!(out, "{tracking_url}")?;
                converted += 1;
                if copy {
                    copy_result(&tracking_url, false);
                }
            }
            Err(e) => writeln!(out, "error: {}", convert_error_message(&e))?,
        }
        out.flush()?;
    }

    Ok(converted)
}
