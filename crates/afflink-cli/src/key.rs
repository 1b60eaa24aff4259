//! `afflink key` handlers.

use afflink_client::{KeyValueStore, Session};

use crate::messages::{load_outcome_message, redact_key};

/// Stores a new API key and reports whether it validated.
///
/// # Errors
///
/// Returns an error if the key is blank, cannot be stored, or was not
/// accepted upstream. The key stays stored in the last case.
pub(crate) async fn run_key_set<S: KeyValueStore>(
    session: &Session<S>,
    key: &str,
) -> anyhow::Result<()> {
    let outcome = session.save_key(key).await?;
    let message = load_outcome_message(&outcome);
    if !outcome.is_valid_key() {
        anyhow::bail!(message);
    }
    println!("{message}");
    Ok(())
}

/// Prints the stored key (redacted) and the state of its brand list.
///
/// # Errors
///
/// Returns an error if the key store cannot be read.
pub(crate) async fn run_key_show<S: KeyValueStore>(session: &Session<S>) -> anyhow::Result<()> {
    let Some(key) = session.stored_key()? else {
        println!("no API key stored");
        return Ok(());
    };
    println!("API key: {}", redact_key(&key));

    let outcome = session.validate_and_load(&key).await;
    println!("{}", load_outcome_message(&outcome));
    if let Some(loaded) = session.loaded() {
        println!(
            "{} brands indexed (fetched {})",
            loaded.index.len(),
            loaded.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    Ok(())
}

/// Deletes the stored key.
///
/// # Errors
///
/// Returns an error if the key file cannot be removed.
pub(crate) fn run_key_clear<S: KeyValueStore>(session: &Session<S>) -> anyhow::Result<()> {
    session.clear()?;
    println!("API key cleared");
    Ok(())
}
