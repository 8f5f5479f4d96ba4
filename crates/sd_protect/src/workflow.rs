//! The seal/open workflow.
//!
//! Failure policy: an unknown clearance level, empty content, a missing
//! stored key, or a failed decrypt all abort before any document mutation.
//! The only non-atomic step is the out-of-line sink, which replaces the
//! stored entry before swapping in the placeholder — a host failure between
//! the two leaves the entry updated and the visible content untouched.

use sd_crypto::hash::content_digest;
use sd_crypto::{open, seal};
use sd_doc::{ContentEnvelope, DocumentHost, Table};

use crate::config::ClearanceKeys;
use crate::error::ProtectError;

/// What part of the document an operation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Selection,
    Body,
}

/// Where sealed content goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// Replace the covered content with the blob itself.
    Inline,
    /// Store the blob out of line and leave `key` as a visible placeholder.
    Stored { key: String },
}

/// Where sealed content is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The covered content is the blob.
    Inline,
    /// Look the blob up in the store under `key`.
    Stored { key: String },
}

fn read_scope<D: DocumentHost>(doc: &D, scope: Scope) -> Result<ContentEnvelope, ProtectError> {
    Ok(match scope {
        Scope::Selection => doc.selection()?,
        Scope::Body => doc.body()?,
    })
}

fn write_scope<D: DocumentHost>(
    doc: &mut D,
    scope: Scope,
    content: ContentEnvelope,
) -> Result<(), ProtectError> {
    match scope {
        Scope::Selection => doc.replace_selection(content)?,
        Scope::Body => doc.replace_body(content)?,
    }
    Ok(())
}

fn secret_for<'k>(keys: &'k ClearanceKeys, level: &str) -> Result<&'k str, ProtectError> {
    keys.secret(level)
        .ok_or_else(|| ProtectError::UnknownClearance(level.to_string()))
}

/// Seal the covered content under a clearance level.
pub fn encrypt<D: DocumentHost>(
    doc: &mut D,
    keys: &ClearanceKeys,
    level: &str,
    scope: Scope,
    sink: &Sink,
) -> Result<(), ProtectError> {
    let secret = secret_for(keys, level)?;

    let content = read_scope(doc, scope)?;
    if content.is_empty() {
        return Err(ProtectError::EmptyContent);
    }

    let json = content.to_json()?;
    tracing::debug!(digest = %content_digest(json.as_bytes()), "content digest before sealing");
    let blob = seal(secret, json.as_bytes())?;

    match sink {
        Sink::Inline => write_scope(doc, scope, ContentEnvelope::plain(blob))?,
        Sink::Stored { key } => {
            sd_store::replace(doc, key, &blob)?;
            write_scope(doc, scope, ContentEnvelope::plain(key.clone()))?;
        }
    }

    tracing::info!(level, ?scope, "content sealed");
    Ok(())
}

/// Recover sealed content and write it back, tables included.
pub fn decrypt<D: DocumentHost>(
    doc: &mut D,
    keys: &ClearanceKeys,
    level: &str,
    scope: Scope,
    source: &Source,
) -> Result<(), ProtectError> {
    let secret = secret_for(keys, level)?;

    let blob = match source {
        Source::Inline => read_scope(doc, scope)?.text.trim().to_string(),
        Source::Stored { key } => sd_store::get(doc, key)?
            .ok_or_else(|| ProtectError::CiphertextNotFound(key.clone()))?,
    };
    if blob.is_empty() {
        return Err(ProtectError::EmptyContent);
    }

    let plaintext = open(secret, &blob).map_err(|err| {
        tracing::debug!(%err, "open failed");
        ProtectError::DecryptFailed
    })?;
    let json = std::str::from_utf8(&plaintext).map_err(|_| ProtectError::DecryptFailed)?;
    if json.is_empty() {
        return Err(ProtectError::DecryptFailed);
    }
    tracing::debug!(digest = %content_digest(json.as_bytes()), "content digest after opening");

    let content = ContentEnvelope::from_json(json)?;
    write_scope(doc, scope, content)?;

    tracing::info!(level, ?scope, "content opened");
    Ok(())
}

/// Keys currently stored in the document, for the key picker.
pub fn list_keys<D: DocumentHost>(doc: &D) -> Result<Vec<String>, ProtectError> {
    Ok(sd_store::list_keys(doc)?)
}

/// Remove a stored entry. Returns whether anything was deleted.
pub fn delete_key<D: DocumentHost>(doc: &mut D, key: &str) -> Result<bool, ProtectError> {
    Ok(sd_store::delete(doc, key)?)
}

/// Append a greeting paragraph and a small table — manual-testing content.
pub fn insert_sample_content<D: DocumentHost>(doc: &mut D) -> Result<(), ProtectError> {
    doc.append_paragraph("Hello world! Hello world!")?;
    let table = Table::new(vec![
        vec!["Name".to_string(), "Age".to_string()],
        vec!["Alice".to_string(), "30".to_string()],
        vec!["Bob".to_string(), "25".to_string()],
    ])
    .expect("static sample grid is rectangular");
    doc.append_table(table)?;
    Ok(())
}
