//! Store operations over a `DocumentHost`.
//!
//! Deletion is whole-fragment: any fragment containing the key is removed in
//! its entirety. That is only safe because `put` writes exactly one fragment
//! per key; co-located siblings written by other tools go with the fragment.

use sd_doc::DocumentHost;

use crate::error::StoreError;
use crate::xml::{encode_fragment, fragment_keys, fragment_value, is_valid_key, STORE_NAMESPACE};

/// Insert a new entry. Rejects keys that are not valid XML element names and
/// keys that are already present — `replace` is the sanctioned update path.
pub fn put<D: DocumentHost>(doc: &mut D, key: &str, value: &str) -> Result<(), StoreError> {
    if !is_valid_key(key) {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    if get(doc, key)?.is_some() {
        return Err(StoreError::DuplicateKey(key.to_string()));
    }
    doc.add_xml_part(&encode_fragment(key, value))?;
    tracing::debug!(key, "stored entry");
    Ok(())
}

/// Value stored under `key`. `None` means the key is absent; a stored empty
/// string comes back as `Some("")`.
pub fn get<D: DocumentHost>(doc: &D, key: &str) -> Result<Option<String>, StoreError> {
    if !is_valid_key(key) {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    for part in doc.xml_parts_in_namespace(STORE_NAMESPACE)? {
        if let Some(value) = fragment_value(&part.xml, key)? {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Delete every fragment containing `key`. Returns whether anything was
/// deleted. Best-effort across fragments: the first host failure aborts with
/// no rollback of fragments already removed.
pub fn delete<D: DocumentHost>(doc: &mut D, key: &str) -> Result<bool, StoreError> {
    if !is_valid_key(key) {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    let parts = doc.xml_parts_in_namespace(STORE_NAMESPACE)?;
    let mut deleted = false;
    for part in parts {
        if fragment_value(&part.xml, key)?.is_some() {
            doc.delete_xml_part(part.id)?;
            deleted = true;
        }
    }
    if deleted {
        tracing::debug!(key, "deleted entry");
    }
    Ok(deleted)
}

/// Delete-then-put. The store's only update operation.
pub fn replace<D: DocumentHost>(doc: &mut D, key: &str, value: &str) -> Result<(), StoreError> {
    if !is_valid_key(key) {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    delete(doc, key)?;
    put(doc, key, value)
}

/// Every key across every fragment in the namespace, de-duplicated,
/// first-seen order.
pub fn list_keys<D: DocumentHost>(doc: &D) -> Result<Vec<String>, StoreError> {
    let mut keys: Vec<String> = Vec::new();
    for part in doc.xml_parts_in_namespace(STORE_NAMESPACE)? {
        for key in fragment_keys(&part.xml)? {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    Ok(keys)
}
