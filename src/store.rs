//! Namespaced key-value persistence for the item collection.
//!
//! The whole collection lives under one key as a JSON array. Reads fail open:
//! a missing, unreadable or malformed value is treated as an empty list.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::model::Item;

mod file_store;
mod memory_store;

pub use self::file_store::FileStore;
pub use self::memory_store::MemoryStore;

/// Host storage: string values addressed by string keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reads the collection stored under `namespace`.
///
/// Never fails; every problem is logged and yields an empty collection.
pub fn load_items<S: KeyValueStore + ?Sized>(store: &S, namespace: &str) -> Vec<Item> {
    let raw = match store.get(namespace) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(namespace, "nothing stored yet");
            return Vec::new();
        }
        Err(err) => {
            warn!(namespace, error = %format!("{:#}", err), "unreadable store; starting empty");
            return Vec::new();
        }
    };

    match parse_items(&raw) {
        Ok(items) => items,
        Err(err) => {
            warn!(namespace, error = %format!("{:#}", err), "malformed collection; starting empty");
            Vec::new()
        }
    }
}

/// Serializes `items` and overwrites the value under `namespace`.
pub fn save_items<S: KeyValueStore + ?Sized>(
    store: &mut S,
    namespace: &str,
    items: &[Item],
) -> Result<()> {
    let raw = serde_json::to_string_pretty(items).context("serialize item collection")?;
    store
        .set(namespace, &raw)
        .with_context(|| format!("save namespace {}", namespace))?;
    debug!(namespace, items = items.len(), "saved collection");
    Ok(())
}

/// Parses a stored collection. An array that repeats an id is malformed.
pub fn parse_items(raw: &str) -> Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(raw).context("parse item collection")?;
    let mut seen = HashSet::with_capacity(items.len());
    if let Some(dup) = items.iter().find(|item| !seen.insert(item.id.as_str())) {
        anyhow::bail!("item id {} appears more than once", dup.id);
    }
    Ok(items)
}

/// Keys become file names, so they are limited to a conservative alphabet.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        anyhow::bail!("namespace must not be empty");
    }
    if key == "." || key == ".." {
        anyhow::bail!("namespace {:?} is reserved", key);
    }
    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        anyhow::bail!(
            "namespace {:?} contains {:?} (allowed: letters, digits, '-', '_', '.')",
            key,
            c
        );
    }
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store/adapter_tests.rs"]
mod tests;
