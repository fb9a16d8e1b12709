//! Batch rename engine.
//!
//! Turns an ordered batch of uploads into ordered, collision-free archive
//! entries. All mutable state lives in a [`RenameSession`] created per call,
//! so one [`RenameEngine`] can serve any number of independent batches.

use std::collections::HashSet;

use serde::Serialize;

use crate::naming::{clean, extension_lowercase, format_name, resolve_unique, sanitize_filename};
use crate::policy::{RenamePolicy, DEFAULT_PREFIX};
use crate::upload::UploadedFile;

/// One file destined for the output archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Name the file arrived with (unsanitized).
    pub source_name: String,
    /// Final, unique entry name.
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Name-only rename result, used for dry runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamedName {
    pub source_name: String,
    pub name: String,
}

/// Mutable per-batch state: names handed out so far and the next counter.
#[derive(Debug)]
pub struct RenameSession {
    used_names: HashSet<String>,
    counter: u64,
}

impl Default for RenameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RenameSession {
    pub fn new() -> Self {
        Self {
            used_names: HashSet::new(),
            counter: 1,
        }
    }

    /// Counter value the next accepted file will get.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Number of names handed out so far.
    pub fn len(&self) -> usize {
        self.used_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used_names.is_empty()
    }
}

/// Renames batches under one fixed policy.
#[derive(Debug, Clone)]
pub struct RenameEngine {
    policy: RenamePolicy,
    prefix: String,
}

impl RenameEngine {
    /// Builds an engine, sanitizing and cleaning the policy prefix once.
    pub fn new(policy: RenamePolicy) -> Self {
        let cleaned = clean(&sanitize_filename(&policy.prefix), policy.cleanup);
        let prefix = if cleaned.is_empty() {
            tracing::debug!(requested = %policy.prefix, "prefix empty after cleanup, using default");
            DEFAULT_PREFIX.to_string()
        } else {
            cleaned
        };
        Self { policy, prefix }
    }

    /// Effective prefix after sanitization and cleanup.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn policy(&self) -> &RenamePolicy {
        &self.policy
    }

    /// Computes the final name for the next file of `session`.
    ///
    /// Returns `None` (and leaves the counter alone) when `raw_name` has no
    /// usable characters after sanitization.
    pub fn next_name(&self, session: &mut RenameSession, raw_name: &str) -> Option<String> {
        let sanitized = sanitize_filename(raw_name);
        if sanitized.is_empty() {
            tracing::debug!(raw_name, "skipping file with unusable name");
            return None;
        }

        let ext = extension_lowercase(&sanitized);
        let candidate = format_name(
            &self.prefix,
            &ext,
            session.counter,
            self.policy.numbering_style,
            i64::try_from(self.policy.digits).unwrap_or(i64::MAX),
        );
        let name = resolve_unique(&mut session.used_names, candidate);
        tracing::debug!(raw_name, counter = session.counter, name = %name, "renamed");
        session.counter += 1;
        Some(name)
    }

    /// Renames a whole batch. Output keeps input order minus dropped files.
    pub fn process<I>(&self, files: I) -> Vec<ArchiveEntry>
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        let mut session = RenameSession::new();
        let mut entries = Vec::new();
        for file in files {
            let Some(name) = self.next_name(&mut session, &file.raw_name) else {
                continue;
            };
            let bytes = file.bytes.unwrap_or_else(|| {
                tracing::warn!(raw_name = %file.raw_name, "unreadable upload, storing empty entry");
                Vec::new()
            });
            entries.push(ArchiveEntry {
                source_name: file.raw_name,
                name,
                bytes,
            });
        }
        entries
    }

    /// Same renaming as [`process`](Self::process) over names only.
    pub fn plan<'a, I>(&self, raw_names: I) -> Vec<RenamedName>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut session = RenameSession::new();
        raw_names
            .into_iter()
            .filter_map(|raw| {
                self.next_name(&mut session, raw).map(|name| RenamedName {
                    source_name: raw.to_string(),
                    name,
                })
            })
            .collect()
    }
}
