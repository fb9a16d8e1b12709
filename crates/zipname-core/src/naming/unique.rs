//! Per-batch collision resolution.

use std::collections::HashSet;

use super::split_extension;

/// Returns a name not yet in `used` and records it there.
///
/// A fresh `candidate` is returned unchanged. On collision the candidate is
/// split at its extension and `base_2.ext`, `base_3.ext`, ... are probed
/// until a free name turns up. Since `used` is finite this always terminates,
/// after at most `used.len() + 1` probes.
pub fn resolve_unique(used: &mut HashSet<String>, candidate: String) -> String {
    if !used.contains(&candidate) {
        used.insert(candidate.clone());
        return candidate;
    }

    let (base, ext) = split_extension(&candidate);
    let mut i: u64 = 2;
    loop {
        let alt = format!("{base}_{i}{ext}");
        if !used.contains(&alt) {
            tracing::debug!(candidate = %candidate, resolved = %alt, "name collision resolved");
            used.insert(alt.clone());
            return alt;
        }
        i += 1;
    }
}
