//! Filename derivation: sanitization, cleanup, numbering and uniqueness.

mod clean;
mod format;
mod sanitize;
mod unique;

pub use clean::clean;
pub use format::format_name;
pub use sanitize::sanitize_filename;
pub use unique::resolve_unique;

/// Splits `name` into `(base, ext)` at the last `.`, keeping the dot in `ext`.
///
/// Leading dots never start an extension, so `".bashrc"` has none.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

/// Lowercased extension of `name` including the dot, or `""` if none.
pub fn extension_lowercase(name: &str) -> String {
    split_extension(name).1.to_lowercase()
}
