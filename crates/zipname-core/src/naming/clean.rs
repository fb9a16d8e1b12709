//! Optional prefix normalization (the `cleanup` policy toggles).

use crate::policy::CleanupOptions;

/// Applies the enabled cleanup transforms to `text`.
///
/// Transforms always run in the order spaces → symbols → lowercase, each on
/// the output of the previous one. The result may be empty.
pub fn clean(text: &str, options: CleanupOptions) -> String {
    let mut result = text.to_string();

    if options.spaces {
        result = collapse_whitespace(&result);
    }

    if options.symbols {
        result.retain(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    }

    if options.lowercase {
        result = result.to_lowercase();
    }

    result
}

/// Replaces every maximal whitespace run with a single `_`.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
