//! Filesystem-safe filename sanitization.

use unicode_normalization::UnicodeNormalization;

/// Linux NAME_MAX; longer names are cut at a char boundary.
const NAME_MAX: usize = 255;

/// Sanitizes a raw filename into a single safe path segment.
///
/// - Decomposes to NFKD and drops non-ASCII characters (`café` → `cafe`)
/// - Turns `/` and `\` into spaces, then joins whitespace runs with `_`
///   (`\` is a separator on every platform, so `My\Pics` becomes `My_Pics`,
///   not the `MyPics` a POSIX-only sanitizer would give)
/// - Keeps only ASCII letters, digits, `_`, `.` and `-` (drops NUL and control chars)
/// - Trims leading/trailing dots and underscores, and leading dashes
/// - Limits length to 255 bytes
///
/// The result may be empty; callers treat that as "no usable name".
pub fn sanitize_filename(name: &str) -> String {
    let ascii: String = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let mut out = String::with_capacity(ascii.len());
    for (i, word) in ascii.split_whitespace().enumerate() {
        if i > 0 {
            out.push('_');
        }
        out.extend(
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')),
        );
    }

    let trimmed = out
        .trim_matches(|c| c == '.' || c == '_')
        .trim_start_matches(|c| c == '-' || c == '.' || c == '_');

    // Output is pure ASCII, so any byte index is a char boundary.
    let end = trimmed.len().min(NAME_MAX);
    trimmed[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plain_names() {
        assert_eq!(sanitize_filename("report.pdf"), "report.pdf");
        assert_eq!(sanitize_filename("my-file_v2.tar.gz"), "my-file_v2.tar.gz");
    }

    #[test]
    fn joins_whitespace_with_underscore() {
        assert_eq!(sanitize_filename("Report 1.PDF"), "Report_1.PDF");
        assert_eq!(sanitize_filename("a \t  b.txt"), "a_b.txt");
    }

    #[test]
    fn removes_slash_and_backslash() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("a/b\\c.txt"), "a_b_c.txt");
        assert_eq!(sanitize_filename("My\\Pics"), "My_Pics");
    }

    #[test]
    fn trims_dots_underscores_and_leading_dashes() {
        assert_eq!(sanitize_filename("  ..  file.txt  ..  "), "file.txt");
        assert_eq!(sanitize_filename(".bashrc"), "bashrc");
        assert_eq!(sanitize_filename("--rf.sh"), "rf.sh");
        assert_eq!(sanitize_filename("_-_x"), "x");
    }

    #[test]
    fn control_chars_and_symbols_dropped() {
        assert_eq!(sanitize_filename("file\x00name.txt"), "filename.txt");
        assert_eq!(sanitize_filename("what?!*.md"), "what.md");
    }

    #[test]
    fn transliterates_via_decomposition() {
        assert_eq!(sanitize_filename("café.txt"), "cafe.txt");
        assert_eq!(sanitize_filename("日本"), "");
    }

    #[test]
    fn empty_and_unsafe_only() {
        assert_eq!(sanitize_filename(""), "");
        assert_eq!(sanitize_filename(".."), "");
        assert_eq!(sanitize_filename("   "), "");
        assert_eq!(sanitize_filename("///"), "");
    }

    #[test]
    fn limits_length() {
        let long = "a".repeat(400) + ".txt";
        assert_eq!(sanitize_filename(&long).len(), 255);
    }
}
