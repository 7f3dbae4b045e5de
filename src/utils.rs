//! Header parsing utilities

use regex::Regex;
use std::sync::LazyLock;

/// Permissive `Content-Disposition` filename grammar.
///
/// Accepts, in priority order:
/// 1. a quoted filename (`filename="a b.lua"`, single or double quotes,
///    optionally backslash-escaped),
/// 2. an RFC 5987 extended filename (`filename*=UTF-8''report.lua`),
///    where the `charset'lang'` prefix is skipped,
/// 3. a bare token up to the next `;` or end of input.
///
/// The `regex` crate has no backreferences, so the two quote characters
/// are spelled out as separate alternatives instead of `(['"]).*?\1`.
#[allow(clippy::expect_used)]
static FILENAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)filename[^;=\n]*=(?:\\?'([^'\n]*?)\\?'|\\?"([^"\n]*?)\\?"|(?:\S+'.*?')?([^;\n]*))"#,
    )
    .expect("hard-coded filename pattern compiles")
});

/// Extract a filename from a `Content-Disposition` header value
///
/// Returns `None` when the header carries no usable `filename`
/// parameter; callers substitute their own default name. Quoted
/// captures win over bare tokens. Percent-encoded sequences in the
/// extended form are preserved as literal text, never decoded.
///
/// # Examples
///
/// ```
/// use luraph::utils::extract_filename;
///
/// assert_eq!(
///     extract_filename(r#"attachment; filename="a b.lua""#),
///     Some("a b.lua".to_string())
/// );
/// assert_eq!(
///     extract_filename("attachment; filename=report.txt"),
///     Some("report.txt".to_string())
/// );
/// assert_eq!(extract_filename("attachment"), None);
/// ```
pub fn extract_filename(header: &str) -> Option<String> {
    let captures = FILENAME_REGEX.captures(header)?;

    // Quoted capture (either quote style) wins over the bare token
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .or_else(|| captures.get(3))
        .map(|m| m.as_str().to_string())
        .filter(|name| !name.is_empty())
}
