/// Trims `input` and wraps it in `prefix`/`postfix` when those are non-empty.
/// `None` or an empty input yields `""` without adding either.
///
/// ```
/// use nubes_core::util::strings::safe_trim;
/// assert_eq!(safe_trim(Some("  sample text  "), Some("PRE-"), None), "PRE-sample text");
/// assert_eq!(safe_trim(None, Some("PRE-"), None), "");
/// ```
pub fn safe_trim(input: Option<&str>, prefix: Option<&str>, postfix: Option<&str>) -> String {
    let input = match input {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };

    let mut out = String::new();
    if let Some(p) = prefix.filter(|p| !p.is_empty()) {
        out.push_str(p);
    }
    out.push_str(input.trim());
    if let Some(p) = postfix.filter(|p| !p.is_empty()) {
        out.push_str(p);
    }
    out
}
