//! Breakpoint-token splicing for responsive class names.
//!
//! Utility classes have the shape `prefix-rest`. The responsive variant puts
//! the breakpoint token right after the prefix:
//!
//! ```text
//! text-primary  + md  →  text-md-primary
//! d-inline-flex + lg  →  d-lg-inline-flex     (first hyphen only)
//! clearfix      + md  →  md-clearfix          (no hyphen: prepend)
//! p-3           + ""  →  p-3                  (empty token: identity)
//! ```

/// Inserts `token` into `class` after the class prefix.
///
/// The prefix ends at the first hyphen. A class without a prefix (no hyphen,
/// or a hyphen in first position) gets the token prepended instead. An empty
/// token leaves the class untouched. Never fails.
///
/// # Example
///
/// ```rust
/// use classcraft_render::splice;
///
/// assert_eq!(splice("text-primary", "md"), "text-md-primary");
/// assert_eq!(splice("d-flex", "md"), "d-md-flex");
/// assert_eq!(splice("clearfix", "md"), "md-clearfix");
/// assert_eq!(splice("p-3", ""), "p-3");
/// ```
pub fn splice(class: &str, token: &str) -> String {
    if token.is_empty() {
        return class.to_string();
    }

    let mut out = String::with_capacity(class.len() + token.len() + 1);
    match class.find('-') {
        Some(dash) if dash > 0 => {
            let (prefix, rest) = class.split_at(dash);
            out.push_str(prefix);
            out.push('-');
            out.push_str(token);
            // `rest` keeps its leading hyphen.
            out.push_str(rest);
        }
        _ => {
            out.push_str(token);
            out.push('-');
            out.push_str(class);
        }
    }
    out
}
