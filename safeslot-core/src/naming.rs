//! Identifier sanitization and case utilities.

/// Prefix applied to names that would otherwise start with a digit.
pub const DEFAULT_PREFIX: &str = "x_";

/// Rust reserved keywords that cannot be used as plain identifiers
/// Source: https://doc.rust-lang.org/reference/keywords.html
pub const RUST_KEYWORDS: &[&str] = &[
    // Strict keywords (2024 edition)
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
    // Reserved keywords (may be used in future)
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
];

/// Keywords that are not accepted as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Map an arbitrary name to a safe identifier using [`DEFAULT_PREFIX`].
///
/// See [`sanitize_with_prefix`].
pub fn sanitize(original: &str) -> String {
    sanitize_with_prefix(original, DEFAULT_PREFIX)
}

/// Map an arbitrary name to a safe identifier.
///
/// Every maximal run of characters outside `[A-Za-z0-9_]` collapses into a
/// single underscore. If the result starts with a digit, `prefix` is prepended
/// and the whole string goes through [`underscore`]. Anything else is returned
/// as collapsed, with case preserved.
///
/// ```
/// use safeslot_core::sanitize;
///
/// assert_eq!(sanitize("a/b"), "a_b");
/// assert_eq!(sanitize("5'"), "x_5_");
/// ```
///
/// Distinct inputs may map to the same identifier (`"a/b"` and `"a-b"`);
/// no attempt is made to disambiguate them here.
pub fn sanitize_with_prefix(original: &str, prefix: &str) -> String {
    let collapsed = collapse_invalid_runs(original);
    match collapsed.chars().next() {
        Some(first) if first.is_ascii_digit() => underscore(&format!("{}{}", prefix, collapsed)),
        _ => collapsed,
    }
}

/// Single pass over `s`: identifier characters are copied through, each run
/// of anything else emits one underscore.
fn collapse_invalid_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if is_identifier_char(c) {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check whether `name` is a safe identifier: non-empty, not digit-leading,
/// and made only of ASCII letters, digits and underscores.
pub fn is_safe_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(is_identifier_char)
        }
        _ => false,
    }
}

/// Convert spaces to underscores (e.g., "my schema" -> "my_schema").
///
/// Case is preserved and nothing else is touched.
pub fn underscore(s: &str) -> String {
    s.replace(' ', "_")
}

/// Convert a name to an upper camel case type name (e.g., "named_thing" -> "NamedThing").
///
/// Words are split on anything that is not alphanumeric. Only the first
/// character of each word changes case.
pub fn camelcase(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Check if a name is a Rust reserved keyword
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Turn a safe identifier into a Rust field identifier.
///
/// Keywords become raw identifiers (`type` -> `r#type`). Names that cannot be
/// raw identifiers get a trailing underscore (`self` -> `self_`).
pub fn rust_field_ident(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) {
        format!("{}_", name)
    } else if is_rust_keyword(name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}
