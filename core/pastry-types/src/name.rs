/// Returns the key used to decide whether two pastry names are the same.
///
/// The name is trimmed, internal whitespace runs collapse to a single space,
/// and the result is lowercased. `"  Kanel   BULLE "` and `"kanel bulle"`
/// normalize identically.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True when both names normalize to the same key.
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}
