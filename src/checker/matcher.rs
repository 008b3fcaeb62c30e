use crate::catalog::Catalog;

/// Map a free-text package name to a catalog product key.
///
/// Tried in strict priority order, first hit wins, all case-insensitive:
///
/// 1. Exact match of the lowercased name against a catalog key.
/// 2. Substring match: the first key in catalog order that contains the
///    name or is contained by it.
/// 3. Normalized variants (dash-stripped, underscore-stripped,
///    dot-stripped, first whitespace token), each tried exact-then-substring
///    before moving to the next.
///
/// Substring ties resolve to the first key in the snapshot's iteration
/// order; see [`Catalog::keys`] for what that order is.
pub fn match_product(package_name: &str, catalog: &Catalog) -> Option<String> {
    let name = package_name.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }

    if catalog.contains(&name) {
        return Some(name);
    }

    if let Some(key) = substring_match(&name, catalog) {
        return Some(key.to_string());
    }

    for variant in variants(&name) {
        // An empty variant is a substring of every key; never match on it.
        if variant.is_empty() {
            continue;
        }
        if catalog.contains(&variant) {
            return Some(variant);
        }
        if let Some(key) = substring_match(&variant, catalog) {
            return Some(key.to_string());
        }
    }

    None
}

/// First key in catalog order related to `needle` by containment, in
/// either direction.
fn substring_match<'a>(needle: &str, catalog: &'a Catalog) -> Option<&'a str> {
    catalog
        .keys()
        .find(|key| key.contains(needle) || needle.contains(key))
}

/// Spelling variants of an already-lowercased name, in fixed order.
fn variants(name: &str) -> [String; 4] {
    [
        name.replace('-', ""),
        name.replace('_', ""),
        name.replace('.', ""),
        name.split_whitespace().next().unwrap_or(name).to_string(),
    ]
}
