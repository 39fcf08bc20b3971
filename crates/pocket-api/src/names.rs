//! Product name cleanup shared by table rows and chat context.

/// Display name: text before the first `-`, `–`, `:` or `+`, without a
/// leading `LANEIGE ` brand word.
#[must_use]
pub fn normalize_product_name(name: &str) -> String {
    let head = name.split(['-', '–', ':', '+']).next().unwrap_or(name);
    strip_brand(head).trim().to_string()
}

/// Chat-context name: like [`normalize_product_name`] but also cut at `|`.
#[must_use]
pub fn context_product_name(name: &str) -> String {
    let head = name.split(['-', '–', ':', '+', '|']).next().unwrap_or(name);
    strip_brand(head).trim().to_string()
}

/// Ranking-context name: cut at separators, brand kept.
#[must_use]
pub fn ranking_product_name(name: &str) -> String {
    name.split(['-', '–', ':', '+', '|'])
        .next()
        .unwrap_or(name)
        .trim()
        .to_string()
}

fn strip_brand(name: &str) -> &str {
    const BRAND: &str = "laneige";
    let Some(prefix) = name.get(..BRAND.len()) else {
        return name;
    };
    let rest = &name[BRAND.len()..];
    if prefix.eq_ignore_ascii_case(BRAND) && rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        name
    }
}
