use std::collections::HashMap;

use isolang::Language;
use once_cell::sync::Lazy;

/// Language utilities for caption language tags
///
/// The platform reports caption tracks with BCP-47-like tags (`en`,
/// `zh-Hant`, ...). This module resolves display labels for those tags and
/// compares tags when deciding whether a translation pass is needed.
/// Display labels for the caption tags the front end offers.
///
/// Process-wide, read-only. Used only when the platform does not self-report
/// a track name; extend as the front end grows.
static LANGUAGE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("zh-Hant", "繁體中文"),
        ("zh-Hans", "簡體中文"),
        ("zh-TW", "繁體中文"),
        ("zh-CN", "簡體中文"),
        ("en", "英文"),
        ("ja", "日文"),
        ("ko", "韓文"),
        ("es", "西班牙文"),
        ("fr", "法文"),
        ("de", "德文"),
    ])
});

/// Resolve a display label for a caption language tag.
///
/// Precedence: the static label table, then the English name of the primary
/// subtag, then the raw tag itself. Never fails; an unknown tag is its own
/// label.
pub fn label_for_code(code: &str) -> String {
    if let Some(label) = LANGUAGE_LABELS.get(code) {
        return (*label).to_string();
    }

    let primary = primary_subtag(code);
    if let Some(language) = parse_language(&primary.to_lowercase()) {
        return language.to_name().to_string();
    }

    code.to_string()
}

/// Check whether two language tags denote the same language.
///
/// Exact tags match case-insensitively. Tags that both carry script or
/// region subtags only match exactly (`zh-Hant` and `zh-Hans` are distinct
/// translation targets). Otherwise the primary subtags are compared, with
/// ISO 639-1/639-3 forms of the same language treated as equal (`en` matches
/// `eng`).
pub fn codes_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return true;
    }

    if a.contains('-') && b.contains('-') {
        return false;
    }

    let primary_a = primary_subtag(&a);
    let primary_b = primary_subtag(&b);
    if primary_a == primary_b {
        return true;
    }

    matches!(
        (parse_language(primary_a), parse_language(primary_b)),
        (Some(lang_a), Some(lang_b)) if lang_a == lang_b
    )
}

/// Primary subtag of a BCP-47-like tag (`zh-Hant` -> `zh`)
fn primary_subtag(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

/// Parse a bare ISO 639-1 or 639-3 code
fn parse_language(code: &str) -> Option<Language> {
    match code.len() {
        2 => Language::from_639_1(code),
        3 => Language::from_639_3(code),
        _ => None,
    }
}
