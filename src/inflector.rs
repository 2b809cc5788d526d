//! Minimal pluralize/singularize used only for RESTful `resources` naming
//! (spec.md §4.9 resource expansion) — not a general NLP inflector.

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
];

const UNCOUNTABLE: &[&str] = &["data", "series", "info", "equipment", "news"];

pub fn pluralize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    for (singular, plural) in IRREGULAR {
        if lower == *singular {
            return plural.to_string();
        }
    }

    if let Some(stem) = lower.strip_suffix('y') {
        if !ends_with_vowel_before_y(&lower) {
            return format!("{stem}ies");
        }
    }
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{lower}es");
    }
    if let Some(stem) = lower.strip_suffix("fe") {
        return format!("{stem}ves");
    }
    if let Some(stem) = lower.strip_suffix('f') {
        return format!("{stem}ves");
    }

    format!("{lower}s")
}

pub fn singularize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    for (singular, plural) in IRREGULAR {
        if lower == *plural {
            return singular.to_string();
        }
    }

    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = lower.strip_suffix("ves") {
        return format!("{stem}fe");
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if stem.ends_with('s') || stem.ends_with('x') || stem.ends_with('z') || stem.ends_with("ch") || stem.ends_with("sh") {
            return stem.to_string();
        }
    }
    if let Some(stem) = lower.strip_suffix('s') {
        return stem.to_string();
    }

    lower
}

fn ends_with_vowel_before_y(lower: &str) -> bool {
    let bytes = lower.as_bytes();
    if bytes.len() < 2 {
        return false;
    }
    matches!(bytes[bytes.len() - 2], b'a' | b'e' | b'i' | b'o' | b'u')
}
