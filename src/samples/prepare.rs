//! Curation helpers for raw sample exports. The raw tables mark missing
//! values with placeholder strings and carry assorted encoding artifacts;
//! everything here normalizes toward the engine's schema, where absence is
//! an empty field.

/// Placeholders raw exports use where a value is missing.
pub fn is_missing_marker(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == ".." || v.contains("n/a")
}

pub fn curate_y_label(raw: &str) -> Option<String> {
    let v = raw.trim();
    if is_missing_marker(v) {
        return None;
    }
    Some(v.to_string())
}

/// mtDNA labels need more care: unclear placements are written as a closest
/// group plus candidate mutation sites, and some rows carry mangled
/// non-breaking spaces or stray trailing punctuation.
pub fn curate_mt_label(raw: &str) -> Option<String> {
    let v = raw.trim();
    if is_missing_marker(v) {
        return None;
    }
    let cleaned: String = v.chars().filter(|c| !matches!(c, '¬' | '†')).collect();
    let cleaned = cleaned.replace("..", "");
    let cleaned = cleaned.trim_end_matches('\'').trim();
    if cleaned.is_empty() {
        return None;
    }
    // a label listing mutation sites is not a resolved placement
    if cleaned
        .chars()
        .any(|c| matches!(c, '-' | '+' | '*' | '/' | '_') || c.is_whitespace())
    {
        return None;
    }
    Some(cleaned.to_string())
}

/// Country values sometimes end in stray whitespace that would break the
/// exact-match key.
pub fn curate_country(raw: &str) -> String {
    raw.trim_end().to_string()
}

pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let v = raw.trim();
    if is_missing_marker(v) {
        return None;
    }
    v.parse().ok()
}

/// Raw ages count years before 1950 CE; the engine's scale counts from
/// 2000 CE.
pub fn shift_age_to_2000(raw: &str) -> Option<f64> {
    let v = raw.trim();
    if is_missing_marker(v) {
        return None;
    }
    v.parse::<f64>().ok().map(|bp| bp + 50.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_markers_are_recognized() {
        assert!(is_missing_marker(".."));
        assert!(is_missing_marker(""));
        assert!(is_missing_marker("  "));
        assert!(is_missing_marker("n/a"));
        assert!(!is_missing_marker("R1b"));
    }

    #[test]
    fn mt_labels_with_mutation_sites_are_dropped() {
        assert_eq!(curate_mt_label("U5a1a1+16093"), None);
        assert_eq!(curate_mt_label("H1 or H5"), None);
        assert_eq!(curate_mt_label("J1c-T152C"), None);
    }

    #[test]
    fn mt_label_artifacts_are_stripped() {
        assert_eq!(curate_mt_label("U5a1a1¬†"), Some("U5a1a1".to_string()));
        assert_eq!(curate_mt_label("M3a1b.."), Some("M3a1b".to_string()));
        assert_eq!(curate_mt_label("H1c5a'"), Some("H1c5a".to_string()));
    }

    #[test]
    fn country_keeps_leading_spaces_only_trailing_trimmed() {
        assert_eq!(curate_country("Sweden  "), "Sweden");
        assert_eq!(curate_country("Sweden"), "Sweden");
    }

    #[test]
    fn ages_shift_from_1950_to_2000_scale() {
        assert_eq!(shift_age_to_2000("1000"), Some(1050.0));
        assert_eq!(shift_age_to_2000(".."), None);
    }
}
