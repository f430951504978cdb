//! Boilerplate stripping for resolved names.
//!
//! Locale labels ("район", "станция метро", "метро", "м.") are removed
//! case-insensitively so the pipeline returns bare proper nouns.
//! Pure functions; idempotent on already-clean names.

/// Metro phrases, tried longest-first so "станция метро" is removed
/// as a whole before "метро" alone could match.
const METRO_LABELS: &[&str] = &["станция метро", "метро", "м."];

const DISTRICT_LABEL: &str = "район";

/// Strip a leading "район"/"Район" label (with following whitespace) and
/// trim. Names without the label pass through unchanged.
pub fn strip_district_label(name: &str) -> String {
    let trimmed = name.trim();
    if let Some((_, end)) = find_label(trimmed, DISTRICT_LABEL) {
        // Only a prefix counts, and only when a separator follows —
        // "Районная улица" must stay intact.
        if trimmed.to_lowercase().starts_with(DISTRICT_LABEL)
            && trimmed[end..].starts_with(char::is_whitespace)
        {
            return trimmed[end..].trim().to_string();
        }
    }
    trimmed.to_string()
}

/// Remove the first matching metro phrase together with surrounding
/// whitespace. When stripping would leave nothing (the name *is* the
/// label), the original name is returned instead.
pub fn strip_metro_label(name: &str) -> String {
    for label in METRO_LABELS {
        if let Some((start, end)) = find_label(name, label) {
            let head = name[..start].trim_end();
            let tail = name[end..].trim_start();
            let stripped = if head.is_empty() || tail.is_empty() {
                format!("{}{}", head, tail).trim().to_string()
            } else {
                format!("{} {}", head, tail)
            };
            if stripped.is_empty() {
                return name.trim().to_string();
            }
            return stripped;
        }
    }
    name.trim().to_string()
}

/// Case-insensitive substring search returning byte offsets into the
/// original string. Russian letters keep their UTF-8 width under
/// lowercasing, so offsets in the lowered copy line up with the original.
fn find_label(haystack: &str, label: &str) -> Option<(usize, usize)> {
    let lowered = haystack.to_lowercase();
    if lowered.len() != haystack.len() {
        return None;
    }
    let start = lowered.find(label)?;
    let end = start + label.len();
    if haystack.is_char_boundary(start) && haystack.is_char_boundary(end) {
        Some((start, end))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_district_prefix() {
        assert_eq!(strip_district_label("район Хамовники"), "Хамовники");
        assert_eq!(strip_district_label("Район Хамовники"), "Хамовники");
        assert_eq!(strip_district_label("РАЙОН Хамовники"), "Хамовники");
    }

    #[test]
    fn test_strip_district_no_label() {
        assert_eq!(strip_district_label("Хамовники"), "Хамовники");
        assert_eq!(
            strip_district_label("Центральный административный округ"),
            "Центральный административный округ"
        );
    }

    #[test]
    fn test_strip_district_idempotent() {
        let once = strip_district_label("район Арбат");
        assert_eq!(strip_district_label(&once), once);
    }

    #[test]
    fn test_strip_metro_station_phrase() {
        assert_eq!(strip_metro_label("станция метро Тверская"), "Тверская");
        assert_eq!(strip_metro_label("Станция метро Тверская"), "Тверская");
    }

    #[test]
    fn test_strip_metro_word() {
        assert_eq!(strip_metro_label("метро Арбатская"), "Арбатская");
        assert_eq!(strip_metro_label("м. Арбатская"), "Арбатская");
    }

    #[test]
    fn test_strip_metro_infix() {
        assert_eq!(strip_metro_label("Охотный Ряд метро"), "Охотный Ряд");
    }

    #[test]
    fn test_strip_metro_label_only_returns_original() {
        assert_eq!(strip_metro_label("метро"), "метро");
        assert_eq!(strip_metro_label("станция метро"), "станция метро");
    }

    #[test]
    fn test_strip_metro_idempotent() {
        let once = strip_metro_label("станция метро Тверская");
        assert_eq!(strip_metro_label(&once), once);
    }

    #[test]
    fn test_strip_metro_no_label() {
        assert_eq!(strip_metro_label("Тверская"), "Тверская");
    }
}
