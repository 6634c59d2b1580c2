//! Highlight Cleaner — turns a raw job-description block into discrete bullet points.

/// Lines at or below this trimmed length are treated as headers or noise,
/// not real bullets.
const MIN_HIGHLIGHT_LEN: usize = 20;

/// Splits a raw description into cleaned highlight lines.
///
/// Each line is kept only if its trimmed length exceeds [`MIN_HIGHLIGHT_LEN`];
/// surviving lines have any leading bullet marker stripped. Order is preserved.
pub fn clean_description(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_HIGHLIGHT_LEN)
        .map(|line| strip_bullet_marker(line).to_string())
        .collect()
}

/// Drops everything before the first alphanumeric character.
/// A line with no alphanumeric character at all is returned unchanged.
fn strip_bullet_marker(line: &str) -> &str {
    match line.find(|c: char| c.is_alphanumeric()) {
        Some(idx) => &line[idx..],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_lines_longer_than_threshold() {
        let cleaned = clean_description("Led a team of 5 engineers to deliver X.");
        assert_eq!(cleaned, vec!["Led a team of 5 engineers to deliver X."]);
    }

    #[test]
    fn test_drops_short_lines() {
        let cleaned = clean_description("Short.\nLed a team of 5 engineers to deliver X.");
        assert_eq!(cleaned, vec!["Led a team of 5 engineers to deliver X."]);
    }

    #[test]
    fn test_exactly_twenty_chars_is_dropped() {
        // 20 chars exactly: the filter is strictly greater-than.
        let line = "a".repeat(20);
        assert!(clean_description(&line).is_empty());
        let line = "a".repeat(21);
        assert_eq!(clean_description(&line).len(), 1);
    }

    #[test]
    fn test_strips_leading_bullet_markers() {
        let cleaned = clean_description("• Shipped the payments integration on time");
        assert_eq!(cleaned, vec!["Shipped the payments integration on time"]);

        let cleaned = clean_description("- * Shipped the payments integration on time");
        assert_eq!(cleaned, vec!["Shipped the payments integration on time"]);
    }

    #[test]
    fn test_stripping_is_idempotent() {
        let once = clean_description("• Shipped the payments integration on time");
        let twice = clean_description(&once[0]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_line_without_alphanumerics_is_kept_unchanged() {
        let line = "========================";
        let cleaned = clean_description(line);
        assert_eq!(cleaned, vec![line.to_string()]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(clean_description("").is_empty());
        assert!(clean_description("\n\n\n").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let raw = "Built the ingestion service handling 2M events\n\
                   Migrated the legacy billing stack to Kubernetes\n\
                   Mentored 4 junior engineers through onboarding";
        let cleaned = clean_description(raw);
        assert_eq!(cleaned.len(), 3);
        assert!(cleaned[0].starts_with("Built"));
        assert!(cleaned[1].starts_with("Migrated"));
        assert!(cleaned[2].starts_with("Mentored"));
    }

    #[test]
    fn test_leading_whitespace_counts_toward_trim_not_length() {
        // Trimmed to 19 chars, so it falls under the threshold.
        let cleaned = clean_description("      nineteen chars here");
        assert!(cleaned.is_empty());
        // And a padded long line survives without its indentation.
        let cleaned = clean_description("    - Led a team of 5 engineers to deliver X.");
        assert_eq!(cleaned, vec!["Led a team of 5 engineers to deliver X."]);
    }
}
