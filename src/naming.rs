//! Suggested output file names

use chrono::Local;

const MAX_STEM_CHARS: usize = 16;

/// Derive a file name stem from the text being encoded.
///
/// Keeps only the alphanumeric characters of the trimmed text, truncated to
/// 16 characters with a trailing `_` marker when something was cut off. When
/// nothing usable remains, falls back to a `qr_<YYYYMMDD_HHMMSS>` stem from
/// the local clock.
pub fn suggest_file_name(text: &str) -> String {
    let clean: String = text
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    if clean.is_empty() {
        return format!("qr_{}", Local::now().format("%Y%m%d_%H%M%S"));
    }

    if clean.chars().count() > MAX_STEM_CHARS {
        let mut stem: String = clean.chars().take(MAX_STEM_CHARS).collect();
        stem.push('_');
        stem
    } else {
        clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_non_alphanumerics() {
        assert_eq!(suggest_file_name("My Wallet 123!"), "MyWallet123");
    }

    #[test]
    fn test_truncates_with_marker() {
        let stem = suggest_file_name("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
        assert_eq!(stem, "bc1qw508d6qejxtd_");
        assert_eq!(stem.chars().count(), MAX_STEM_CHARS + 1);
    }

    #[test]
    fn test_exactly_sixteen_chars_untouched() {
        assert_eq!(suggest_file_name("a234567890123456"), "a234567890123456");
    }

    #[test]
    fn test_timestamp_fallback() {
        for input in ["", "   ", "!!! ***"] {
            let stem = suggest_file_name(input);
            let rest = stem.strip_prefix("qr_").expect("qr_ prefix");
            // qr_YYYYMMDD_HHMMSS
            assert_eq!(rest.len(), 15);
            assert_eq!(rest.as_bytes()[8], b'_');
            assert!(
                rest.chars()
                    .enumerate()
                    .all(|(i, c)| i == 8 || c.is_ascii_digit()),
                "unexpected stem: {stem}"
            );
        }
    }
}
