//! Turns provider titles and category names into names a media library
//! scraper can match: language prefixes removed, genres title-cased,
//! file names safe on every common filesystem.

use crate::utils::constants::{CONSTANTS, MAX_FILENAME_LENGTH, UNKNOWN_NAME};
use crate::utils::string_utils::{truncate_string, Capitalize};

/// Removes a leading language code like `EN - ` or `FRA-` and trims the rest.
pub fn clean_title(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }
    CONSTANTS.export_style_config.language_prefix.replace(title, "").trim().to_string()
}

// Hyphenated words ("Sci-Fi") are split into separate capitalized words.
fn title_case_genre(token: &str) -> String {
    token
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|word| !word.is_empty())
        .map(|word| word.capitalize())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Extracts the genres of a provider category name.
///
/// `"US - Action/Sci-Fi (movie)"` becomes `["Action", "Sci Fi"]`.
/// Returns `["Unknown"]` when nothing is left.
pub fn extract_genres(category_name: &str) -> Vec<String> {
    let style = &CONSTANTS.export_style_config;
    let without_prefix = style.language_prefix.replace(category_name, "");
    let genre_text = style.media_type_suffix.replace(&without_prefix, "");
    let genres: Vec<String> = style
        .genre_separator
        .split(&genre_text)
        .map(title_case_genre)
        .filter(|genre| !genre.is_empty())
        .collect();
    if genres.is_empty() {
        vec![UNKNOWN_NAME.to_string()]
    } else {
        genres
    }
}

/// Sanitizes a name for use as a file or directory name.
pub fn sanitize_filename(name: &str) -> String {
    if name.is_empty() {
        return UNKNOWN_NAME.to_string();
    }
    let style = &CONSTANTS.export_style_config;
    let without_illegal = style.illegal_filename_chars.replace_all(name, "");
    let collapsed = style.whitespace.replace_all(&without_illegal, " ");
    let truncated = truncate_string(collapsed.trim(), MAX_FILENAME_LENGTH);
    // trailing dots and spaces are rejected by windows shares
    let sanitized = truncated.trim_end_matches(['.', ' ']);
    if sanitized.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        sanitized.to_string()
    }
}

/// Escapes text for embedding into xml content.
pub fn xml_escape(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    // `&` first, otherwise the other entities get escaped twice
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("EN - Movie Title"), "Movie Title");
        assert_eq!(clean_title("FRA-Le Film"), "Le Film");
        assert_eq!(clean_title("Movie Title"), "Movie Title");
        assert_eq!(clean_title(""), "");
    }

    #[test]
    fn test_clean_title_keeps_other_capital_prefixes() {
        assert_eq!(clean_title("A - Team"), "A - Team");
        assert_eq!(clean_title("ABCD - Stories"), "ABCD - Stories");
        assert_eq!(clean_title("NASA Files"), "NASA Files");
        assert_eq!(clean_title("en - lowercase"), "en - lowercase");
    }

    #[test]
    fn test_extract_genres() {
        assert_eq!(extract_genres("US - Action/Sci-Fi (movie)"), vec!["Action", "Sci Fi"]);
        assert_eq!(extract_genres("EN - drama & CRIME, war (Series)"), vec!["Drama", "Crime", "War"]);
        assert_eq!(extract_genres("Documentary"), vec!["Documentary"]);
    }

    #[test]
    fn test_extract_genres_empty() {
        assert_eq!(extract_genres(""), vec!["Unknown"]);
        assert_eq!(extract_genres("DE - (movie)"), vec!["Unknown"]);
        assert_eq!(extract_genres(" / & , "), vec!["Unknown"]);
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Bad:Name?\"<>"), "BadName");
        assert_eq!(sanitize_filename("   "), "Unknown");
        assert_eq!(sanitize_filename(""), "Unknown");
        assert_eq!(sanitize_filename("Mission:  Impossible\t/ Fallout"), "Mission Impossible Fallout");
        assert_eq!(sanitize_filename("Trailing dots... "), "Trailing dots");
        assert_eq!(sanitize_filename("..."), "Unknown");
    }

    #[test]
    fn test_sanitize_filename_length() {
        let long_name = format!("{}. x", "a".repeat(199));
        let sanitized = sanitize_filename(&long_name);
        assert!(sanitized.chars().count() <= 200);
        assert!(!sanitized.ends_with('.'));
        assert!(!sanitized.ends_with(' '));
        assert_eq!(sanitized, "a".repeat(199));
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("<a & b>"), "&lt;a &amp; b&gt;");
        assert_eq!(xml_escape("Tom's \"Cut\""), "Tom&apos;s &quot;Cut&quot;");
        assert_eq!(xml_escape("&amp;"), "&amp;amp;");
        assert_eq!(xml_escape(""), "");
    }
}
