//! Input normalization applied before any record reaches the store.
//!
//! Lookups by code or email are case-insensitive in effect because the
//! stored values are already case-normalized: codes and registration
//! numbers upper, emails lower, person/course/subject names title-cased.

/// Title-case a string: an alphabetic character is upper-cased when it
/// starts a word (the previous character was not alphabetic) and
/// lower-cased otherwise. Leading/trailing whitespace is trimmed.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for ch in input.trim().chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Normalize a code-like value (course code, registration number,
/// class name): trimmed and upper-cased.
pub fn normalize_code(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Normalize an email address: trimmed and lower-cased.
pub fn normalize_email(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Trim free-form text (descriptions, chatbot questions/answers).
pub fn clean(input: &str) -> String {
    input.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("ana maria souza"), "Ana Maria Souza");
        assert_eq!(title_case("SYSTEMS ANALYSIS"), "Systems Analysis");
    }

    #[test]
    fn title_case_restarts_after_non_alphabetic() {
        // A word boundary is any non-alphabetic character, not only a space.
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("jean-luc"), "Jean-Luc");
        assert_eq!(title_case("room 2b"), "Room 2B");
    }

    #[test]
    fn title_case_trims_whitespace() {
        assert_eq!(title_case("  padded  name "), "Padded  Name");
    }

    #[test]
    fn title_case_empty_input() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "");
    }

    #[test]
    fn code_is_trimmed_and_uppercased() {
        assert_eq!(normalize_code(" ads "), "ADS");
        assert_eq!(normalize_code("1a-Morning"), "1A-MORNING");
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(normalize_email(" Ana.Souza@Example.COM "), "ana.souza@example.com");
    }

    #[test]
    fn clean_only_trims() {
        assert_eq!(clean("  keeps Inner  CASE  "), "keeps Inner  CASE");
    }
}
