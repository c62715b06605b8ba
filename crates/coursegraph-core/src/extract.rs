//! Course-code extraction from free-text prerequisite descriptions.
//!
//! A course code is 2-4 uppercase ASCII letters, at least one whitespace
//! character, then exactly four ASCII digits, with a word boundary on both
//! sides. `"COMP 1130"` and `"MATH\t1000"` match; `"XCOMP 1130"`,
//! `"COMP 11300"` and `"Comp 1130"` do not.

use indexmap::IndexSet;

use crate::id::CourseCode;

/// Marker (checked case-insensitively) that means "no prerequisites".
const NO_PREREQUISITES_MARKER: &str = "none";

const MIN_SUBJECT_LEN: usize = 2;
const MAX_SUBJECT_LEN: usize = 4;
const NUMBER_LEN: usize = 4;

/// Extracts the course codes referenced by `text`, in order of first
/// occurrence and without duplicates.
///
/// Empty or whitespace-only text, and any text containing "none" in any
/// casing, yields no codes. Codes are normalized to a single separating
/// space. Nothing is checked against the catalog here.
pub fn extract_course_codes(text: &str) -> Vec<CourseCode> {
    if text.trim().is_empty() || text.to_lowercase().contains(NO_PREREQUISITES_MARKER) {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut found: IndexSet<String> = IndexSet::new();
    let mut pos = 0;

    while pos < chars.len() {
        match match_code_at(&chars, pos) {
            Some((code, end)) => {
                found.insert(code);
                pos = end;
            }
            None => pos += 1,
        }
    }

    found.into_iter().map(CourseCode::from).collect()
}

/// Tries to match a course code starting exactly at `start`. Returns the
/// normalized code and the index just past the match.
fn match_code_at(chars: &[char], start: usize) -> Option<(String, usize)> {
    if start > 0 && is_word_char(chars[start - 1]) {
        return None;
    }

    let subject_end = scan_while(chars, start, |c| c.is_ascii_uppercase());
    let subject_len = subject_end - start;
    if !(MIN_SUBJECT_LEN..=MAX_SUBJECT_LEN).contains(&subject_len) {
        return None;
    }

    let gap_end = scan_while(chars, subject_end, char::is_whitespace);
    if gap_end == subject_end {
        return None;
    }

    let number_end = gap_end + NUMBER_LEN;
    if number_end > chars.len() || !chars[gap_end..number_end].iter().all(char::is_ascii_digit) {
        return None;
    }
    if number_end < chars.len() && is_word_char(chars[number_end]) {
        return None;
    }

    let subject: String = chars[start..subject_end].iter().collect();
    let number: String = chars[gap_end..number_end].iter().collect();
    Some((format!("{} {}", subject, number), number_end))
}

fn scan_while(chars: &[char], from: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = from;
    while end < chars.len() && pred(chars[end]) {
        end += 1;
    }
    end
}

// Same notion of "word character" as a regex `\b`.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(text: &str) -> Vec<String> {
        extract_course_codes(text)
            .into_iter()
            .map(|c| c.as_str().to_string())
            .collect()
    }

    #[test]
    fn extracts_codes_in_order_of_first_occurrence() {
        assert_eq!(
            codes("COMP 2130 and COMP 1130, or COMP 2130 with MATH 1000"),
            vec!["COMP 2130", "COMP 1130", "MATH 1000"]
        );
    }

    #[test]
    fn empty_and_blank_text_yield_nothing() {
        assert!(codes("").is_empty());
        assert!(codes("   \n\t").is_empty());
    }

    #[test]
    fn none_marker_in_any_casing_yields_nothing() {
        assert!(codes("None").is_empty());
        assert!(codes("NONE").is_empty());
        assert!(codes("COMP 1130 (or none if waived)").is_empty());
    }

    #[test]
    fn subject_must_be_two_to_four_uppercase_letters() {
        assert_eq!(codes("CS 1000"), vec!["CS 1000"]);
        assert_eq!(codes("COMP 1000"), vec!["COMP 1000"]);
        assert!(codes("C 1000").is_empty());
        assert!(codes("COMPS 1000").is_empty());
        assert!(codes("Comp 1000").is_empty());
    }

    #[test]
    fn number_must_be_exactly_four_digits() {
        assert!(codes("COMP 113").is_empty());
        assert!(codes("COMP 11300").is_empty());
        assert!(codes("COMP 1130x").is_empty());
    }

    #[test]
    fn requires_word_boundary_before_subject() {
        assert!(codes("XCOMP 1130").is_empty());
        assert!(codes("_COMP 1130").is_empty());
        assert_eq!(codes("(COMP 1130)"), vec!["COMP 1130"]);
    }

    #[test]
    fn whitespace_gap_is_normalized_to_one_space() {
        assert_eq!(codes("COMP   1130 or STAT\t2000"), vec!["COMP 1130", "STAT 2000"]);
        assert_eq!(codes("COMP 1130 and COMP  1130"), vec!["COMP 1130"]);
    }

    #[test]
    fn missing_gap_is_not_a_code() {
        assert!(codes("COMP1130").is_empty());
    }

    #[test]
    fn ignores_surrounding_prose() {
        assert_eq!(
            codes("A minimum C- in COMP 1130; 30 credits of coursework; ENGL 1100."),
            vec!["COMP 1130", "ENGL 1100"]
        );
    }

    #[test]
    fn handles_non_ascii_text() {
        assert_eq!(codes("Prérequis : COMP 1130 — requis"), vec!["COMP 1130"]);
    }
}
