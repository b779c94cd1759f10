//! Signature-note parsing
//!
//! Catalog rows carry the dominant scent components of a fragrance as a
//! single annotated text field, e.g. `"玫瑰(30%) 木质香(20%)"`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Note names are one or two space-joined word sequences followed by a
    // percentage, e.g. `香柠檬(25%)` or `pink pepper(15%)`.
    static ref NOTE_RE: Regex = Regex::new(r"(\w+|\w+\s\w+)\((\d+)%\)").unwrap();
}

/// Parse a raw signature-note field into ordered (note, percentage) pairs.
///
/// Order matches left-to-right appearance in the source text and duplicate
/// names are kept. An absent field yields an empty list; text that does not
/// match the token pattern is skipped without error.
pub fn parse_notes(sig_note: Option<&str>) -> Vec<(String, u32)> {
    let text = match sig_note {
        Some(text) => text,
        None => return Vec::new(),
    };

    NOTE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let name = caps[1].trim().to_string();
            let percent = caps[2].parse::<u32>().ok()?;
            Some((name, percent))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_annotated_pairs_in_order() {
        let parsed = parse_notes(Some("玫瑰(30%) 木质香(20%)"));
        assert_eq!(
            parsed,
            vec![("玫瑰".to_string(), 30), ("木质香".to_string(), 20)]
        );
    }

    #[test]
    fn test_parse_absent_field() {
        assert!(parse_notes(None).is_empty());
    }

    #[test]
    fn test_parse_text_without_tokens() {
        assert!(parse_notes(Some("清新持久，适合夏天")).is_empty());
        assert!(parse_notes(Some("")).is_empty());
    }

    #[test]
    fn test_parse_two_word_note_name() {
        let parsed = parse_notes(Some("pink pepper(15%)"));
        assert_eq!(parsed, vec![("pink pepper".to_string(), 15)]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let parsed = parse_notes(Some("玫瑰(10%) 玫瑰(5%)"));
        assert_eq!(
            parsed,
            vec![("玫瑰".to_string(), 10), ("玫瑰".to_string(), 5)]
        );
    }

    #[test]
    fn test_parse_skips_malformed_tokens() {
        // Missing percent sign and missing parens are not tokens
        let parsed = parse_notes(Some("玫瑰(30) 茉莉 40% 雪松(25%)"));
        assert_eq!(parsed, vec![("雪松".to_string(), 25)]);
    }
}
