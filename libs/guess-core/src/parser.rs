//! Plain-text decklist parser.
//!
//! # Format
//! ```text
//! Crypt (12 cards, min=20, max=32, avg=6.5)
//! 3x Anson (G1)          8  AUS PRE  Toreador:1
//! 2 x Beckett            9  ANI FOR  Gangrel:1
//!
//! Library (90 cards)
//! # Master (10)
//! 4 Blood Doll
//! ```
//!
//! Card lines start with a count (`3x`, `3 x` or `3`). Anything after two
//! or more spaces or a tab is an export column and is ignored. Lines that
//! don't start with a digit are headers or commentary.

use crate::catalog::CardCatalog;
use crate::error::{ParseError, Result};
use crate::matching::normalize;
use crate::types::DeckEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A card line before name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDeckLine {
    pub count: u32,
    pub name: String,
    pub line_number: usize,
}

/// Decklist parser options.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecklistParser {
    /// Sum the counts of repeated names instead of rejecting them.
    pub merge_duplicates: bool,
}

impl DecklistParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merging() -> Self {
        Self {
            merge_duplicates: true,
        }
    }

    pub fn parse(&self, content: &str) -> Result<Vec<RawDeckLine>> {
        let mut lines: Vec<RawDeckLine> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            let line_num = idx + 1;
            let Some(parsed) = parse_line(line, line_num)? else {
                continue;
            };

            let key = normalize(&parsed.name, false);
            match seen.get(&key) {
                Some(&existing) if self.merge_duplicates => {
                    lines[existing].count = lines[existing].count.saturating_add(parsed.count);
                }
                Some(_) => {
                    return Err(ParseError::DuplicateCard {
                        name: parsed.name,
                        line: line_num,
                    });
                }
                None => {
                    seen.insert(key, lines.len());
                    lines.push(parsed);
                }
            }
        }

        if lines.is_empty() {
            return Err(ParseError::EmptyDecklist);
        }
        Ok(lines)
    }
}

/// Parse decklist text, rejecting repeated card names.
pub fn parse_decklist(content: &str) -> Result<Vec<RawDeckLine>> {
    DecklistParser::new().parse(content)
}

fn parse_line(line: &str, line_num: usize) -> Result<Option<RawDeckLine>> {
    let trimmed = line.trim();
    if trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || !trimmed.starts_with(|c: char| c.is_ascii_digit())
    {
        return Ok(None);
    }

    let (count_token, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let count = parse_count(count_token).ok_or_else(|| ParseError::InvalidCount {
        line: line_num,
        value: count_token.to_string(),
    })?;

    let rest = rest.trim_start();
    let rest = match rest.split_once(char::is_whitespace) {
        Some((marker, name)) if is_times_marker(marker) => name.trim_start(),
        _ => rest,
    };

    let name = strip_export_columns(rest);
    if name.is_empty() {
        return Err(ParseError::MissingName { line: line_num });
    }

    Ok(Some(RawDeckLine {
        count,
        name: name.to_string(),
        line_number: line_num,
    }))
}

fn parse_count(token: &str) -> Option<u32> {
    let digits = token
        .strip_suffix(['x', 'X', '×'])
        .unwrap_or(token);
    digits.parse::<u32>().ok().filter(|count| *count > 0)
}

fn is_times_marker(token: &str) -> bool {
    matches!(token, "x" | "X" | "×")
}

/// Keep the text before the first tab or run of two spaces.
fn strip_export_columns(rest: &str) -> &str {
    let cut = [rest.find('\t'), rest.find("  ")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(rest.len());
    rest[..cut].trim()
}

/// Resolve parsed lines against a catalog.
pub fn resolve_decklist(lines: &[RawDeckLine], catalog: &dyn CardCatalog) -> Result<Vec<DeckEntry>> {
    lines
        .iter()
        .map(|line| {
            let card = catalog
                .card_by_name(&line.name)
                .ok_or_else(|| ParseError::UnknownCard {
                    name: line.name.clone(),
                    line: line.line_number,
                })?;
            Ok(DeckEntry {
                count: line.count,
                card: card.to_deck_card(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use pretty_assertions::assert_eq;

    fn names(lines: &[RawDeckLine]) -> Vec<(u32, &str)> {
        lines.iter().map(|l| (l.count, l.name.as_str())).collect()
    }

    #[test]
    fn parse_count_styles() {
        let input = "3x Anson (G1)\n2 x Beckett\n4 Blood Doll\n1× Villein";
        let lines = parse_decklist(input).unwrap();
        assert_eq!(
            names(&lines),
            vec![(3, "Anson (G1)"), (2, "Beckett"), (4, "Blood Doll"), (1, "Villein")]
        );
        assert_eq!(lines[2].line_number, 3);
    }

    #[test]
    fn skips_headers_comments_and_columns() {
        let input = "Deck Name: Toreador Wall\n\
                     Crypt (12 cards, min=20, max=32, avg=6.5)\n\
                     ------------------------------\n\
                     3x Anson (G1)          8  AUS PRE  Toreador:1\n\
                     \n\
                     # Master (1)\n\
                     // sideboard ideas\n\
                     1x Blood Doll\tMaster";
        let lines = parse_decklist(input).unwrap();
        assert_eq!(names(&lines), vec![(3, "Anson (G1)"), (1, "Blood Doll")]);
    }

    #[test]
    fn names_starting_with_x_are_kept() {
        let lines = parse_decklist("2 Xaviar\n1 x Xaviar's Shadow").unwrap();
        assert_eq!(names(&lines), vec![(2, "Xaviar"), (1, "Xaviar's Shadow")]);
    }

    #[test]
    fn reject_invalid_count() {
        let result = parse_decklist("3a Anson");
        assert!(matches!(result, Err(ParseError::InvalidCount { line: 1, .. })));

        let result = parse_decklist("1 Beckett\n0x Anson");
        assert!(matches!(result, Err(ParseError::InvalidCount { line: 2, .. })));
    }

    #[test]
    fn reject_missing_name() {
        let result = parse_decklist("3x");
        assert!(matches!(result, Err(ParseError::MissingName { line: 1 })));
    }

    #[test]
    fn duplicates_rejected_or_merged() {
        let input = "2x Blood Doll\n1 Villein\n3x blood doll";
        assert!(matches!(
            parse_decklist(input),
            Err(ParseError::DuplicateCard { line: 3, .. })
        ));

        let lines = DecklistParser::merging().parse(input).unwrap();
        assert_eq!(names(&lines), vec![(5, "Blood Doll"), (1, "Villein")]);
    }

    #[test]
    fn reject_empty_decklist() {
        assert!(matches!(parse_decklist(""), Err(ParseError::EmptyDecklist)));
        assert!(matches!(
            parse_decklist("Crypt (0)\n# nothing"),
            Err(ParseError::EmptyDecklist)
        ));
    }

    #[test]
    fn resolve_against_catalog() {
        let catalog = InMemoryCatalog::from_json(
            r#"[{"id": 1, "name": "Anson (G1)", "types": ["Vampire"], "clan": "Toreador", "capacity": 8},
                {"id": 2, "name": "Blood Doll", "types": ["Master"], "card_text": "Gain 1 blood."}]"#,
        )
        .unwrap();

        let lines = parse_decklist("3 Anson\n4x Blood Doll").unwrap();
        let entries = resolve_decklist(&lines, &catalog).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].count, 3);
        assert_eq!(entries[0].card.clans, vec!["Toreador".to_string()]);
        assert_eq!(entries[0].card.capacity, Some(8));
        assert_eq!(entries[1].card.card_text, "Gain 1 blood.");

        let lines = parse_decklist("1 Beckett").unwrap();
        assert!(matches!(
            resolve_decklist(&lines, &catalog),
            Err(ParseError::UnknownCard { line: 1, .. })
        ));
    }
}
