//! Recovers per-day columns from linearised PDF text.
//!
//! The menu renders the five weekdays side by side. Text extraction turns each
//! visual row into one line, so the character offsets of the weekday names in
//! the header row are the only clue to which column a fragment belongs to.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::error::{MenuError, Result};

pub const DAYS_IN_WEEK: usize = 5;

static WEEKDAY_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Montag).*(Dienstag).*(Mittwoch).*(Donnerstag).*(Freitag)")
        .expect("static regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum WeekdayName {
    Montag,
    Dienstag,
    Mittwoch,
    Donnerstag,
    Freitag,
}

impl WeekdayName {
    pub const ALL: [WeekdayName; DAYS_IN_WEEK] = [
        WeekdayName::Montag,
        WeekdayName::Dienstag,
        WeekdayName::Mittwoch,
        WeekdayName::Donnerstag,
        WeekdayName::Freitag,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WeekdayName::Montag => "Montag",
            WeekdayName::Dienstag => "Dienstag",
            WeekdayName::Mittwoch => "Mittwoch",
            WeekdayName::Donnerstag => "Donnerstag",
            WeekdayName::Freitag => "Freitag",
        }
    }
}

impl fmt::Display for WeekdayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Character offsets of the five weekday names, if `line` is the header row.
pub fn weekday_offsets(line: &str) -> Option<[usize; DAYS_IN_WEEK]> {
    let caps = WEEKDAY_HEADER.captures(line)?;
    let mut offsets = [0; DAYS_IN_WEEK];
    for (i, offset) in offsets.iter_mut().enumerate() {
        let start = caps.get(i + 1)?.start();
        *offset = line[..start].chars().count();
    }
    Some(offsets)
}

/// A line indexed by character position. Byte boundaries are computed once so
/// the five column slices of a row don't rescan it.
pub struct CharColumns<'a> {
    line: &'a str,
    // Byte offset of every char, followed by `line.len()`.
    bounds: Vec<usize>,
}

impl<'a> CharColumns<'a> {
    pub fn new(line: &'a str) -> Self {
        let mut bounds: Vec<usize> = line.char_indices().map(|(i, _)| i).collect();
        bounds.push(line.len());
        Self { line, bounds }
    }

    pub fn char_count(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Slice between two character positions. A `begin` past the end yields
    /// an empty slice and an `end` past the end (or none) runs to the end.
    pub fn slice(&self, begin: usize, end: Option<usize>) -> &'a str {
        let count = self.char_count();
        if begin > count {
            return "";
        }
        let start = self.bounds[begin];
        let stop = match end {
            Some(end) if end < count => self.bounds[end],
            _ => self.line.len(),
        };
        &self.line[start..stop.max(start)]
    }
}

/// Splits the text after the weekday header into one block per day,
/// Montag through Freitag. Every line contributes one `\n`-terminated
/// segment to every block.
pub fn split_by_weekday(text: &str) -> Result<[String; DAYS_IN_WEEK]> {
    let mut lines = text.lines();
    let offsets = lines
        .by_ref()
        .find_map(weekday_offsets)
        .ok_or_else(|| {
            MenuError::Structure(
                "couldn't locate weekdays. maybe the structure of the PDF changed?".to_string(),
            )
        })?;
    tracing::debug!("weekday header columns at {offsets:?}");

    let mut days: [String; DAYS_IN_WEEK] = Default::default();
    for line in lines {
        let columns = CharColumns::new(line);
        for (i, day) in days.iter_mut().enumerate() {
            let end = offsets.get(i + 1).copied();
            day.push_str(columns.slice(offsets[i], end));
            day.push('\n');
        }
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Montag    Dienstag  Mittwoch  Donnerstag  Freitag";

    #[test]
    fn finds_header_offsets() {
        assert_eq!(weekday_offsets(HEADER), Some([0, 10, 20, 30, 42]));
        assert_eq!(weekday_offsets("Montag Dienstag Freitag"), None);
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let line = "Süß Montag Dienstag Mittwoch Donnerstag Freitag";
        assert_eq!(weekday_offsets(line), Some([4, 11, 20, 29, 40]));
    }

    #[test]
    fn splits_lines_into_day_blocks() {
        let text = format!(
            "Speiseplan KW 42\n{HEADER}\n{}\n{}\n",
            "Suppe     Pasta     Reis      Eintopf     Fisch",
            "2,50 €    3,10 €"
        );
        let days = split_by_weekday(&text).unwrap();
        assert_eq!(days[0], "Suppe     \n2,50 €    \n");
        assert_eq!(days[1], "Pasta     \n3,10 €\n");
        assert_eq!(days[2], "Reis      \n\n");
        assert_eq!(days[3], "Eintopf     \n\n");
        assert_eq!(days[4], "Fisch\n\n");
    }

    #[test]
    fn blocks_reassemble_original_lines() {
        let data = [
            "Gulasch   Lasagne   Curry     Schnitzel   Forelle",
            "mit Reis  vegetarisch",
            "",
            "Allergene: A, C   Allergene: G       Allergene: D",
            "4,20 €    3,80 €    3,95 €    5,10 €      6,00 €   extra",
        ];
        let text = format!("{HEADER}\n{}\n", data.join("\n"));
        let days = split_by_weekday(&text).unwrap();

        let segments: Vec<Vec<&str>> = days.iter().map(|d| d.lines().collect()).collect();
        for day in &segments {
            assert_eq!(day.len(), data.len());
        }
        for (row, line) in data.iter().enumerate() {
            let rebuilt: String = segments.iter().map(|day| day[row]).collect();
            assert_eq!(&rebuilt, line);
        }
    }

    #[test]
    fn missing_header_is_a_structure_error() {
        let err = split_by_weekday("Montag Dienstag\nMittwoch Donnerstag Freitag\n").unwrap_err();
        assert!(matches!(err, MenuError::Structure(msg) if msg.contains("couldn't locate weekdays")));
    }

    #[test]
    fn char_columns_handle_short_lines() {
        let abc = CharColumns::new("abc");
        assert_eq!(abc.slice(5, Some(8)), "");
        assert_eq!(abc.slice(3, Some(8)), "");
        let abcdef = CharColumns::new("abcdef");
        assert_eq!(abcdef.slice(2, Some(4)), "cd");
        assert_eq!(abcdef.slice(2, Some(10)), "cdef");
        assert_eq!(abcdef.slice(4, None), "ef");
        assert_eq!(CharColumns::new("").slice(0, Some(3)), "");
    }

    #[test]
    fn char_columns_index_multibyte_lines_by_character() {
        let price = CharColumns::new("3,10 €x");
        assert_eq!(price.char_count(), 7);
        assert_eq!(price.slice(5, Some(6)), "€");
        assert_eq!(price.slice(6, None), "x");
        assert_eq!(CharColumns::new("Gemüse").slice(2, Some(4)), "mü");
    }
}
