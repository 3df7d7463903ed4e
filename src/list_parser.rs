//! Parser for menus printed as one linear list: a day header line followed by
//! numbered meal lines such as `1. Spinatknödel 3.80`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

// A character class, not an alternation: any line starting with one of these
// letters counts as a day header. Kept as-is, see `class_matches_single_letters`.
static DAY_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[Montag|Dienstag|Mittwoch|Donnerstag|Freitag]").expect("static regex is valid")
});
static NUMBERED_MEAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*(.*) (\d\.\d\d)").expect("static regex is valid"));

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedMeal {
    pub description: String,
    pub price: f64,
}

/// Meals keyed by the raw day header line.
pub type ListPlan = BTreeMap<String, Vec<ListedMeal>>;

#[derive(Debug, Default)]
pub struct ListParser {
    current_day: String,
    current_meals: Vec<ListedMeal>,
    plan: ListPlan,
}

impl ListParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed_line(&mut self, line: &str) {
        if DAY_HEADER.is_match(line) {
            if !self.current_meals.is_empty() {
                let meals = std::mem::take(&mut self.current_meals);
                tracing::debug!("committing {} meal(s) for {:?}", meals.len(), self.current_day);
                self.plan.insert(self.current_day.clone(), meals);
            }
            self.current_day = line.to_string();
            self.current_meals.clear();
        } else if let Some(caps) = NUMBERED_MEAL.captures(line) {
            let description = caps[1].to_string();
            // `\d\.\d\d` always parses.
            let price = caps[2].parse::<f64>().unwrap_or_default();
            self.current_meals.push(ListedMeal { description, price });
        }
    }

    /// Returns every committed day. Meals after the last day header are not
    /// committed; feed another header line first to keep them.
    pub fn finish(self) -> ListPlan {
        if !self.current_meals.is_empty() {
            tracing::warn!(
                "dropping {} uncommitted meal(s) for {:?}",
                self.current_meals.len(),
                self.current_day
            );
        }
        self.plan
    }
}

pub fn parse_list(text: &str) -> ListPlan {
    let mut parser = ListParser::new();
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}
