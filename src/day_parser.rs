//! Line classifier for a single day's column block.
//!
//! A menu entry is a few description lines, an allergen section introduced by
//! [`ALLERGEN_MARKER`], and a price line carrying [`CURRENCY_SYMBOL`]. The phase
//! survives across lines and is only reset to `Description` once a price line
//! has completed an item.

use serde::Serialize;

pub const ALLERGEN_MARKER: &str = "Allergene";
pub const CURRENCY_SYMBOL: &str = "€";

/// The menu never offers more than this many choices per day.
pub const MAX_MEALS_PER_DAY: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub description: String,
    pub allergens: String,
    pub price: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Description,
    Allergens,
    Price,
}

/// Parser state between two lines: the phase plus the item being built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayState {
    pub phase: Phase,
    pub item: MenuItem,
}

/// Collapses every whitespace run to one space and trims both ends.
pub fn normalize_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Consumes one line. Returns the next state and, on a price line, the
/// finished item.
pub fn transition(mut state: DayState, line: &str) -> (DayState, Option<MenuItem>) {
    let line = normalize_whitespace(line);

    if line.contains(ALLERGEN_MARKER) {
        state.phase = Phase::Allergens;
    } else if line.contains(CURRENCY_SYMBOL) {
        state.phase = Phase::Price;
    }

    match state.phase {
        Phase::Description => {
            state.item.description.push_str(&line);
            state.item.description.push(' ');
            (state, None)
        }
        Phase::Allergens => {
            state.item.allergens.push_str(&line);
            state.item.allergens.push(' ');
            (state, None)
        }
        Phase::Price => {
            let mut item = state.item;
            item.price = line;
            item.description = item.description.trim().to_string();
            item.allergens = item.allergens.trim().to_string();
            (DayState::default(), Some(item))
        }
    }
}

/// Parses one weekday block into at most [`MAX_MEALS_PER_DAY`] items.
pub fn parse_day(block: &str) -> Vec<MenuItem> {
    let mut meals = Vec::new();
    let mut state = DayState::default();
    for line in block.lines() {
        let (next, finished) = transition(state, line);
        state = next;
        if let Some(item) = finished {
            meals.push(item);
        }
        if meals.len() >= MAX_MEALS_PER_DAY {
            break;
        }
    }
    meals
}
