use std::fmt::Write;

use crate::DayMenu;
use crate::list_parser::ListPlan;

pub const DAY_DIVIDER: &str =
    "**********************************************************************";

/// Every meal as description, allergens and price lines; each day closes
/// with [`DAY_DIVIDER`].
pub fn render_columns(plan: &[DayMenu]) -> String {
    let mut out = String::new();
    for day in plan {
        for meal in &day.meals {
            let _ = writeln!(out, "{}", meal.description);
            let _ = writeln!(out, "{}", meal.allergens);
            let _ = writeln!(out, "{}", meal.price);
        }
        let _ = writeln!(out, "{DAY_DIVIDER}");
    }
    out
}

pub fn render_list(plan: &ListPlan) -> String {
    let mut out = String::new();
    for (day, meals) in plan {
        let _ = writeln!(out, "{day} has following meals:");
        for meal in meals {
            let _ = writeln!(out, "{} for {:.2}€", meal.description, meal.price);
        }
    }
    out
}

/// Numbered non-empty lines of the raw extracted text, for checking how a
/// new PDF layout linearises.
pub fn render_text_dump(text: &str) -> String {
    let mut out = String::from("=== FULL PDF TEXT ===\n");
    for (i, line) in text.lines().enumerate() {
        if !line.trim().is_empty() {
            let _ = writeln!(out, "{i}: {line:?}");
        }
    }
    out
}
