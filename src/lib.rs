pub mod cleaner;
pub mod columns;
pub mod config;
pub mod day_parser;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod list_parser;
pub mod logging;
pub mod render;
pub mod week;

use serde::Serialize;
use std::fs;

use crate::columns::{WeekdayName, split_by_weekday};
use crate::config::{Layout, MenuSource};
use crate::day_parser::{MenuItem, parse_day};
use crate::extract::ExtractText;
use crate::fetch::{Fetch, fetch_direct, fetch_discovered};
use crate::list_parser::{ListPlan, parse_list};
use crate::week::WeekClock;

pub use crate::error::{MenuError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayMenu {
    pub day: WeekdayName,
    pub meals: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MealPlan {
    Columns(Vec<DayMenu>),
    List(ListPlan),
}

/// Raw PDF documents for `source`. Only discovery can yield more than one.
pub fn load_menu_bytes(
    source: &MenuSource,
    fetcher: &dyn Fetch,
    clock: &dyn WeekClock,
) -> Result<Vec<Vec<u8>>> {
    match source {
        MenuSource::File(path) => {
            tracing::info!("reading menu from {}", path.display());
            Ok(vec![fs::read(path)?])
        }
        MenuSource::Direct { url } => Ok(vec![fetch_direct(fetcher, url)?]),
        MenuSource::Discover {
            index_url,
            link_suffix,
        } => fetch_discovered(fetcher, clock, index_url, link_suffix),
    }
}

/// Fetches and extracts the menu text. Texts of several documents are joined
/// in discovery order. Empty text is an error so nothing downstream parses it.
pub fn load_menu_text(
    source: &MenuSource,
    fetcher: &dyn Fetch,
    extractor: &dyn ExtractText,
    clock: &dyn WeekClock,
) -> Result<String> {
    let mut text = String::new();
    for doc in load_menu_bytes(source, fetcher, clock)? {
        text.push_str(&extractor.extract_text(&doc)?);
    }
    if text.is_empty() {
        return Err(MenuError::EmptyMenu);
    }
    tracing::info!("extracted {} characters of menu text", text.len());
    Ok(text)
}

pub fn parse_columns_plan(text: &str) -> Result<Vec<DayMenu>> {
    let blocks = split_by_weekday(text)?;
    let plan = WeekdayName::ALL
        .iter()
        .zip(blocks.iter())
        .map(|(&day, block)| {
            let meals = parse_day(block);
            tracing::debug!("{day}: {} meal(s)", meals.len());
            DayMenu { day, meals }
        })
        .collect();
    Ok(plan)
}

pub fn parse_menu(text: &str, layout: Layout) -> Result<MealPlan> {
    if text.is_empty() {
        return Err(MenuError::EmptyMenu);
    }
    match layout {
        Layout::Columns => parse_columns_plan(text).map(MealPlan::Columns),
        Layout::List => Ok(MealPlan::List(parse_list(&cleaner::clean_text(text)))),
    }
}

pub fn render_plan(plan: &MealPlan) -> String {
    match plan {
        MealPlan::Columns(days) => render::render_columns(days),
        MealPlan::List(days) => render::render_list(days),
    }
}
