use crate::week::{FixedWeek, LocalClock, WeekClock};

/// Weekly menu PDF published by the MPI cafeteria.
pub const DEFAULT_PDF_URL: &str = "https://mpi.fs.tum.de/files/speiseplan/speiseplan.pdf";

/// Filename tail that follows the week number in discovered menu links.
pub const DEFAULT_LINK_SUFFIX: &str = "_Speiseplan.pdf";

pub const USER_AGENT: &str = "speiseplan/0.1";

/// Where the weekly menu comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    /// A PDF on disk, used instead of the network.
    File(std::path::PathBuf),
    /// A fixed PDF URL.
    Direct { url: String },
    /// An HTML index page scanned for this week's PDF links.
    Discover { index_url: String, link_suffix: String },
}

impl Default for MenuSource {
    fn default() -> Self {
        MenuSource::Direct {
            url: DEFAULT_PDF_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Layout {
    /// Days side by side, anchored by a weekday header line.
    #[default]
    Columns,
    /// Day headers followed by numbered meal lines.
    List,
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub source: MenuSource,
    pub layout: Layout,
    pub json: bool,
    pub dump_text: bool,
    /// ISO week to discover instead of the current one.
    pub week: Option<u32>,
}

impl Settings {
    pub fn clock(&self) -> Box<dyn WeekClock> {
        match self.week {
            Some(week) => Box::new(FixedWeek(week)),
            None => Box::new(LocalClock),
        }
    }
}
