use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use speiseplan::config::{DEFAULT_LINK_SUFFIX, DEFAULT_PDF_URL, Layout, MenuSource, Settings};
use speiseplan::extract::PdfTextExtractor;
use speiseplan::fetch::HttpFetcher;
use speiseplan::{MenuError, load_menu_text, logging, parse_menu, render, render_plan};

/// Prints this week's cafeteria menu.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read the menu from this PDF instead of downloading it.
    pdf: Option<PathBuf>,

    /// How days are laid out in the PDF.
    #[arg(long, value_enum, default_value_t = Layout::Columns)]
    layout: Layout,

    /// Menu PDF to download.
    #[arg(long, default_value = DEFAULT_PDF_URL)]
    url: String,

    /// Scan this HTML page for the current week's PDF links instead of using --url.
    #[arg(long)]
    index_url: Option<String>,

    /// Filename ending that follows the week number in discovered links.
    #[arg(long, default_value = DEFAULT_LINK_SUFFIX)]
    link_suffix: String,

    /// Print the parsed menu as JSON.
    #[arg(long)]
    json: bool,

    /// Print the extracted text line by line and stop.
    #[arg(long)]
    dump_text: bool,

    /// ISO week to look for with --index-url (defaults to the current week).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=53))]
    week: Option<u32>,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        let source = match (cli.pdf, cli.index_url) {
            (Some(path), _) => MenuSource::File(path),
            (None, Some(index_url)) => MenuSource::Discover {
                index_url,
                link_suffix: cli.link_suffix,
            },
            (None, None) => MenuSource::Direct { url: cli.url },
        };
        Settings {
            source,
            layout: cli.layout,
            json: cli.json,
            dump_text: cli.dump_text,
            week: cli.week,
        }
    }
}

fn run(settings: &Settings) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new()?;
    let clock = settings.clock();
    let text = load_menu_text(&settings.source, &fetcher, &PdfTextExtractor, clock.as_ref())?;

    if settings.dump_text {
        print!("{}", render::render_text_dump(&text));
        return Ok(());
    }

    let plan = parse_menu(&text, settings.layout)?;
    if settings.json {
        let json = serde_json::to_string_pretty(&plan).context("serializing menu")?;
        println!("{json}");
    } else {
        print!("{}", render_plan(&plan));
    }
    Ok(())
}

/// 255 (the classic `-1`) for an empty menu, 1 for every other failure.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<MenuError>() {
        Some(MenuError::EmptyMenu) => 255,
        _ => 1,
    }
}

fn main() -> ExitCode {
    logging::setup_logging();
    // Ignored if a provider is already installed.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let settings = Settings::from(Cli::parse());
    tracing::info!("Starting with settings: {:?}", settings);

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if err.downcast_ref::<MenuError>().is_some_and(MenuError::is_fetch) {
                eprintln!("Hint: pass the path of a downloaded PDF to skip the network.");
            }
            ExitCode::from(exit_status(&err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn settings(args: &[&str]) -> Settings {
        let argv = std::iter::once("speiseplan").chain(args.iter().copied());
        Settings::from(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn empty_menu_exits_with_255() {
        let err = anyhow::Error::new(MenuError::EmptyMenu);
        assert_eq!(exit_status(&err), 255);
    }

    #[test]
    fn other_failures_exit_with_1() {
        let errors = [
            anyhow::Error::new(MenuError::DocumentLoad("missing %PDF header".to_string())),
            anyhow::Error::new(MenuError::Structure("couldn't locate weekdays".to_string())),
            anyhow::Error::new(MenuError::HttpStatus {
                url: DEFAULT_PDF_URL.to_string(),
                status: StatusCode::BAD_GATEWAY,
            }),
            anyhow::anyhow!("serializing menu"),
        ];
        for err in &errors {
            assert_eq!(exit_status(err), 1, "{err}");
        }
    }

    #[test]
    fn context_does_not_hide_an_empty_menu() {
        let err = anyhow::Error::new(MenuError::EmptyMenu).context("loading menu");
        assert_eq!(exit_status(&err), 255);
    }

    #[test]
    fn no_arguments_fetch_the_fixed_pdf() {
        let settings = settings(&[]);
        assert_eq!(
            settings.source,
            MenuSource::Direct {
                url: DEFAULT_PDF_URL.to_string()
            }
        );
        assert_eq!(settings.layout, Layout::Columns);
        assert_eq!(settings.week, None);
    }

    #[test]
    fn positional_path_wins_over_discovery() {
        let settings = settings(&["menu.pdf", "--index-url", "https://mensa.example/"]);
        assert_eq!(settings.source, MenuSource::File(PathBuf::from("menu.pdf")));
    }

    #[test]
    fn index_url_with_week_override() {
        let settings = settings(&["--index-url", "https://mensa.example/", "--week", "7", "--layout", "list"]);
        assert_eq!(
            settings.source,
            MenuSource::Discover {
                index_url: "https://mensa.example/".to_string(),
                link_suffix: DEFAULT_LINK_SUFFIX.to_string(),
            }
        );
        assert_eq!(settings.layout, Layout::List);
        assert_eq!(settings.clock().current_week(), 7);
    }

    #[test]
    fn week_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["speiseplan", "--week", "54"]).is_err());
        assert!(Cli::try_parse_from(["speiseplan", "--week", "0"]).is_err());
    }
}
