use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use scraper::{Html, Selector};

use crate::config::USER_AGENT;
use crate::error::{MenuError, Result};
use crate::week::WeekClock;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("static selector is valid"));

/// Status and body of a single GET.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<FetchResponse>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_client()?,
        })
    }
}

pub fn build_client() -> Result<Client> {
    Client::builder()
        // Avoid macOS system proxy lookup that can panic in sandboxed contexts.
        .no_proxy()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| MenuError::Fetch {
            url: "(none)".to_string(),
            reason: format!("couldn't build HTTP client: {e}"),
        })
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse> {
        let transport = |e: reqwest::Error| MenuError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };
        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        let body = resp.bytes().map_err(transport)?.to_vec();
        Ok(FetchResponse { status, body })
    }
}

fn get_ok(fetcher: &dyn Fetch, url: &str) -> Result<Vec<u8>> {
    tracing::info!("GET {url}");
    let resp = fetcher.fetch(url)?;
    if !resp.status.is_success() {
        tracing::error!("HTTP error status {} for {url}", resp.status);
        return Err(MenuError::HttpStatus {
            url: url.to_string(),
            status: resp.status,
        });
    }
    tracing::debug!("downloaded {} bytes from {url}", resp.body.len());
    Ok(resp.body)
}

/// Downloads the PDF at a fixed URL.
pub fn fetch_direct(fetcher: &dyn Fetch, url: &str) -> Result<Vec<u8>> {
    get_ok(fetcher, url)
}

fn week_link_regex(week: u32, suffix: &str) -> Regex {
    let pattern = format!(r"(?:^|\D)0*{week}{}$", regex::escape(suffix));
    Regex::new(&pattern).expect("escaped suffix always forms a valid pattern")
}

/// Scans an index page for anchors whose href ends in `<week><suffix>`.
/// Links are resolved against `index_url` and returned in document order.
pub fn discover_links(
    fetcher: &dyn Fetch,
    clock: &dyn WeekClock,
    index_url: &str,
    suffix: &str,
) -> Result<Vec<String>> {
    let base = Url::parse(index_url).map_err(|e| MenuError::Fetch {
        url: index_url.to_string(),
        reason: format!("invalid index URL: {e}"),
    })?;
    let week = clock.current_week();
    tracing::info!("looking for week {week} menus on {index_url}");

    let body = get_ok(fetcher, index_url)?;
    let page = String::from_utf8_lossy(&body);
    let doc = Html::parse_document(&page);
    let re = week_link_regex(week, suffix);

    let mut links = Vec::new();
    for element in doc.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !re.is_match(href) {
            continue;
        }
        match base.join(href) {
            Ok(link) => links.push(link.to_string()),
            Err(e) => tracing::warn!("skipping unresolvable link {href}: {e}"),
        }
    }

    tracing::info!("found {} menu link(s) for week {week}", links.len());
    Ok(links)
}

/// Fetches every PDF linked for the current week, in discovery order.
pub fn fetch_discovered(
    fetcher: &dyn Fetch,
    clock: &dyn WeekClock,
    index_url: &str,
    suffix: &str,
) -> Result<Vec<Vec<u8>>> {
    let links = discover_links(fetcher, clock, index_url, suffix)?;
    if links.is_empty() {
        return Err(MenuError::Structure(format!(
            "no menu link for week {} on {index_url}",
            clock.current_week()
        )));
    }
    links.iter().map(|link| get_ok(fetcher, link)).collect()
}
