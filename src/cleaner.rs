//! Normalises list-layout menu text before line classification.

use once_cell::sync::Lazy;
use regex::Regex;

/// Last line of the page header; everything up to and including it is dropped.
pub const PREAMBLE_END_MARKER: &str = "Tagessuppe";

/// Start of the allergen legend footer; it and everything after is dropped.
pub const POSTAMBLE_START_MARKER: &str = "Enthält laut neuer Lebensmittel-Informationsverordnung";

const NOISE: [&str; 2] = ["oder B.n.W.", "*"];

static ADDITIVE_CODES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" \d(?:,\d)* ").expect("static regex is valid"));
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("static regex is valid"));

fn strip_preamble(text: &str) -> &str {
    let Some(pos) = text.find(PREAMBLE_END_MARKER) else {
        return text;
    };
    let after = &text[pos..];
    match after.find('\n') {
        Some(nl) => &after[nl + 1..],
        None => "",
    }
}

fn strip_postamble(text: &str) -> &str {
    match text.find(POSTAMBLE_START_MARKER) {
        Some(pos) => &text[..pos],
        None => text,
    }
}

fn noise_pass(text: &str) -> String {
    let mut out = text.to_string();
    for noise in NOISE {
        out = out.replace(noise, "");
    }
    let out = ADDITIVE_CODES.replace_all(&out, " ");
    SPACE_RUNS.replace_all(&out, " ").into_owned()
}

/// Removes noise tokens and additive codes, then collapses spaces. Repeats
/// until nothing changes, so applying it again is a no-op.
pub fn strip_noise(text: &str) -> String {
    let mut current = noise_pass(text);
    loop {
        let next = noise_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Full cleanup of extracted list-layout text.
pub fn clean_text(text: &str) -> String {
    let body = strip_postamble(strip_preamble(text));
    let unwrapped = body.replace("\n ", " ");
    strip_noise(&unwrapped)
}
