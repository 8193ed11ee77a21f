use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6}) +(.+)$").expect("heading pattern is valid"));

static LISTING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Listing \d+\.\d+(:.*)?$").expect("listing pattern is valid"));

/// A classified ATX heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Nesting level, equal to the number of leading `#` (1-6).
    pub level: usize,

    /// Heading text with surrounding whitespace removed.
    pub text: String,
}

impl Heading {
    /// Classify a single line as an ATX heading.
    ///
    /// Returns `None` for anything that is not `#`..`######` followed by at
    /// least one space and non-empty text.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let caps = HEADING_RE.captures(line)?;
        Some(Self {
            level: caps[1].len(),
            text: caps[2].trim().to_string(),
        })
    }

    /// Whether this heading introduces a numbered code listing
    /// (`Listing 1.8` or `Listing 1.8: Title`) rather than a new topic.
    ///
    /// Listing-ness is a property of heading text only; it is checked once a
    /// line has already been classified as a heading.
    #[must_use]
    pub fn is_listing(&self) -> bool {
        is_listing_text(&self.text)
    }
}

pub(crate) fn is_heading_line(line: &str) -> bool {
    HEADING_RE.is_match(line)
}

fn is_listing_text(text: &str) -> bool {
    text.get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("listing"))
        && LISTING_RE.is_match(text)
}
