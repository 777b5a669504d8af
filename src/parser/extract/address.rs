use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::utils::NOT_AVAILABLE;

// street <br> city, ST &nbsp; zip
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\W+(.+)<.+\s+(.+),\s+(\w+)\s+(?:&nbsp;|\x{A0})\s+([\d-]+)").unwrap()
});

/// Address fields as captured from the page, before any casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    pub address_line1: String,
    pub city_name: String,
    pub region_code: String,
    pub post_code: String,
}

impl ParsedAddress {
    fn unavailable() -> Self {
        ParsedAddress {
            address_line1: NOT_AVAILABLE.to_string(),
            city_name: NOT_AVAILABLE.to_string(),
            region_code: NOT_AVAILABLE.to_string(),
            post_code: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Parse the markup of an address cell. Anything that doesn't match,
/// including a missing cell, yields `"n/a"` in all four fields.
pub fn parse(markup: Option<&str>) -> ParsedAddress {
    let Some(caps) = markup.and_then(|m| ADDRESS_RE.captures(m)) else {
        debug!("Address markup did not match: {:?}", markup);
        return ParsedAddress::unavailable();
    };
    ParsedAddress {
        address_line1: caps[1].to_string(),
        city_name: caps[2].to_string(),
        region_code: caps[3].to_string(),
        post_code: caps[4].to_string(),
    }
}
