//! Cursor handling for VPC collections
//!
//! VPC list responses carry a `next` link whose `start` query parameter is
//! the cursor for the following request. The link may be absolute or a
//! path-relative reference; only its query string is read.

use crate::models::PageLink;
use url::{ParseError, Url};

/// Name of the cursor query parameter
pub const START_PARAM: &str = "start";

// Only used to give relative links a scheme and host so they parse.
const RELATIVE_BASE: &str = "http://localhost";

/// Extract the `start` cursor from a `next` link
///
/// Returns an empty string when there is no next page, when the link cannot
/// be parsed, or when it carries no `start` parameter. An empty string means
/// the scan is finished.
pub fn get_next(next: Option<&PageLink>) -> String {
    let Some(link) = next else {
        return String::new();
    };

    match parse_link(&link.href) {
        Ok(url) => url
            .query_pairs()
            .find(|(key, _)| key == START_PARAM)
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default(),
        Err(e) => {
            tracing::debug!("Ignoring unparsable next link {}: {}", link.href, e);
            String::new()
        }
    }
}

fn parse_link(href: &str) -> Result<Url, ParseError> {
    match Url::parse(href) {
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)?.join(href),
        parsed => parsed,
    }
}
