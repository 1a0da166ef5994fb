//! Release-listing scraper.
//!
//! The release server exposes one HTML directory index per
//! platform/channel, with one anchor per released version. The newest
//! release is resolved by scanning the anchors from the end of the
//! document backward and taking the first one that looks like a
//! four-part version. Directory-listing order is assumed chronological;
//! no semantic-version comparison is performed.

use regex::Regex;
use reqwest::Client;
use thiserror::Error;

use xwalk_ci_schema::{Channel, Platform, Version};

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No release version found in listing at {url}")]
    NoVersionFound { url: String },
}

/// The directory-index URL for one platform/channel.
pub fn listing_url(base_url: &str, platform: Platform, channel: Channel) -> String {
    format!("{}/{platform}/{channel}/", base_url.trim_end_matches('/'))
}

/// Pick the newest version out of a listing document.
///
/// Anchor hrefs are collected in document order, one trailing `/` is
/// stripped from each, and the list is scanned backward for the first
/// candidate that parses as a four-part version.
pub fn select_version(html: &str) -> Option<Version> {
    let re = Regex::new(r#"href="([^"]+)""#).expect("static regex");
    let candidates: Vec<&str> = re
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| {
            let href = m.as_str();
            href.strip_suffix('/').unwrap_or(href)
        })
        .collect();

    candidates
        .iter()
        .rev()
        .find_map(|c| Version::parse(c).ok())
}

/// Fetch the listing for `platform`/`channel` and resolve the newest
/// version in it.
///
/// # Errors
///
/// Returns [`ListingError::Http`] if the request fails or the server
/// answers with an error status (not retried), and
/// [`ListingError::NoVersionFound`] if no anchor in the document matches
/// the version pattern.
pub async fn latest_version(
    client: &Client,
    base_url: &str,
    platform: Platform,
    channel: Channel,
) -> Result<Version, ListingError> {
    let url = listing_url(base_url, platform, channel);
    tracing::debug!("Scraping release listing at {url}");

    let html = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let version = select_version(&html).ok_or(ListingError::NoVersionFound { url })?;
    tracing::info!("Resolved {platform}/{channel} to version {version}");
    Ok(version)
}
