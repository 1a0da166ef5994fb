//! Streaming HTTP download to a local file.
//!
//! The artifact bytes are written verbatim to the destination; no
//! checksum validation is performed and a partially written file is left
//! in place on failure.

use std::path::Path;

use futures::StreamExt;
use reqwest::Client;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stream `url` into `dest`, returning the number of bytes written.
///
/// The response status is checked before the destination file is
/// created, so a rejected request leaves no file behind.
///
/// # Errors
///
/// Returns [`DownloadError::Http`] on request failure or an error
/// status, [`DownloadError::Io`] when the destination cannot be written.
pub async fn download_to(client: &Client, url: &str, dest: &Path) -> Result<u64, DownloadError> {
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
        .send()
        .await?
        .error_for_status()?;

    let mut file = File::create(dest).await?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use tempfile::TempDir;

    #[tokio::test]
    async fn writes_body_verbatim() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/pkg.zip")
            .with_status(200)
            .with_body(b"PK\x03\x04runtime-bytes".to_vec())
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("pkg.zip");
        let url = format!("{}/pkg.zip", server.url());

        let written = download_to(&Client::new(), &url, &dest).await.unwrap();
        assert_eq!(written, 17);
        assert_eq!(std::fs::read(&dest).unwrap(), b"PK\x03\x04runtime-bytes");
    }

    #[tokio::test]
    async fn error_status_leaves_no_file() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/missing.zip")
            .with_status(404)
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("missing.zip");
        let url = format!("{}/missing.zip", server.url());

        let err = download_to(&Client::new(), &url, &dest).await.unwrap_err();
        assert!(matches!(err, DownloadError::Http(_)));
        assert!(!dest.exists());
    }
}
