//! Streaming a response body to disk.

use crate::{Error, Result};
use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::{Response, Url};
use std::io;
use std::path::Path;
use tokio::{fs::File, io::AsyncWriteExt};

/// Suffix appended to every downloaded zone file.
pub const ARCHIVE_SUFFIX: &str = ".gz";

/// Output file name for `url`: its last path segment plus [`ARCHIVE_SUFFIX`].
pub fn output_file_name(url: &Url) -> Result<String> {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
        .map(|segment| format!("{segment}{ARCHIVE_SUFFIX}"))
        .ok_or_else(|| Error::InvalidUrl(format!("{url}: no file name in path")))
}

/// Writes the body of `response` to `path`, returning the number of bytes written.
///
/// An existing file is truncated. On failure the partial file stays on disk.
pub(crate) async fn stream_to_file(
    response: Response,
    path: &Path,
    pb: &ProgressBar,
) -> Result<u64> {
    let failed = |source: io::Error| Error::DownloadFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).await.map_err(failed)?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| failed(io::Error::other(e)))?;
        file.write_all(&chunk).await.map_err(failed)?;
        written += chunk.len() as u64;
        pb.set_position(written);
    }

    file.flush().await.map_err(failed)?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(url: &str) -> Result<String> {
        output_file_name(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_name_from_last_segment() {
        assert_eq!(
            name("https://czds-download-api.icann.org/czds/downloads/com.zone").unwrap(),
            "com.zone.gz"
        );
    }

    #[test]
    fn test_query_is_ignored() {
        assert_eq!(
            name("https://example.com/files/net.zone?sig=abc").unwrap(),
            "net.zone.gz"
        );
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(name("https://example.com/files/org.zone/").unwrap(), "org.zone.gz");
    }

    #[test]
    fn test_url_without_path_is_rejected() {
        assert!(matches!(name("https://example.com/"), Err(Error::InvalidUrl(_))));
    }
}
