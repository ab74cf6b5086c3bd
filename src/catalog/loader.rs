//! Catalog loading from a local file or an HTTP(S) URL

use reqwest::Client;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use super::{Catalog, CatalogError};

/// Where the catalog document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Interpret a configured source string
    ///
    /// `http://` and `https://` prefixes select a URL; anything else is a path.
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            CatalogSource::Url(trimmed.to_string())
        } else {
            CatalogSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Fetches and parses catalog documents
pub struct CatalogLoader {
    client: Client,
    timeout: Duration,
}

impl CatalogLoader {
    /// Create a loader whose HTTP requests give up after `timeout`
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    /// Load and validate a catalog
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read or the request fails or times out
    /// - The response status is not successful (2xx)
    /// - The document is not a valid catalog
    pub async fn load(&self, source: &CatalogSource) -> Result<Catalog, CatalogError> {
        let bytes = match source {
            CatalogSource::File(path) => self.read_file(path).await?,
            CatalogSource::Url(url) => self.fetch(url).await?,
        };

        debug!(source = %source, bytes = bytes.len(), "Catalog document read");
        Catalog::from_json_slice(&bytes)
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, CatalogError> {
        tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        let http_error = |source| CatalogError::Http {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(http_error)?;

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let body = response.bytes().await.map_err(http_error)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_source_parse() {
        assert_eq!(
            CatalogSource::parse("https://example.com/pricing-data.json"),
            CatalogSource::Url("https://example.com/pricing-data.json".to_string())
        );
        assert_eq!(
            CatalogSource::parse("pricing-data.json"),
            CatalogSource::File(PathBuf::from("pricing-data.json"))
        );
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"a": {{"name": "A", "color": "#000", "plans": [{{"name": "Free"}}]}}}}"##
        )
        .unwrap();

        let loader = CatalogLoader::new(Duration::from_secs(5));
        let source = CatalogSource::File(file.path().to_path_buf());
        let catalog = loader.load(&source).await.unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let loader = CatalogLoader::new(Duration::from_secs(5));
        let source = CatalogSource::File(PathBuf::from("/nonexistent/pricing-data.json"));
        let result = loader.load(&source).await;
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
