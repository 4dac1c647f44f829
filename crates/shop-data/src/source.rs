//! Catalog sources.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::LoadError;

/// Where the catalog document comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw catalog document.
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

/// Fetches the catalog with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    /// Abort the request after `timeout`. Without one the request may wait
    /// indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let fetch_error = |source| LoadError::Fetch {
            url: self.url.clone(),
            source,
        };

        let mut request = self.client.get(&self.url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await.map_err(fetch_error)?;
        Ok(body.to_vec())
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Reads the catalog from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path).await.map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source for a configured location: `http://` and `https://` URLs
/// are fetched, anything else is read as a file path.
pub fn source_for(location: &str, timeout: Option<Duration>) -> Box<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        let source = HttpSource::new(location);
        match timeout {
            Some(timeout) => Box::new(source.with_timeout(timeout)),
            None => Box::new(source),
        }
    } else {
        Box::new(FileSource::new(location))
    }
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        (**self).fetch().await
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
