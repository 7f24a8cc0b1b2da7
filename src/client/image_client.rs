use std::fmt;
use std::sync::Arc;

use reqwest::{header::CONTENT_TYPE, StatusCode};
use uuid::Uuid;

use crate::{
    config::ClientConfig,
    error::{ArcadiaError, Result},
    models::{extension_from_content_type, Image, ImageRequest, RawImage},
    wrapper::{FileWrapper, NoWrapper},
};

/// Client for the Arcadia image API.
///
/// Cloning is cheap: clones share the HTTP session and the configuration.
/// The session's pooled connections are closed when the last clone is dropped.
#[derive(Clone)]
pub struct ImageClient<W = NoWrapper> {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    wrapper: Option<W>,
}

impl ImageClient<NoWrapper> {
    /// A client that always returns raw bytes.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::build(config, None)
    }
}

impl<W: FileWrapper> ImageClient<W> {
    /// A client that turns downloads into `W::File` whenever the request asks
    /// for a file.
    pub fn with_wrapper(config: ClientConfig, wrapper: W) -> Result<Self> {
        Self::build(config, Some(wrapper))
    }

    pub(crate) fn build(config: ClientConfig, wrapper: Option<W>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(config.default_headers()?)
            .build()?;

        log::debug!(
            "Arcadia client ready for {} (file wrapper: {})",
            config.base_url,
            if wrapper.is_some() { "yes" } else { "no" }
        );

        Ok(Self {
            http,
            config: Arc::new(config),
            wrapper,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn has_wrapper(&self) -> bool {
        self.wrapper.is_some()
    }

    /// Downloads an image and returns its bytes together with the extension
    /// announced by the response `Content-Type`.
    ///
    /// A 403 fails with [`ArcadiaError::Forbidden`]; every other status but 200
    /// fails with [`ArcadiaError::NotFound`]. In both cases the body is left
    /// unread. Transport failures come back as [`ArcadiaError::Http`].
    pub async fn fetch_raw(&self, request: &ImageRequest) -> Result<RawImage> {
        let url = request.endpoint_url(self.config.endpoint_root())?;
        let request_id = Uuid::new_v4();

        log::debug!("[req:{}] GET {}", request_id, url);

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            log::warn!(
                "[req:{}] Endpoint '{}' answered {}",
                request_id,
                request.image_type,
                status
            );
            return Err(ArcadiaError::from_status(status));
        }

        let extension = extension_from_content_type(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );
        let data = response.bytes().await?.to_vec();

        log::debug!(
            "[req:{}] Received {} bytes of {}",
            request_id,
            data.len(),
            extension
        );

        Ok(RawImage { data, extension })
    }

    /// Downloads an image. When the request wants a file and this client has
    /// a wrapper, the bytes are wrapped as `image.<ext>`; otherwise the raw
    /// bytes are returned.
    pub async fn fetch_image(&self, request: ImageRequest) -> Result<Image<W::File>> {
        let raw = self.fetch_raw(&request).await?;

        match &self.wrapper {
            Some(wrapper) if request.want_file => {
                let filename = raw.filename();
                Ok(Image::File(wrapper.wrap(raw.data, filename)))
            }
            _ => Ok(Image::Raw(raw.data)),
        }
    }
}

impl<W> fmt::Debug for ImageClient<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageClient")
            .field("base_url", &self.config.base_url)
            .field("user_agent", &self.config.user_agent)
            .field("has_wrapper", &self.wrapper.is_some())
            .finish_non_exhaustive()
    }
}
