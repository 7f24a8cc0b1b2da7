use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{ArcadiaError, Result};

fn default_want_file() -> bool {
    true
}

/// One call against an Arcadia endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Endpoint name, e.g. `"blur"` or `"triggered"`. Case does not matter.
    pub image_type: String,
    /// Source image URL, or free text when `generate` is set.
    pub subject: String,
    /// Endpoint variant. `0` means "no preference" and is not sent.
    #[serde(default)]
    pub variant: u32,
    /// Send `subject` as `text=` instead of `url=`.
    #[serde(default)]
    pub generate: bool,
    /// Ask for a framework file object when a wrapper is available.
    #[serde(default = "default_want_file")]
    pub want_file: bool,
}

impl ImageRequest {
    pub fn new(image_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            image_type: image_type.into(),
            subject: subject.into(),
            variant: 0,
            generate: false,
            want_file: true,
        }
    }

    /// Shorthand for a generate-mode request carrying free text.
    pub fn text(image_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(image_type, text).with_generate(true)
    }

    pub fn with_variant(mut self, variant: u32) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_generate(mut self, generate: bool) -> Self {
        self.generate = generate;
        self
    }

    pub fn with_file(mut self, want_file: bool) -> Self {
        self.want_file = want_file;
        self
    }

    fn subject_param(&self) -> &'static str {
        if self.generate {
            "text"
        } else {
            "url"
        }
    }

    /// `<root>/<image_type lower-cased>?{text|url}=<subject>[&type=<variant>]`
    pub fn endpoint_url(&self, root: &str) -> Result<Url> {
        if self.image_type.trim().is_empty() {
            return Err(ArcadiaError::RequestError(
                "Image type must not be empty".into(),
            ));
        }

        let root = root.trim_end_matches('/');
        let mut url = Url::parse(root)
            .map_err(|e| ArcadiaError::RequestError(format!("Invalid base URL {}: {}", root, e)))?;
        url.path_segments_mut()
            .map_err(|_| ArcadiaError::RequestError(format!("Base URL {} cannot take a path", root)))?
            .pop_if_empty()
            .push(&self.image_type.to_lowercase());

        {
            let mut query = url.query_pairs_mut();
            query.append_pair(self.subject_param(), &self.subject);
            if self.variant != 0 {
                query.append_pair("type", &self.variant.to_string());
            }
        }

        Ok(url)
    }
}

/// Image bytes as returned by the API, plus the extension taken from the
/// response content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub data: Vec<u8>,
    pub extension: String,
}

impl RawImage {
    /// `image.<extension>`, the name used for framework attachments.
    pub fn filename(&self) -> String {
        format!("image.{}", self.extension)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Result of `ImageClient::fetch_image`: raw bytes, or a file object built by
/// the client's wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Image<F> {
    Raw(Vec<u8>),
    File(F),
}

impl<F> Image<F> {
    pub fn is_file(&self) -> bool {
        matches!(self, Image::File(_))
    }

    pub fn into_raw(self) -> Option<Vec<u8>> {
        match self {
            Image::Raw(data) => Some(data),
            Image::File(_) => None,
        }
    }

    pub fn into_file(self) -> Option<F> {
        match self {
            Image::File(file) => Some(file),
            Image::Raw(_) => None,
        }
    }
}

/// Everything after the `/` of a `Content-Type` value, suffix included
/// (`image/svg+xml` gives `svg+xml`) and parameters stripped. A missing or
/// blank header counts as `application/octet-stream`.
pub(crate) fn extension_from_content_type(content_type: Option<&str>) -> String {
    let value = match content_type.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return mime::OCTET_STREAM.as_str().to_string(),
    };

    match value.parse::<mime::Mime>() {
        Ok(mime) => match mime.suffix() {
            Some(suffix) => format!("{}+{}", mime.subtype(), suffix),
            None => mime.subtype().as_str().to_string(),
        },
        Err(_) => {
            let essence = value.split(';').next().unwrap_or(value).trim();
            essence.rsplit('/').next().unwrap_or(essence).to_string()
        }
    }
}
