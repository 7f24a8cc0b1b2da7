//! Async client for the [Arcadia](https://arcadia-api.xyz) image API.
//!
//! ```no_run
//! use arcadia::{ClientConfig, Image, ImageClient, ImageRequest};
//!
//! # async fn run() -> arcadia::Result<()> {
//! let client = ImageClient::new(ClientConfig::new("my-token"))?;
//! let image = client
//!     .fetch_image(ImageRequest::new("blur", "https://example.com/avatar.png"))
//!     .await?;
//! if let Image::Raw(bytes) = image {
//!     println!("{} bytes", bytes.len());
//! }
//! # Ok(())
//! # }
//! ```
pub mod client;
pub mod config;
pub mod error;
pub mod integrations;
pub mod logger;
pub mod models;
pub mod wrapper;

pub use client::{ArcadiaHost, ArcadiaSlot, ImageClient};
pub use config::ClientConfig;
pub use error::{ArcadiaError, Result};
pub use models::{Image, ImageRequest, RawImage};
pub use wrapper::{FileWrapper, NamedBytes, NamedBytesWrapper, NoWrapper};
