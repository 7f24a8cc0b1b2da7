pub mod image_client;

use once_cell::sync::OnceCell;

use crate::{config::ClientConfig, error::Result, wrapper::FileWrapper};

pub use image_client::ImageClient;

/// Storage a host application keeps for its attached client.
pub type ArcadiaSlot<W = crate::wrapper::NoWrapper> = OnceCell<ImageClient<W>>;

/// An application object (typically a bot) that carries one Arcadia client.
pub trait ArcadiaHost {
    type Wrapper: FileWrapper;

    fn arcadia_slot(&self) -> &ArcadiaSlot<Self::Wrapper>;
}

impl<W: FileWrapper> ImageClient<W> {
    /// Attaches a client to `host` on first use and returns the attached one
    /// afterwards. `config` and `wrapper` are only used by the first call.
    pub fn pluggable<H>(host: &H, config: ClientConfig, wrapper: Option<W>) -> Result<&ImageClient<W>>
    where
        H: ArcadiaHost<Wrapper = W>,
    {
        host.arcadia_slot().get_or_try_init(|| {
            log::info!("Attaching Arcadia client to host");
            ImageClient::build(config, wrapper)
        })
    }
}
