//! Discord support through serenity: downloads become `CreateAttachment`s
//! and the client can be kept in the bot's shared `TypeMap`.
use std::sync::Arc;

use serenity::all::CreateAttachment;
use serenity::prelude::{RwLock, TypeMap, TypeMapKey};

use crate::{client::ImageClient, config::ClientConfig, error::Result, wrapper::FileWrapper};

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscordFiles;

impl FileWrapper for DiscordFiles {
    type File = CreateAttachment;

    fn wrap(&self, data: Vec<u8>, filename: String) -> Self::File {
        CreateAttachment::bytes(data, filename)
    }
}

pub type DiscordImageClient = ImageClient<DiscordFiles>;

/// `TypeMap` key under which [`attach`] stores the client.
pub struct ArcadiaKey;

impl TypeMapKey for ArcadiaKey {
    type Value = Arc<DiscordImageClient>;
}

impl ImageClient<DiscordFiles> {
    pub fn discord(config: ClientConfig) -> Result<Self> {
        Self::with_wrapper(config, DiscordFiles)
    }
}

/// Returns the client stored in `data`, creating and storing it first if the
/// bot has none yet.
///
/// ```ignore
/// let arcadia = arcadia::integrations::discord::attach(&ctx.data, ClientConfig::from_env()).await?;
/// ```
pub async fn attach(data: &RwLock<TypeMap>, config: ClientConfig) -> Result<Arc<DiscordImageClient>> {
    {
        let map = data.read().await;
        if let Some(client) = map.get::<ArcadiaKey>() {
            return Ok(client.clone());
        }
    }

    let mut map = data.write().await;
    // Another task may have attached between the two locks.
    if let Some(client) = map.get::<ArcadiaKey>() {
        return Ok(client.clone());
    }

    log::info!("Attaching Arcadia client to Discord bot data");
    let client = Arc::new(ImageClient::discord(config)?);
    map.insert::<ArcadiaKey>(client.clone());
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_builds_attachment() {
        let attachment = DiscordFiles.wrap(vec![0x89, 0x50], "image.png".into());
        assert_eq!(attachment.filename, "image.png");
        assert_eq!(attachment.data, vec![0x89, 0x50]);
    }

    #[tokio::test]
    async fn test_attach_once() {
        let data = RwLock::new(TypeMap::new());
        let first = attach(&data, ClientConfig::new("first")).await.unwrap();
        let second = attach(&data, ClientConfig::new("second")).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.config().auth_token, "first");
        assert!(second.has_wrapper());
    }
}
