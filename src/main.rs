use arcadia::{logger, ClientConfig, ImageClient, ImageRequest};
use futures::future::join_all;
use std::env;
use std::fs;

const USAGE: &str = "usage: arcadia-fetch <endpoint> <url-or-text> [--text] [--variant N]...";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(
        logger::LoggerConfig::development().with_level(logger::LogLevel::Debug),
    )?;

    if dotenv_loaded {
        log::info!(".env file loaded");
    } else {
        log::warn!("No .env file found, using system environment variables");
    }

    let mut args = env::args().skip(1);
    let (endpoint, subject) = match (args.next(), args.next()) {
        (Some(endpoint), Some(subject)) => (endpoint, subject),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let mut generate = false;
    let mut variants = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text" => generate = true,
            "--variant" => {
                let value = args.next().ok_or(USAGE)?;
                variants.push(value.parse::<u32>()?);
            }
            other => {
                eprintln!("unknown argument: {}\n{}", other, USAGE);
                std::process::exit(2);
            }
        }
    }
    if variants.is_empty() {
        variants.push(0);
    }

    let config = ClientConfig::from_env();
    if config.auth_token.is_empty() {
        log::warn!("ARCADIA_TOKEN is not set, requests go out without a token");
    }
    let client = ImageClient::new(config)?;

    log::info!(
        "Fetching '{}' ({} variant(s)) from {}",
        endpoint,
        variants.len(),
        client.config().base_url
    );

    let requests = variants.iter().map(|&variant| {
        let request = ImageRequest::new(&endpoint, &subject)
            .with_variant(variant)
            .with_generate(generate);
        let client = client.clone();
        async move { (variant, client.fetch_raw(&request).await) }
    });

    let mut failures = 0;
    for (variant, result) in join_all(requests).await {
        match result {
            Ok(image) => {
                let filename = if variant == 0 {
                    image.filename()
                } else {
                    format!("image_{}.{}", variant, image.extension)
                };
                fs::write(&filename, &image.data)?;
                log::info!("Saved {} bytes to {}", image.len(), filename);
            }
            Err(e) => {
                failures += 1;
                log::error!("Variant {} failed: {}", variant, e);
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}
