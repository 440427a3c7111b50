use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a default, so a bare environment still boots.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// External hosted product page used as the "Buy Now" action on the
    /// Interview Master listing. Checkout itself happens off-site.
    pub buy_now_url: String,
    /// Remote hostnames allowed as image sources, surfaced to browsers via
    /// the Content-Security-Policy img-src directive.
    pub image_hosts: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            buy_now_url: std::env::var("BUY_NOW_URL")
                .unwrap_or_else(|_| "https://topmate.io/prepforge/interview-master".to_string()),
            image_hosts: std::env::var("IMAGE_HOSTS")
                .unwrap_or_else(|_| "images.unsplash.com,res.cloudinary.com".to_string())
                .split(',')
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .collect(),
        })
    }

    /// Builds the Content-Security-Policy value advertising the allowed
    /// image hosts alongside same-origin assets.
    pub fn csp_header(&self) -> String {
        let hosts: Vec<String> = self
            .image_hosts
            .iter()
            .map(|h| format!("https://{h}"))
            .collect();
        format!("img-src 'self' {}", hosts.join(" "))
    }
}
