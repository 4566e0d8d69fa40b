use std::any::Any;

use log::info;
use roster_states::{State, snapshot_clone};
use serde::Deserialize;
use ustr::Ustr;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_PAGE_SIZE: u32 = 5;
/// Used when the upstream does not report `X-Total-Count`.
pub const DEFAULT_FALLBACK_TOTAL_COUNT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub fallback_total_count: u32,
}

/// Environment overlay; every field is optional and falls back to the defaults.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_api_base_url: Option<String>,
    roster_page_size: Option<u32>,
    roster_fallback_total_count: Option<u32>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: trim_base_url(base_url.into()),
            ..Self::default()
        }
    }

    /// `{api_base_url}/users`
    pub fn users_url(&self) -> Ustr {
        Ustr::from(&format!("{}/users", self.api_base_url))
    }

    /// Reads `ROSTER_API_BASE_URL`, `ROSTER_PAGE_SIZE` and `ROSTER_FALLBACK_TOTAL_COUNT`.
    pub fn from_env() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(std::env::vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            roster_api_base_url,
            roster_page_size,
            roster_fallback_total_count,
        } = raw;

        let api_base_url = match roster_api_base_url {
            Some(url) if url.trim().is_empty() => {
                anyhow::bail!("ROSTER_API_BASE_URL must not be empty")
            }
            Some(url) => {
                info!("Using provided ROSTER_API_BASE_URL: {url}");
                trim_base_url(url)
            }
            None => DEFAULT_API_BASE_URL.to_owned(),
        };

        let page_size = roster_page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            anyhow::bail!("ROSTER_PAGE_SIZE must be at least 1");
        }

        Ok(Self {
            api_base_url,
            page_size,
            fallback_total_count: roster_fallback_total_count
                .unwrap_or(DEFAULT_FALLBACK_TOTAL_COUNT),
        })
    }
}

fn trim_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            fallback_total_count: DEFAULT_FALLBACK_TOTAL_COUNT,
        }
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        snapshot_clone(self)
    }
}
