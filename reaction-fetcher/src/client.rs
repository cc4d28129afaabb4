use crate::config::Config;
use crate::error::{Context, Error, ErrorKind, Result};
use crate::fetcher::ReactionSource;
use model::guild::EmojiRef;
use model::user::Reactor;
use reqwest::blocking;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

pub struct Client {
    client: blocking::Client,
    base_url: String,
    token: String,
}

impl Client {
    pub fn new(config: &Config, base_url: String) -> Result<Self> {
        let client = blocking::ClientBuilder::new()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Sending request");

        let req = self
            .client
            .get(url.as_str())
            .header(AUTHORIZATION, format!("Bot {}", self.token))
            .build()
            .map_err(|e| Error::from(ErrorKind::RequestBuildError(e)))
            .context("failed to create HTTP request")?;

        let res = self
            .client
            .execute(req)
            .map_err(|e| Error::from(ErrorKind::TransportError(e)))
            .context("failed to send HTTP request")?;

        let status = res.status();
        let body = res
            .bytes()
            .map_err(|e| Error::from(ErrorKind::TransportError(e)))
            .context("failed to read response body")?;

        debug!(%url, status = status.as_u16(), len = body.len(), "Received response");

        if status != StatusCode::OK {
            return Error::from(ErrorKind::ApiError {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            })
            .into();
        }

        serde_json::from_slice(&body).context("failed to unmarshal response")
    }
}

impl ReactionSource for Client {
    fn emoji(&self, guild_id: &str, emoji_id: &str) -> Result<EmojiRef> {
        self.get(&format!("/guilds/{}/emojis/{}", guild_id, emoji_id))
    }

    fn reactors(
        &self,
        channel_id: &str,
        message_id: &str,
        emoji: &str,
        limit: &str,
    ) -> Result<Vec<Reactor>> {
        self.get(&format!(
            "/channels/{}/messages/{}/reactions/{}?limit={}",
            channel_id, message_id, emoji, limit
        ))
    }
}
