//! TCGdex REST client (`https://api.tcgdex.net/v2/{lang}/...`).

use crate::core::CardSource;
use crate::domain::model::CardRecord;
use crate::utils::error::{BinderError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.tcgdex.net/v2";

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum LocalIdField {
    Text(String),
    Number(u64),
}

impl LocalIdField {
    fn into_string(self) -> String {
        match self {
            LocalIdField::Text(s) => s,
            LocalIdField::Number(n) => n.to_string(),
        }
    }
}

// 部分語系回傳 { name, id } 物件而不是字串
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RarityField {
    Text(String),
    Named {
        name: Option<String>,
        id: Option<String>,
    },
}

impl RarityField {
    fn into_name(self) -> Option<String> {
        match self {
            RarityField::Text(s) => Some(s),
            RarityField::Named { name, id } => name.or(id),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SetResponse {
    id: String,
    #[serde(default)]
    cards: Vec<CardBrief>,
}

/// Entry of a set listing; resolved into a full card with a second request.
#[derive(Debug, Clone, Deserialize)]
pub struct CardBrief {
    pub id: String,
    #[serde(rename = "localId", default)]
    local_id: Option<LocalIdField>,
    #[serde(default)]
    pub name: Option<String>,
}

impl CardBrief {
    pub fn local_id(&self) -> Option<String> {
        self.local_id.clone().map(LocalIdField::into_string)
    }
}

#[derive(Debug, Deserialize)]
struct CardResponse {
    id: String,
    #[serde(rename = "localId", default)]
    local_id: Option<LocalIdField>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    rarity: Option<RarityField>,
}

impl From<CardResponse> for CardRecord {
    fn from(card: CardResponse) -> Self {
        CardRecord {
            id: card.id,
            local_id: card.local_id.map(LocalIdField::into_string),
            name: card.name,
            rarity: card.rarity.and_then(RarityField::into_name),
            image_base: card.image,
        }
    }
}

/// Caller-owned client: build one and hand it to the pipeline.
#[derive(Debug, Clone)]
pub struct TcgdexClient {
    client: Client,
    endpoint: String,
    language: String,
    timeout: Option<Duration>,
}

impl TcgdexClient {
    pub fn new(endpoint: impl Into<String>, language: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint, language)
    }

    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            language: language.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout_seconds: Option<u64>) -> Self {
        self.timeout = timeout_seconds.map(Duration::from_secs);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.language, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, resource: &str) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);

        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(BinderError::NotFound {
                resource: resource.to_string(),
            });
        }
        if !status.is_success() {
            return Err(BinderError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CardSource for TcgdexClient {
    type Summary = CardBrief;

    async fn fetch_collection(&self, set_id: &str) -> Result<Vec<CardBrief>> {
        let url = self.url(&format!("sets/{}", set_id));
        let set: SetResponse = self.get_json(&url, &format!("set '{}'", set_id)).await?;
        tracing::debug!("Set {} listing has {} entries", set.id, set.cards.len());
        Ok(set.cards)
    }

    async fn resolve_full(&self, summary: &CardBrief) -> Result<CardRecord> {
        let url = self.url(&format!("cards/{}", summary.id));
        let card: CardResponse = self
            .get_json(&url, &format!("card '{}'", summary.id))
            .await?;
        Ok(card.into())
    }
}
