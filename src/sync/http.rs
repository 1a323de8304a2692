//! HTTP Remote
//!
//! `ItemsRemote` over the JSON REST collection, using reqwest
//! (the browser `fetch` backend on wasm).

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use super::ItemsRemote;
use crate::config::AppConfig;
use crate::error::{SyncError, SyncResult};
use crate::models::{Item, ItemId};

/// `{base}/items`
pub fn items_url(base: &str) -> String {
    format!("{}/items", base.trim_end_matches('/'))
}

/// `{base}/items/{id}`
pub fn item_url(base: &str, id: &ItemId) -> String {
    format!("{}/{}", items_url(base), id.path_segment())
}

#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn addressed_url(&self, item: &Item) -> SyncResult<String> {
        match &item.id {
            Some(id) => Ok(item_url(&self.base_url, id)),
            None => Err(SyncError::MissingId {
                name: item.name.clone(),
            }),
        }
    }

    /// Send and require a 2xx status
    async fn send(method: &'static str, url: &str, request: RequestBuilder) -> SyncResult<Response> {
        log::debug!("[SYNC] {} {}", method, url);
        let response = request.send().await.map_err(|source| SyncError::Transport {
            method,
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl ItemsRemote for HttpRemote {
    async fn list(&self) -> SyncResult<Vec<Item>> {
        let url = items_url(&self.base_url);
        let response = Self::send("GET", &url, self.client.get(&url)).await?;
        response
            .json::<Vec<Item>>()
            .await
            .map_err(|source| SyncError::Decode {
                method: "GET",
                url,
                source,
            })
    }

    async fn create(&self, item: &Item) -> SyncResult<()> {
        let url = items_url(&self.base_url);
        Self::send("POST", &url, self.client.post(&url).json(item)).await?;
        Ok(())
    }

    async fn replace(&self, item: &Item) -> SyncResult<()> {
        let url = self.addressed_url(item)?;
        Self::send("PUT", &url, self.client.put(&url).json(item)).await?;
        Ok(())
    }

    async fn remove(&self, item: &Item) -> SyncResult<()> {
        let url = self.addressed_url(item)?;
        Self::send("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }
}
