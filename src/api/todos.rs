//! `/todos` resource of the demo task API.

use super::TaskApi;
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_LIST_LIMIT: u32 = 10;
const TODOS_URL: &str = "todos";

/// Task as exchanged with the remote API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub completed: bool,
}

impl RemoteTask {
    pub fn new(title: &str, completed: bool) -> Self {
        Self {
            user_id: None,
            id: None,
            title: title.to_string(),
            completed,
        }
    }
}

impl From<&Task> for RemoteTask {
    fn from(task: &Task) -> Self {
        Self {
            user_id: None,
            id: Some(task.id),
            title: task.title.clone(),
            completed: task.completed,
        }
    }
}

#[derive(Debug)]
pub struct RemoteTasks {
    client: Client,
    config: RemoteConfig,
}

impl RemoteTasks {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Uses a preconfigured HTTP client, e.g. one with custom timeouts or proxy rules.
    pub fn with_client(client: Client, config: &RemoteConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }
}

impl TaskApi for RemoteTasks {
    async fn list(&self) -> Result<Vec<RemoteTask>> {
        let url = self.url(&format!("{}?_limit={}", TODOS_URL, self.config.limit));
        let res = self.client.get(&url).send().await?.error_for_status()?;
        tracing::debug!(%url, status = %res.status(), "listed remote tasks");

        Ok(res.json::<Vec<RemoteTask>>().await?)
    }

    async fn create(&self, task: &RemoteTask) -> Result<RemoteTask> {
        let url = self.url(TODOS_URL);
        let res = self.client.post(&url).json(task).send().await?.error_for_status()?;
        tracing::debug!(%url, status = %res.status(), "created remote task");

        Ok(res.json::<RemoteTask>().await?)
    }

    async fn update(&self, id: i64, task: &RemoteTask) -> Result<RemoteTask> {
        let url = self.url(&format!("{}/{}", TODOS_URL, id));
        let res = self.client.put(&url).json(task).send().await?.error_for_status()?;
        tracing::debug!(%url, status = %res.status(), "updated remote task");

        Ok(res.json::<RemoteTask>().await?)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("{}/{}", TODOS_URL, id));
        let res = self.client.delete(&url).send().await?.error_for_status()?;
        tracing::debug!(%url, status = %res.status(), "deleted remote task");

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RemoteConfig {
    pub api_url: String,
    pub limit: u32,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl RemoteConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "remote".to_string(),
            name: "Remote API".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleRemote);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            limit: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteLimit.to_string())
                .default(config.limit)
                .interact_text()?,
        })
    }
}
