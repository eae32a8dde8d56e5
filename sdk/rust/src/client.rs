use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReply {
    pub status: String,
    pub service: String,
    pub n8n_reachable: bool,
    pub n8n_url: String,
}

/// Status code and JSON body returned by `/api/execute`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteReply {
    pub status: StatusCode,
    pub body: Value,
}

impl ExecuteReply {
    /// `n8n_response` on success, `None` for error replies.
    pub fn downstream_response(&self) -> Option<&Value> {
        self.body.get("n8n_response")
    }

    /// `message` on error replies.
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

pub struct OrchestratorClient {
    client: Client,
    base_url: String,
}

impl OrchestratorClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder().no_proxy().build().unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Forward `payload` through the orchestrator.
    pub async fn execute<T: Serialize + ?Sized>(&self, payload: &T) -> Result<ExecuteReply, Box<dyn std::error::Error>> {
        let resp = self.client
            .post(format!("{}/api/execute", self.base_url))
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.json().await?;
        Ok(ExecuteReply { status, body })
    }

    /// Fetch the health report.
    pub async fn health(&self) -> Result<HealthReply, Box<dyn std::error::Error>> {
        let resp = self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json().await?)
    }

    /// Fetch the service descriptor.
    pub async fn info(&self) -> Result<Value, Box<dyn std::error::Error>> {
        let resp = self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json().await?)
    }
}
