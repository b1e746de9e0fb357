use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::model::{AppConfig, FileId, random_hex};

use super::{AiAssistError, AiAssistRequest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

#[derive(Debug)]
pub struct AiAssistOutcome {
    pub token: RequestToken,
    pub request_id: String,
    pub file_id: FileId,
    /// HTTP status on success.
    pub result: Result<u16, AiAssistError>,
    /// A newer request was started before this one finished.
    pub superseded: bool,
}

pub struct AiAssistClient {
    url: String,
    options: Map<String, Value>,
    http: reqwest::blocking::Client,
    latest: Arc<AtomicU64>,
    outcomes_tx: Sender<AiAssistOutcome>,
    outcomes_rx: Receiver<AiAssistOutcome>,
}

fn post(
    http: &reqwest::blocking::Client,
    url: &str,
    request_id: &str,
    body: &Value,
) -> Result<u16, AiAssistError> {
    let resp = http
        .post(url)
        .header("X-Request-Id", request_id)
        .json(body)
        .send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(AiAssistError::Status(status.as_u16()));
    }
    Ok(status.as_u16())
}

impl AiAssistClient {
    pub fn new(url: String, options: Map<String, Value>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent("cocode")
            .timeout(timeout)
            .build()
            .context("build reqwest client")?;
        let (outcomes_tx, outcomes_rx) = mpsc::channel();
        Ok(Self {
            url,
            options,
            http,
            latest: Arc::new(AtomicU64::new(0)),
            outcomes_tx,
            outcomes_rx,
        })
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        Self::new(
            cfg.ai_assist_url(),
            cfg.ai_assist_options.clone(),
            Duration::from_secs(cfg.ai_assist_timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn request(&self, input_text: String, file_id: FileId, cursor: usize) -> AiAssistRequest {
        AiAssistRequest {
            options: self.options.clone(),
            input_text,
            file_id,
            insertion_cursor: cursor,
        }
    }

    /// Posts on the calling thread.
    pub fn send_blocking(&self, req: &AiAssistRequest) -> Result<u16, AiAssistError> {
        let request_id = random_hex(8).map_err(|e| AiAssistError::Build(format!("{:#}", e)))?;
        post(&self.http, &self.url, &request_id, &req.to_body())
    }

    /// Starts a background request and returns its token. Any request still in
    /// flight becomes superseded.
    pub fn start(&self, req: AiAssistRequest) -> Result<RequestToken> {
        let request_id = random_hex(8)?;
        let token = RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1);

        let http = self.http.clone();
        let url = self.url.clone();
        let latest = Arc::clone(&self.latest);
        let tx = self.outcomes_tx.clone();
        let body = req.to_body();
        let file_id = req.file_id;

        tracing::info!(
            request_id = request_id.as_str(),
            token = token.0,
            file_id = %file_id,
            cursor = req.insertion_cursor,
            prompt_chars = req.input_text.chars().count(),
            "starting AI assist request"
        );

        std::thread::Builder::new()
            .name(format!("ai-assist-{}", token.0))
            .spawn(move || {
                let result = post(&http, &url, &request_id, &body);
                let superseded = latest.load(Ordering::SeqCst) != token.0;
                match &result {
                    Ok(status) => {
                        tracing::info!(request_id = request_id.as_str(), status, superseded, "AI assist request done")
                    }
                    Err(err) => {
                        tracing::warn!(request_id = request_id.as_str(), error = %err, superseded, "AI assist request failed")
                    }
                }
                // The receiver lives as long as the client; a send error only
                // means the app is shutting down.
                let _ = tx.send(AiAssistOutcome {
                    token,
                    request_id,
                    file_id,
                    result,
                    superseded,
                });
            })
            .context("spawn AI assist worker")?;

        Ok(token)
    }

    pub fn latest(&self) -> Option<RequestToken> {
        match self.latest.load(Ordering::SeqCst) {
            0 => None,
            n => Some(RequestToken(n)),
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Drains finished requests without blocking.
    pub fn poll_outcomes(&self) -> Vec<AiAssistOutcome> {
        self.outcomes_rx.try_iter().collect()
    }

    /// Blocks until the next outcome arrives or `timeout` passes.
    pub fn wait_outcome(&self, timeout: Duration) -> Option<AiAssistOutcome> {
        self.outcomes_rx.recv_timeout(timeout).ok()
    }
}
