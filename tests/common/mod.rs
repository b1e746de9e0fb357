use std::fs;
use std::path::Path;
use std::process::Command;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::Value;

/// One request seen by a [`CaptureServer`].
#[derive(Clone, Debug)]
#[allow(dead_code)]
pub struct Captured {
    pub body: Value,
    pub content_type: Option<String>,
    pub request_id: Option<String>,
}

#[derive(Clone)]
struct CaptureState {
    status: StatusCode,
    delay: Duration,
    seen: Arc<Mutex<Vec<Captured>>>,
}

/// Stand-in AI assist endpoint. Records every POST to `/ai-assist`, waits
/// `delay`, then answers with a fixed status and an empty body.
pub struct CaptureServer {
    pub base_url: String,
    seen: Arc<Mutex<Vec<Captured>>>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
}

impl Drop for CaptureServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

#[allow(dead_code)]
impl CaptureServer {
    pub fn url(&self) -> String {
        format!("{}/ai-assist", self.base_url)
    }

    pub fn seen(&self) -> Vec<Captured> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

async fn capture(
    State(state): State<CaptureState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };
    let captured = Captured {
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        content_type: header("content-type"),
        request_id: header("x-request-id"),
    };
    if let Ok(mut seen) = state.seen.lock() {
        seen.push(captured);
    }
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    state.status
}

#[allow(dead_code)]
pub fn spawn_capture_server(status: u16, delay: Duration) -> Result<CaptureServer> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind capture server")?;
    listener
        .set_nonblocking(true)
        .context("set capture listener nonblocking")?;
    let addr = listener.local_addr().context("capture server addr")?;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = CaptureState {
        status: StatusCode::from_u16(status).context("capture server status")?,
        delay,
        seen: Arc::clone(&seen),
    };
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("build capture server runtime")?;
    thread::Builder::new()
        .name("capture-server".to_string())
        .spawn(move || {
            rt.block_on(async move {
                let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                    return;
                };
                let app = Router::new()
                    .route("/ai-assist", post(capture))
                    .with_state(state);
                let _ = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = rx.await;
                    })
                    .await;
            });
        })
        .context("spawn capture server thread")?;

    Ok(CaptureServer {
        base_url: format!("http://{}", addr),
        seen,
        shutdown: Some(tx),
    })
}

/// Writes `files` (workspace-relative name, contents) under `root`.
#[allow(dead_code)]
pub fn write_files(root: &Path, files: &[(&str, &[u8])]) -> Result<()> {
    for (name, bytes) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

/// Runs the binary and returns stdout, failing with both streams on a
/// non-zero exit.
#[allow(dead_code)]
pub fn run_cocode(args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_cocode"))
        .args(args)
        .output()
        .with_context(|| format!("run cocode {:?}", args))?;

    if !out.status.success() {
        anyhow::bail!(
            "cocode {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

/// Like [`run_cocode`] but expects a failure and returns stderr.
#[allow(dead_code)]
pub fn run_cocode_err(args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_cocode"))
        .args(args)
        .output()
        .with_context(|| format!("run cocode {:?}", args))?;

    if out.status.success() {
        anyhow::bail!(
            "cocode {:?} unexpectedly succeeded\nstdout:\n{}",
            args,
            String::from_utf8_lossy(&out.stdout)
        );
    }

    Ok(String::from_utf8_lossy(&out.stderr).to_string())
}
