//! Bookmark Gallery RPC Server: JSON-RPC over stdin/stdout for a UI shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"gallery.import", "params":{"path":"bookmarks.html"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Requests are handled strictly in order, so at most one import is ever in flight.

use std::io::{self, Write};

use anyhow::Result;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use bookmark_gallery::app::App;
use bookmark_gallery::logging;
use bookmark_gallery::rpc_handler::handle_method;
use bookmark_gallery::services::settings_engine::SettingsEngineTrait;

fn respond(value: &Value) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", value)?;
    stdout.flush()
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var("BOOKMARK_GALLERY_CONFIG").ok();
    let mut app = App::new(config_path)?;
    logging::init_logging(&app.settings_engine.get_settings().logging.filter);
    app.report_settings_source();

    respond(&json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}))?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                respond(&json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));
        debug!("RPC call {} (id {})", method, id);

        let response = match handle_method(&mut app, method, &params).await {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        respond(&response)?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
