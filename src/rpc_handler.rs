//! RPC method handler for the Bookmark Gallery JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested. `handle_method`
//! dispatches one call against the `App` and returns a JSON result or an
//! error message.

use std::path::Path;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::gallery_manager::GalleryManagerTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::errors::SelectionError;
use crate::types::filter::Selection;

/// Dispatch a JSON-RPC method call.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method(app: &mut App, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Gallery ───
        "gallery.import" => {
            let summary = if let Some(html) = params.get("html").and_then(|v| v.as_str()) {
                Some(app.import_html(html).map_err(|e| e.to_string())?)
            } else {
                let path = params.get("path").and_then(|v| v.as_str()).map(Path::new);
                app.import_file(path).await.map_err(|e| e.to_string())?
            };
            match summary {
                Some(summary) => Ok(json!({"imported": true, "summary": summary})),
                None => Ok(json!({"imported": false})),
            }
        }
        "gallery.view" => Ok(view_json(app)),
        "gallery.search" => {
            let term = params.get("term").and_then(|v| v.as_str()).ok_or("missing term")?;
            app.gallery.set_search_term(term);
            Ok(view_json(app))
        }
        "gallery.select" => {
            let selection = parse_selection(params).map_err(|e| e.to_string())?;
            app.gallery.toggle_selection(selection);
            Ok(view_json(app))
        }
        "gallery.clear_selection" => {
            app.gallery.clear_selection();
            Ok(view_json(app))
        }
        "gallery.categories" => Ok(json!({"items": app.gallery.category_tallies()})),
        "gallery.folders" => Ok(json!({"items": app.gallery.folder_tallies()})),

        // ─── Settings ───
        "settings.get" => {
            let settings = app.settings_engine.get_settings();
            serde_json::to_value(settings).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            app.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            app.apply_settings();
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            app.settings_engine.reset();
            app.apply_settings();
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

/// Builds a selection from `{"kind": ..., "value": ..., "category": ...}`.
pub fn parse_selection(params: &Value) -> Result<Selection, SelectionError> {
    let kind = params
        .get("kind")
        .and_then(|v| v.as_str())
        .ok_or(SelectionError::MissingField("kind"))?;
    let value = params
        .get("value")
        .and_then(|v| v.as_str())
        .ok_or(SelectionError::MissingField("value"))?;

    match kind {
        "category" => Ok(Selection::category(value)),
        "folder" => Ok(Selection::folder(value)),
        "sub_category" => {
            let category = params
                .get("category")
                .and_then(|v| v.as_str())
                .ok_or(SelectionError::MissingField("category"))?;
            Ok(Selection::sub_category(category, value))
        }
        other => Err(SelectionError::UnknownKind(other.to_string())),
    }
}

fn view_json(app: &App) -> Value {
    let items = app.gallery.visible();
    json!({
        "total": app.gallery.bookmarks().len(),
        "visible": items.len(),
        "search": app.gallery.search_term(),
        "selection": app.gallery.selection(),
        "items": items,
    })
}
