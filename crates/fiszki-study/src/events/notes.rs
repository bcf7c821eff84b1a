use std::sync::Arc;

use fiszki_types::{AppEvent, NoteSummary};
use kanal::AsyncSender;

use super::send_session;
use crate::state::AppState;

/// Fetch the picker listing in the background
pub async fn handle_show_notes(
    state: Arc<AppState>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let limit = state.config.read().await.study.note_picker_limit;
    app_to_ui_tx
        .send(AppEvent::Display("Loading notes...".to_string()))
        .await?;

    let tx = ui_to_app_tx.clone();
    tokio::spawn(async move {
        let result = state
            .client
            .list_notes(limit)
            .await
            .map_err(|e| format!("{:#}", e));

        if let Err(e) = tx.send(AppEvent::NotesLoaded(result)).await {
            tracing::warn!("Dropped note listing: {}", e);
        }
    });

    Ok(())
}

pub async fn handle_notes_loaded(
    state: Arc<AppState>,
    result: Result<Vec<NoteSummary>, String>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match result {
        Ok(notes) => {
            tracing::info!("Loaded {} notes", notes.len());
            {
                let mut view = state.view.write().await;
                view.notes = notes;
                view.picker_open = true;
            }
            send_session(&state, app_to_ui_tx).await?;
        }
        Err(e) => {
            tracing::error!("Failed to load notes: {}", e);
            app_to_ui_tx
                .send(AppEvent::Display(format!("Error: {}", e)))
                .await?;
        }
    }

    Ok(())
}
