use std::sync::Arc;

use fiszki_types::{AppEvent, Flashcard, NoteSummary};
use kanal::AsyncSender;

use super::send_session;
use crate::state::AppState;

/// `gen 2` picks the second note of the last listing; anything else is an id
pub fn resolve_note_id(target: &str, notes: &[NoteSummary]) -> String {
    let target = target.trim();
    match target.parse::<usize>() {
        Ok(index) if (1..=notes.len()).contains(&index) => notes[index - 1].id.clone(),
        _ => target.to_string(),
    }
}

/// Start one extraction unless another is in flight
pub async fn handle_generate(
    state: Arc<AppState>,
    target: String,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let note_id = {
        let mut view = state.view.write().await;
        if !view.session.begin_generation() {
            drop(view);
            tracing::warn!("Generation requested while another is running");
            app_to_ui_tx
                .send(AppEvent::Display(
                    "Already generating flashcards, please wait.".to_string(),
                ))
                .await?;
            return Ok(());
        }
        resolve_note_id(&target, &view.notes)
    };

    tracing::info!("Generating flashcards from note {}", note_id);
    app_to_ui_tx
        .send(AppEvent::Display(format!(
            "Generating flashcards from note {}...",
            note_id
        )))
        .await?;

    let tx = ui_to_app_tx.clone();
    tokio::spawn(async move {
        let result = state
            .client
            .generate(&note_id)
            .await
            .map_err(|e| format!("{:#}", e));

        if let Err(e) = tx.send(AppEvent::GenerationFinished(result)).await {
            tracing::warn!("Dropped generation result: {}", e);
        }
    });

    Ok(())
}

pub async fn handle_generation_finished(
    state: Arc<AppState>,
    result: Result<Vec<Flashcard>, String>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    {
        let mut view = state.view.write().await;
        match &result {
            Ok(cards) => {
                tracing::info!("Received {} flashcards", cards.len());
                view.picker_open = false;
            }
            Err(e) => tracing::error!("Generation failed: {}", e),
        }
        view.session.finish_generation(result);
    }

    send_session(&state, app_to_ui_tx).await
}
