use std::sync::Arc;
use std::time::Instant;

use fiszki_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::render::{HELP, render_notes, render_session};
use crate::state::AppState;

pub mod generate;
pub mod notes;

use generate::{handle_generate, handle_generation_finished};
use notes::{handle_notes_loaded, handle_show_notes};

/// App's main loop.
///
/// `ui_to_app_tx` feeds results of spawned service calls back into this loop.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");

    // show the empty deck on start
    send_session(&state, &app_to_ui_tx).await?;

    loop {
        let event = tokio::select! {
            _ = cancel_token.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);
        if matches!(event, AppEvent::Quit) {
            cancel_token.cancel();
            break;
        }

        handle_events(state.clone(), &ui_to_app_tx, &app_to_ui_tx, event).await?;
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

async fn handle_events(
    state: Arc<AppState>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Navigate(direction) => {
            let moved = {
                let mut view = state.view.write().await;
                view.picker_open = false;
                view.session.navigate(direction, Instant::now())
            };
            if moved {
                send_session(&state, app_to_ui_tx).await?;
            } else {
                tracing::debug!("Navigation {:?} ignored", direction);
            }
        }
        AppEvent::Flip => {
            {
                let mut view = state.view.write().await;
                view.picker_open = false;
                view.session.flip();
            }
            send_session(&state, app_to_ui_tx).await?;
        }
        AppEvent::SelectTab(tab) => {
            {
                let mut view = state.view.write().await;
                view.picker_open = false;
                view.session.select_tab(tab);
            }
            send_session(&state, app_to_ui_tx).await?;
        }
        AppEvent::ShowNotes => {
            handle_show_notes(state, ui_to_app_tx, app_to_ui_tx).await?;
        }
        AppEvent::NotesLoaded(result) => {
            handle_notes_loaded(state, result, app_to_ui_tx).await?;
        }
        AppEvent::Generate(target) => {
            handle_generate(state, target, ui_to_app_tx, app_to_ui_tx).await?;
        }
        AppEvent::GenerationFinished(result) => {
            handle_generation_finished(state, result, app_to_ui_tx).await?;
        }
        AppEvent::Help => {
            app_to_ui_tx.send(AppEvent::Display(HELP.to_string())).await?;
        }
        AppEvent::Display(_) | AppEvent::Quit => {
            // UI-only events
        }
    }

    Ok(())
}

/// Render whatever is on screen and push it to the UI
pub(crate) async fn send_session(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let text = {
        let view = state.view.read().await;
        if view.picker_open {
            render_notes(&view.notes)
        } else {
            render_session(&view.session)
        }
    };
    app_to_ui_tx.send(AppEvent::Display(text)).await?;
    Ok(())
}
