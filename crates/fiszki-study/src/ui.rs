use fiszki_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use crate::command::parse_command;

const PROMPT: &str = "> ";

/// Terminal loop: reads commands from `input`, prints what the app sends back
pub async fn ui_loop<R, W>(
    input: R,
    mut output: W,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel_token: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        tokio::select! {
            _ = cancel_token.cancelled() => break,

            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    ui_to_app_tx.send(AppEvent::Quit).await?;
                    break;
                };

                match parse_command(&line) {
                    Ok(Some(AppEvent::Quit)) => {
                        ui_to_app_tx.send(AppEvent::Quit).await?;
                        break;
                    }
                    Ok(Some(event)) => ui_to_app_tx.send(event).await?,
                    Ok(None) => write_block(&mut output, "").await?,
                    Err(hint) => write_block(&mut output, &hint).await?,
                }
            }

            event = app_to_ui_rx.recv() => {
                match event? {
                    AppEvent::Display(text) => write_block(&mut output, &text).await?,
                    AppEvent::Quit => break,
                    other => tracing::debug!("UI ignoring {:?}", other),
                }
            }
        }
    }

    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    if !text.is_empty() {
        output.write_all(text.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await
}
