use std::time::Duration;

use fiszki_types::{AppEvent, Direction};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::ui::ui_loop;

#[tokio::test]
async fn test_commands_are_forwarded_until_quit() {
    let (ui_to_app_tx, ui_to_app_rx) = kanal::unbounded_async::<AppEvent>();
    let (_app_to_ui_tx, app_to_ui_rx) = kanal::unbounded_async::<AppEvent>();
    let mut output = Vec::new();

    let input: &[u8] = b"n\nbogus\ngen 2\nq\nn\n";
    timeout(
        Duration::from_secs(2),
        ui_loop(
            input,
            &mut output,
            app_to_ui_rx,
            ui_to_app_tx,
            CancellationToken::new(),
        ),
    )
    .await
    .expect("ui loop did not stop on quit")
    .unwrap();

    let mut events = Vec::new();
    while let Ok(Some(event)) = ui_to_app_rx.try_recv() {
        events.push(event);
    }
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], AppEvent::Navigate(Direction::Next)));
    assert!(matches!(&events[1], AppEvent::Generate(target) if target == "2"));
    assert!(matches!(events[2], AppEvent::Quit));

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains("unknown command `bogus`"));
}

#[tokio::test]
async fn test_closed_input_quits() {
    let (ui_to_app_tx, ui_to_app_rx) = kanal::unbounded_async::<AppEvent>();
    let (_app_to_ui_tx, app_to_ui_rx) = kanal::unbounded_async::<AppEvent>();
    let mut output = Vec::new();

    let input: &[u8] = b"";
    timeout(
        Duration::from_secs(2),
        ui_loop(
            input,
            &mut output,
            app_to_ui_rx,
            ui_to_app_tx,
            CancellationToken::new(),
        ),
    )
    .await
    .unwrap()
    .unwrap();

    assert!(matches!(ui_to_app_rx.try_recv(), Ok(Some(AppEvent::Quit))));
}

#[tokio::test]
async fn test_display_events_are_printed() {
    let (ui_to_app_tx, _ui_to_app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_to_ui_tx, app_to_ui_rx) = kanal::unbounded_async::<AppEvent>();
    // keeps the input open so only channel events drive the loop
    let (_keyboard, terminal) = tokio::io::duplex(64);
    let mut output = Vec::new();

    app_to_ui_tx
        .send(AppEvent::Display("Card 1 / 1 (100%)".to_string()))
        .await
        .unwrap();
    app_to_ui_tx.send(AppEvent::Quit).await.unwrap();

    timeout(
        Duration::from_secs(2),
        ui_loop(
            tokio::io::BufReader::new(terminal),
            &mut output,
            app_to_ui_rx,
            ui_to_app_tx,
            CancellationToken::new(),
        ),
    )
    .await
    .unwrap()
    .unwrap();

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.starts_with("Card 1 / 1 (100%)\n> "));
}

#[tokio::test]
async fn test_cancellation_stops_loop() {
    let (ui_to_app_tx, _ui_to_app_rx) = kanal::unbounded_async::<AppEvent>();
    let (_app_to_ui_tx, app_to_ui_rx) = kanal::unbounded_async::<AppEvent>();
    let (_keyboard, terminal) = tokio::io::duplex(64);
    let token = CancellationToken::new();
    token.cancel();

    let result = timeout(
        Duration::from_secs(2),
        ui_loop(
            tokio::io::BufReader::new(terminal),
            Vec::new(),
            app_to_ui_rx,
            ui_to_app_tx,
            token,
        ),
    )
    .await;

    assert!(matches!(result, Ok(Ok(()))));
}
