use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::api::HttpCatalog;
use crate::catalog::QueryController;
use crate::config::Config;
use crate::shutdown::{listen_for_signals, ShutdownCoordinator, ShutdownPhase};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the storefront view until the user quits or a signal arrives.
///
/// Input, fetch results and shutdown are multiplexed on the calling task;
/// every state mutation happens here, between awaits.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let api = HttpCatalog::new(&config.backend).context("Failed to create catalog client")?;
    let backend_url = api.base_url().to_string();

    let shutdown = ShutdownCoordinator::new();
    listen_for_signals(shutdown.handle());

    let (catalog_tx, mut catalog_rx) = mpsc::unbounded_channel();
    let mut app = App::new(QueryController::new(Arc::new(api), catalog_tx), backend_url);

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut events = EventHandler::new(tick_rate, shutdown.handle());

    app.start();
    tracing::info!(backend = %app.backend_url(), "Storefront started");

    let signals = shutdown.handle();
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Tick) | Some(AppEvent::Resize(..)) => {}
                None => break,
            },
            Some(event) = catalog_rx.recv() => app.on_catalog_event(event),
            _ = signals.wait() => app.request_quit(),
        }
    }

    shutdown.signal();
    shutdown.advance(ShutdownPhase::TearingDown);
    app.teardown();
    drop(guard);
    shutdown.advance(ShutdownPhase::Complete);

    tracing::info!(
        phase = ?shutdown.phase(),
        cart_items = app.cart().total_items(),
        "Storefront stopped"
    );
    Ok(())
}
