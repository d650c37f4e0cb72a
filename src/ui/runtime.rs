use crate::api::ContentService;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetcher::Fetcher;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Runs the reader until the user quits. Network calls are spawned on
/// `runtime`; the UI loop itself stays on the calling thread.
pub fn run(config: Config, service: Arc<dyn ContentService>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let fetcher = Fetcher::new(runtime, service, events.sender());
    let mut app = App::new(config, fetcher);
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => terminal.autoresize()?,
            Ok(AppEvent::Fetched(outcome)) => app.on_fetched(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Reader closed");
    drop(app);
    drop(guard);
    Ok(())
}
