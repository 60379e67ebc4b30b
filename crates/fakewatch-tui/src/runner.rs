//! Main TUI application loop

use fakewatch_app::{update, AppState, Message, Settings};
use fakewatch_client::FeedClient;
use fakewatch_core::prelude::*;

/// Chain a panic hook that drops out of the alternate screen first, so the
/// panic message lands on a usable terminal.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
}

/// Run the TUI until the user quits.
///
/// Connects to the feed first so an unreachable server fails fast with a
/// plain error instead of a blank alternate screen. Once the feed dies the
/// UI stays up showing its last state; there is no reconnection.
pub async fn run(settings: Settings) -> Result<()> {
    let mut client = FeedClient::connect(&settings.server.url).await?;
    info!("Starting TUI against {}", settings.server.url);

    install_panic_hook();
    let mut terminal = ratatui::init();

    let mut state = AppState::with_settings(settings);

    let result = (|| -> Result<()> {
        while !state.should_quit() {
            // Drain everything the feed task has queued before drawing, so
            // a burst of frames costs one redraw, not one per frame.
            while let Ok(event) = client.event_receiver().try_recv() {
                update(&mut state, Message::Feed(event));
            }

            terminal
                .draw(|frame| crate::render::view(frame, &state))
                .map_err(|e| Error::terminal(e.to_string()))?;

            if let Some(message) = crate::event::poll()? {
                update(&mut state, message);
            }
        }
        Ok(())
    })();

    ratatui::restore();
    result
}
