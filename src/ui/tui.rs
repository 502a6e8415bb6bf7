// src/ui/tui.rs
//! Terminal lifecycle and the main event loop.

use std::{
    io,
    sync::mpsc::{self, Receiver},
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{
    api::{ApiEvent, ApiWorker, BackendClient},
    app::App,
    config::Config,
};

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the UI until the user quits, talking to the service at `url`.
pub fn run(config: Config, url: &str) -> Result<()> {
    let client = BackendClient::new(url)?;
    let (tx, rx) = mpsc::channel();
    let worker = ApiWorker::new(client, tx);
    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_loop(&mut terminal, &mut app, &worker, &rx);

    // Restore the terminal even when the loop errored.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    worker: &ApiWorker,
    rx: &Receiver<ApiEvent>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Completed backend calls first, then any requests they caused.
        for api_event in rx.try_iter() {
            app.apply_event(api_event);
        }
        for request in app.drain_requests() {
            worker.submit(request);
        }

        terminal.draw(|f| app.draw(f))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                CEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    if app.on_key(key) {
                        return Ok(());
                    }
                }
                CEvent::Mouse(mouse) => app.on_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
            app.tick();
        }
    }
}
