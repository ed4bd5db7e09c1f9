use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use super::app::{App, View};
use super::event::{Event, EventHandler};
use super::keys::{map_key, Action};
use super::ui;
use crate::context::AppContext;
use crate::error::AdminError;
use crate::logging::{init_logging, log_error, log_info, log_panic_info};

pub async fn run_interactive_mode() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_logging();
    log_info("Starting interactive mode");

    std::panic::set_hook(Box::new(|info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log_panic_info(info);
    }));

    let ctx = AppContext::load();
    let mut app = App::new(ctx.session, ctx.client);

    // Setup terminal
    enable_raw_mode().map_err(|e| AdminError::Terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| AdminError::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // First fetch before the first frame so an authenticated operator lands
    // on a populated dashboard.
    if app.view == View::Dashboard {
        app.refresh_dashboard().await;
    }

    let events = EventHandler::new(100);

    loop {
        if let Err(e) = terminal.draw(|f| ui::draw(f, &app)) {
            log_error(&format!("Error drawing UI: {}", e));
            restore_terminal(&mut terminal)?;
            return Err(Box::new(e));
        }

        match events.recv()? {
            Event::Key(key_event) => {
                let action = map_key(key_event, app.view, &app.popup, app.search_active);

                match action {
                    // The login flow blocks on the browser redirect, so get a
                    // waiting frame on screen before starting it.
                    Action::Login if app.view == View::Login => {
                        app.loading = true;
                        terminal.draw(|f| ui::draw(f, &app))?;
                        app.do_login().await;
                        app.loading = false;
                    }
                    action => app.dispatch(action).await,
                }
            }
            Event::Tick => {
                app.prune_notifications();
            }
        }

        if app.should_quit {
            break;
        }
    }

    log_info("Exiting interactive mode");
    restore_terminal(&mut terminal)?;
    Ok(())
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
