//! Terminal chat UI: one session, one completion in flight at a time.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::core::config::{Config, Settings};
use crate::core::llm::ApiCompletion;

use app::App;
use draw::draw;
use handlers::{HandleKeyContext, HandleResult, PendingChat};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI. Without an API key, the key prompt is shown first.
pub fn run(settings: Settings, api_key: Option<String>) -> io::Result<()> {
    let exit_message = {
        let _guard = TerminalGuard;
        run_loop(&settings, api_key)?
    };
    // Printed after the guard restored the terminal.
    if let Some(msg) = exit_message {
        eprintln!("{}", msg);
    }
    Ok(())
}

fn run_loop(settings: &Settings, api_key: Option<String>) -> io::Result<Option<String>> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    execute!(stdout, crossterm::event::EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut client: Option<Arc<ApiCompletion>> = api_key
        .as_deref()
        .map(|key| Arc::new(ApiCompletion::new(&Config::new(settings, key))));
    let mut app = App::new(settings.model_id.clone(), client.is_none());
    let mut pending_chat: Option<PendingChat> = None;

    loop {
        handlers::poll_pending_chat(&mut app, &mut pending_chat);

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Mouse(mouse) => {
                    let _ = handlers::handle_mouse(mouse, &mut app);
                }
                Event::Key(key) => {
                    let result = handlers::handle_key(
                        key,
                        HandleKeyContext {
                            app: &mut app,
                            settings,
                            client: &mut client,
                            pending_chat: &mut pending_chat,
                            rt: &rt,
                        },
                    );
                    if result == HandleResult::Break {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(app.exit_message.take())
}
