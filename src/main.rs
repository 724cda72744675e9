use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::{TerminalOptions, Viewport};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use sysfacts::app::{Config, LOG_ENV, Panel, default_catalog};
use sysfacts::data::{HostFacts, PlatformId};
use sysfacts::events::{AppEvent, handle_event};
use sysfacts::ui;
use sysfacts::utils::{CommandExecutor, ShellExecutor};

type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn main() {
    init_logging();
    let config = Config::from_env();
    let platform = PlatformId::current();
    let facts = Arc::new(HostFacts::collect());
    let executor: Arc<dyn CommandExecutor> = Arc::new(ShellExecutor::new(config.command_timeout));
    let catalog = default_catalog(&facts, &executor);
    let mut panel = Panel::new(platform, facts, &catalog);

    let result = if io::stdout().is_terminal() {
        run_inline(&mut panel, config.poll_interval)
    } else {
        print_plain(&mut panel, config.poll_interval)
    };
    panel.teardown();

    if let Err(err) = result {
        error!(error = %err, "sysfacts could not render the panel");
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_inline(panel: &mut Panel, poll: Duration) -> sysfacts::Result<()> {
    let (_, height) = ui::panel_size(panel);
    let mut terminal = setup_terminal(height)?;
    install_panic_hook();

    let result = run_app(&mut terminal, panel, poll);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal(height: u16) -> io::Result<AppTerminal> {
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )
    .inspect_err(|_| {
        let _ = disable_raw_mode();
    })
}

/// Leaves the cursor on the panel's last row so the prompt lands below it.
fn restore_terminal(terminal: &mut AppTerminal) -> io::Result<()> {
    let area = terminal.get_frame().area();
    terminal.set_cursor_position(Position::new(0, area.bottom().saturating_sub(1)))?;
    terminal.show_cursor()?;
    disable_raw_mode()?;
    println!();
    Ok(())
}

/// Only a render-thread panic restores the terminal. Worker panics end up as
/// empty fields.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if is_main_thread() {
            restore_terminal_raw();
            default_hook(info);
        } else {
            debug!(panic = %info, "worker thread panicked");
        }
    }));
}

fn is_main_thread() -> bool {
    std::thread::current().name() == Some("main")
}

fn restore_terminal_raw() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show);
}

/// Paints once, then repaints as asynchronous fields land, until every
/// field has settled or the user aborts.
fn run_app(terminal: &mut AppTerminal, panel: &mut Panel, poll: Duration) -> sysfacts::Result<()> {
    terminal.draw(|frame| ui::render(frame, panel))?;

    while !panel.is_settled() {
        if event::poll(poll)? {
            let event = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
                _ => None,
            };
            if let Some(event) = event {
                let result = handle_event(panel, event);
                if result.should_exit() {
                    return Ok(());
                }
                if result.needs_redraw() {
                    terminal.draw(|frame| ui::render(frame, panel))?;
                }
            }
        }

        if handle_event(panel, AppEvent::Tick).needs_redraw() {
            terminal.draw(|frame| ui::render(frame, panel))?;
        }
    }

    Ok(())
}

fn print_plain(panel: &mut Panel, poll: Duration) -> sysfacts::Result<()> {
    panel.wait_until_settled(poll);
    let mut stdout = io::stdout().lock();
    for line in ui::render_plain(panel) {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn worker_threads_are_not_main() {
        let unnamed = thread::spawn(is_main_thread).join().unwrap();
        assert!(!unnamed);

        let worker = thread::Builder::new()
            .name("sysfacts-field".to_string())
            .spawn(is_main_thread)
            .unwrap()
            .join()
            .unwrap();
        assert!(!worker);
    }

    #[test]
    fn thread_named_main_is_main() {
        let main_like = thread::Builder::new()
            .name("main".to_string())
            .spawn(is_main_thread)
            .unwrap()
            .join()
            .unwrap();
        assert!(main_like);
    }
}
