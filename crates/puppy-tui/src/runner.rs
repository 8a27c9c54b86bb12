//! Main TUI runner - entry point and event loop

use puppy_app::{process, AppState, Message};
use puppy_core::prelude::*;

use super::{event, render};

/// Consecutive non-fatal draw or input errors tolerated before giving up
const MAX_CONSECUTIVE_ERRORS: u32 = 3;

/// Run the TUI until the user quits
///
/// `ratatui::try_init` installs the panic hook that restores the terminal.
pub fn run(mut state: AppState) -> Result<()> {
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!("TUI started on route {}", state.route());

    let result = run_loop(&mut term, &mut state);

    ratatui::restore();
    info!("TUI stopped");

    result
}

/// Draw, wait for input, update; single-threaded
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    let mut failures = 0;

    while !state.should_quit() {
        let step = terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))
            .and_then(|_| event::poll());

        match step {
            Ok(message) => {
                failures = 0;
                dispatch(state, message);
            }
            Err(err) => tolerate(err, &mut failures)?,
        }
    }

    Ok(())
}

fn dispatch(state: &mut AppState, message: Option<Message>) {
    if let Some(message) = message {
        trace!("Processing {:?}", message);
        process(state, message);
    }
}

/// Swallow a non-fatal error unless too many arrive in a row
fn tolerate(err: Error, failures: &mut u32) -> Result<()> {
    *failures += 1;
    if err.is_fatal() || *failures >= MAX_CONSECUTIVE_ERRORS {
        error!("TUI loop failed after {} error(s): {}", failures, err);
        return Err(err);
    }
    warn!("Skipping frame after error: {}", err);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_fatal_error_is_skipped() {
        let mut failures = 0;
        assert!(tolerate(Error::terminal("draw failed"), &mut failures).is_ok());
        assert_eq!(failures, 1);
    }

    #[test]
    fn test_fatal_error_stops_the_loop() {
        let mut failures = 0;
        let err = tolerate(Error::TerminalInit("no tty".into()), &mut failures).unwrap_err();
        assert!(matches!(err, Error::TerminalInit(_)));
    }

    #[test]
    fn test_repeated_errors_stop_the_loop() {
        let mut failures = 0;
        for _ in 1..MAX_CONSECUTIVE_ERRORS {
            assert!(tolerate(Error::terminal("draw failed"), &mut failures).is_ok());
        }
        assert!(tolerate(Error::terminal("draw failed"), &mut failures).is_err());
    }

    #[test]
    fn test_dispatch_applies_message() {
        let mut state = AppState::new();
        dispatch(&mut state, Some(Message::Quit));
        assert!(state.should_quit());
    }

    #[test]
    fn test_dispatch_without_message_is_noop() {
        let mut state = AppState::new();
        dispatch(&mut state, None);
        assert!(!state.should_quit());
    }
}
