use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};
use tracing::{trace, warn};

/// What the game loop needs from a screen and keyboard.
pub trait Terminal {
    /// Replaces whatever is on screen with `lines`, top to bottom.
    fn draw<I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = String>;

    /// Waits at most `timeout` for a key press. Other events are skipped
    /// without ending the wait.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    /// Enters the alternate screen in raw mode with the cursor hidden.
    pub fn setup(&mut self, min_size: (u16, u16)) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).context("Failed to hide cursor")?;

        let (width, height) = terminal::size().context("Failed to read terminal size")?;
        if width < min_size.0 || height < min_size.1 {
            warn!(width, height, needed = ?min_size, "terminal smaller than the board");
        }

        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        Ok(())
    }
}

impl Terminal for TermManager {
    fn draw<I>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        queue!(self.stdout, terminal::Clear(ClearType::All)).context("Failed to clear screen")?;

        // Raw mode does not return the carriage on '\n', so place every line
        for (y, line) in lines.into_iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16), style::Print(line))
                .context("Failed to queue frame line")?;
        }

        self.stdout.flush().context("Failed to flush frame")
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        wait_for_key(timeout, |remaining| {
            if event::poll(remaining).context("Failed to poll for input")? {
                event::read().map(Some).context("Failed to read input")
            } else {
                Ok(None)
            }
        })
    }
}

/// Pulls events from `next_event` until a key arrives or `timeout` runs out.
/// `next_event` gets the time left and answers `None` once it has expired.
fn wait_for_key<F>(timeout: Duration, mut next_event: F) -> Result<Option<KeyEvent>>
where
    F: FnMut(Duration) -> Result<Option<Event>>,
{
    let deadline = Instant::now() + timeout;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match next_event(remaining)? {
            Some(Event::Key(key)) => {
                trace!(?key, "key pressed");
                return Ok(Some(key));
            }
            Some(other) => trace!(?other, "skipping non-key event"),
            None => return Ok(None),
        }
    }
}

#[cfg(test)]
pub use scripted::ScriptedTerminal;


#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::collections::VecDeque;

    fn replay(events: Vec<Event>) -> impl FnMut(Duration) -> Result<Option<Event>> {
        let mut events: VecDeque<Event> = events.into();
        move |_| Ok(events.pop_front())
    }

    #[test]
    fn test_resize_does_not_end_wait() {
        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        let events = vec![Event::Resize(80, 24), Event::Resize(100, 30), Event::Key(key)];

        let got = wait_for_key(Duration::from_millis(100), replay(events)).unwrap();

        assert_eq!(got, Some(key));
    }

    #[test]
    fn test_no_key_before_events_run_out() {
        let got = wait_for_key(Duration::ZERO, replay(vec![Event::Resize(80, 24)])).unwrap();
        assert_eq!(got, None);
    }
}
