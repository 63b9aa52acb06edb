use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll interval while a transition is running
    animation_tick: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms);
        Self {
            tick_rate,
            animation_tick: tick_rate,
        }
    }

    /// Poll faster than `tick_rate_ms` while animating, at `fps` frames per second
    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        let animation_tick = if fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / u64::from(fps)).max(Duration::from_millis(1))
        };
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick,
        }
    }

    /// Poll for the next event, at animation rate when `fast` is set
    pub fn next(&self, fast: bool) -> Result<Option<AppEvent>> {
        let timeout = if fast { self.animation_tick } else { self.tick_rate };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse press, drag or release
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
