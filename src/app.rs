//! Fixed-rate game loop
//!
//! `App` owns the game state, the settings and the output writer. Keys are
//! handled as they arrive between ticks; at each deadline one tick runs to
//! completion and the frame is redrawn.

use std::io::Write;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::error::Error;
use crate::input::{Action, action_for};
use crate::renderer::{sample, terminal};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Next tick deadline
///
/// Deadlines advance by a fixed period. A loop that falls behind skips the
/// missed ticks instead of running them back to back.
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule {
    period: Duration,
    next: Instant,
}

impl TickSchedule {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    /// Time left before the next tick is due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Consume the due tick, if any, and arm the following one
    pub fn take_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }
}

/// Game instance holding all state
pub struct App<W: Write> {
    pub state: GameState,
    pub settings: Settings,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(settings: Settings, out: W) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed),
            settings,
            out,
        }
    }

    /// React to a key pressed between ticks
    pub fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow<()> {
        match action_for(key) {
            Some(Action::Shoot) => {
                self.state.shoot();
                ControlFlow::Continue(())
            }
            Some(Action::Terminate) => ControlFlow::Break(()),
            None => ControlFlow::Continue(()),
        }
    }

    /// One scheduler step: resolve, move, redraw
    pub fn step(&mut self) -> Result<Option<GameEvent>, Error> {
        let event = tick(&mut self.state, self.settings.tick_dt());
        self.render()?;
        Ok(event)
    }

    pub fn render(&mut self) -> Result<(), Error> {
        let frame = sample(
            &self.state,
            self.settings.grid_width,
            self.settings.grid_height,
        );
        terminal::draw_frame(&mut self.out, &frame)?;
        Ok(())
    }

    /// Run until the player quits
    pub fn run(&mut self) -> Result<(), Error> {
        log::info!("Running at {} fps", self.settings.fps);
        let period = self.settings.frame_duration()?;

        terminal::draw_banner(&mut self.out)?;
        self.render()?;

        let mut schedule = TickSchedule::new(period, Instant::now());

        loop {
            let wait = schedule.remaining(Instant::now());
            if event::poll(wait)? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_key(&key).is_break() {
                        log::info!("Quit at level {}", self.state.level);
                        return Ok(());
                    }
                }
            }

            if schedule.take_due(Instant::now()) {
                self.step()?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App<Vec<u8>> {
        let settings = Settings {
            seed: Some(42),
            ..Settings::default()
        };
        App::new(settings, Vec::new())
    }

    #[test]
    fn test_space_fires_once() {
        let mut app = app();
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(app.handle_key(&space).is_continue());
        let bullet = app.state.bullet.clone();
        assert!(bullet.is_some());
        assert!(app.handle_key(&space).is_continue());
        assert_eq!(app.state.bullet, bullet);
    }

    #[test]
    fn test_quit_key_breaks() {
        let mut app = app();
        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(&quit).is_break());
    }

    #[test]
    fn test_step_ticks_and_draws() {
        let mut app = app();
        app.step().unwrap();
        assert_eq!(app.state.time_ticks, 1);
        assert!(!app.out.is_empty());
    }

    #[test]
    fn test_seed_is_used() {
        let a = app();
        let b = app();
        assert_eq!(a.state.seed, 42);
        assert_eq!(a.state.items, b.state.items);
    }

    #[test]
    fn test_schedule_fixed_period() {
        let start = Instant::now();
        let period = Duration::from_millis(10);
        let mut schedule = TickSchedule::new(period, start);

        assert!(!schedule.take_due(start));
        assert_eq!(schedule.remaining(start), period);

        assert!(schedule.take_due(start + period));
        assert!(!schedule.take_due(start + period));
        assert_eq!(schedule.remaining(start + period), period);
    }

    #[test]
    fn test_schedule_skips_missed_ticks() {
        let start = Instant::now();
        let period = Duration::from_millis(10);
        let mut schedule = TickSchedule::new(period, start);

        let late = start + Duration::from_millis(55);
        assert!(schedule.take_due(late));
        // No burst of catch-up ticks
        assert!(!schedule.take_due(late));
        assert_eq!(schedule.remaining(late), period);
    }
}
