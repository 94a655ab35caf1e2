use std::time::{Duration, Instant};

use crate::debug;

#[derive(Clone, Debug)]
pub struct Tick {
    pub order: u64,
    pub time: Instant,
    pub delta: Duration,
}

/// Fires ticks at a fixed frequency and keeps track of the time between them.
pub struct Clock {
    tick_interval: Duration,
    next_tick_scheduled: Instant,
    current_tick: Tick,

    // ticks-per-second measurement
    elapsed_seconds: f32,
    tick_counter: u32,
}

impl Clock {
    pub fn now(ticks_per_second: u64) -> Self {
        Self {
            tick_interval: Duration::from_secs_f64(1.0 / (ticks_per_second as f64)),
            next_tick_scheduled: Instant::now(),
            current_tick: Tick {
                order: 0,
                time: Instant::now(),
                delta: Duration::ZERO,
            },
            elapsed_seconds: 0.0,
            tick_counter: 0,
        }
    }

    /// Returns true when a tick is due. A performed tick updates the current
    /// tick and schedules the next one, compensating for late wakeups.
    pub fn tick(&mut self) -> bool {
        let time = Instant::now();
        if self.next_tick_scheduled > time {
            return false;
        }

        let overshoot = time - self.next_tick_scheduled;

        self.current_tick.order += 1;
        self.current_tick.delta = time - self.current_tick.time;
        self.current_tick.time = time;

        self.next_tick_scheduled = time + self.tick_interval.saturating_sub(overshoot);

        self.elapsed_seconds += self.current_tick.delta.as_secs_f32();
        self.tick_counter += 1;
        if self.elapsed_seconds > 1.0 {
            debug!("Ticks per second: {}", self.tick_counter);
            self.elapsed_seconds -= 1.0;
            self.tick_counter = 0;
        }

        true
    }

    pub fn current_tick(&self) -> &Tick {
        &self.current_tick
    }

    pub fn next_scheduled_tick(&self) -> &Instant {
        &self.next_tick_scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_fires_immediately() {
        let mut clock = Clock::now(30);
        assert!(clock.tick());
        assert_eq!(clock.current_tick().order, 1);
    }

    #[test]
    fn tick_is_not_due_right_after_one_fired() {
        let mut clock = Clock::now(1);
        assert!(clock.tick());
        assert!(!clock.tick());
        assert_eq!(clock.current_tick().order, 1);
    }

    #[test]
    fn next_tick_is_scheduled_in_the_future() {
        let mut clock = Clock::now(30);
        clock.tick();
        assert!(*clock.next_scheduled_tick() > clock.current_tick().time);
    }
}
