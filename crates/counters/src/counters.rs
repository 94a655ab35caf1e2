use std::{collections::HashMap, ops::Deref, time::{Duration, Instant}};

use circular_buffer::CircularBuffer;
use parking_lot::{Mutex, MutexGuard};

const HISTORY_CAPACITY: usize = 1000;

static COUNTERS: Mutex<Option<Counters>> = Mutex::new(None);

/// One named sample stream with a running total and a bounded history.
pub struct CounterRecord {
    pub total: f64,
    history: CircularBuffer<(Instant, f64)>,
}

impl CounterRecord {
    pub fn new() -> Self {
        Self {
            total: 0.0,
            history: CircularBuffer::new(HISTORY_CAPACITY),
        }
    }

    pub fn sample(&mut self, value: f64) {
        self.total += value;
        self.history.push((Instant::now(), value));
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn latest_sample(&self) -> Option<&(Instant, f64)> {
        self.history.first()
    }

    pub fn get_latest_value(&self) -> f64 {
        match self.latest_sample() {
            Some((_, value)) => *value,
            None => 0.0,
        }
    }

    /// Samples no older than `duration`, newest first, as (age, value) pairs.
    /// The newest sample is always included so a stalled counter still reports
    /// its last known value.
    pub fn iter_past(&self, duration: Duration) -> impl Iterator<Item = (Duration, f64)> + '_ {
        let now = Instant::now();
        self.history
            .iter()
            .enumerate()
            .take_while(move |(index, (time, _))| {
                *index == 0 || now.duration_since(*time) <= duration
            })
            .map(move |(_, (time, value))| (now.duration_since(*time), *value))
    }

    /// Time elapsed between the two most recent samples.
    pub fn duration_of_last_sample(&self) -> Duration {
        let Some((last_time, _)) = self.latest_sample() else {
            return Duration::ZERO;
        };
        match self.history.nth_from_front(1) {
            Some((previous_time, _)) => *last_time - *previous_time,
            None => Instant::now() - *last_time,
        }
    }

    /// Average gap between samples over up to `samples` most recent samples.
    pub fn average_duration_past(&self, samples: usize) -> Duration {
        let Some((last_time, _)) = self.latest_sample() else {
            return Duration::ZERO;
        };
        let samples = samples.min(self.history.len().saturating_sub(1));
        match self.history.nth_from_front(samples) {
            Some((sampled_time, _)) if samples > 0 => (*last_time - *sampled_time) / samples as u32,
            _ => Duration::ZERO,
        }
    }

    pub fn average_past_value(&self, duration: Duration) -> f64 {
        let (sum, count) = self
            .iter_past(duration)
            .fold((0.0, 0u32), |(sum, count), (_, value)| (sum + value, count + 1));
        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }

    #[inline]
    pub fn average_past_value_seconds(&self, seconds: f64) -> f64 {
        self.average_past_value(Duration::from_secs_f64(seconds))
    }

    #[inline]
    pub fn average_past_value_second(&self) -> f64 {
        self.average_past_value_seconds(1.0)
    }

    pub fn sum_past_values(&self, duration: Duration) -> f64 {
        self.iter_past(duration).map(|(_, value)| value).sum()
    }

    #[inline]
    pub fn sum_past_values_seconds(&self, seconds: f64) -> f64 {
        self.sum_past_values(Duration::from_secs_f64(seconds))
    }

    #[inline]
    pub fn sum_past_values_second(&self) -> f64 {
        self.sum_past_values_seconds(1.0)
    }
}

/// Global registry of named counters behind a mutex.
pub struct Counters {
    map: HashMap<&'static str, CounterRecord>,
}

impl Counters {
    fn new() -> Self {
        Self { map: HashMap::new() }
    }

    pub fn get_latest_value(&self, name: &'static str) -> f64 {
        match self.map.get(name) {
            Some(record) => record.get_latest_value(),
            None => 0.0,
        }
    }

    pub fn get_total(&self, name: &'static str) -> f64 {
        match self.map.get(name) {
            Some(record) => record.total,
            None => 0.0,
        }
    }
}

impl Deref for Counters {
    type Target = HashMap<&'static str, CounterRecord>;
    fn deref(&self) -> &Self::Target {
        &self.map
    }
}

impl Counters {
    pub fn init() {
        *COUNTERS.lock() = Some(Self::new());
    }

    pub fn deinit() {
        *COUNTERS.lock() = None;
    }

    pub fn lock() -> MutexGuard<'static, Option<Counters>> {
        COUNTERS.lock()
    }

    pub fn with_counters<R>(func: impl FnOnce(&mut Counters) -> R) -> R {
        let mut lock = Self::lock();
        let counters = lock.as_mut().expect("Counters not initialized");
        func(counters)
    }

    pub fn register(name: &'static str) {
        Self::with_counters(|counters| {
            if counters.map.contains_key(name) {
                log::warn!("Counter '{}' already registered", name);
                return;
            }
            counters.map.insert(name, CounterRecord::new());
        });
    }

    pub fn sample(name: &'static str, value: f64) {
        Self::with_counters(|counters| {
            let Some(record) = counters.map.get_mut(name) else {
                log::warn!("Counter '{}' not registered", name);
                return;
            };
            record.sample(value);
        });
    }

    pub fn clear(name: &'static str) {
        Self::with_counters(|counters| {
            let Some(record) = counters.map.get_mut(name) else {
                log::warn!("Counter '{}' not registered", name);
                return;
            };
            record.clear();
        });
    }

    pub fn clear_all() {
        Self::with_counters(|counters| {
            for record in counters.map.values_mut() {
                record.clear();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_accumulates_total() {
        let mut record = CounterRecord::new();
        record.sample(1.0);
        record.sample(2.5);
        assert_eq!(record.total, 3.5);
        assert_eq!(record.get_latest_value(), 2.5);
    }

    #[test]
    fn empty_record_reports_zero() {
        let record = CounterRecord::new();
        assert_eq!(record.get_latest_value(), 0.0);
        assert_eq!(record.average_past_value_second(), 0.0);
        assert_eq!(record.duration_of_last_sample(), Duration::ZERO);
    }

    #[test]
    fn stalled_counter_still_reports_newest_sample() {
        let mut record = CounterRecord::new();
        record.sample(7.0);
        let past: Vec<_> = record.iter_past(Duration::ZERO).collect();
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].1, 7.0);
    }
}
