use std::{collections::HashMap, time::Duration};

use circular_buffer::CircularBuffer;
use log::warn;
use parking_lot::Mutex;

pub static STATISTICS: Mutex<Option<Statistic>> = Mutex::new(None);

pub fn init_statistics() {
    let mut statistics = STATISTICS.lock();
    if statistics.is_some() {
        warn!("Statistics already initialized");
    } else {
        *statistics = Some(Statistic {
            map: HashMap::new(),
            filter: String::new(),
        });
    }
}

pub struct Statistic {
    map: HashMap<&'static str, StatisticRecord>,
    pub filter: String,
}

impl Statistic {
    pub fn pinned(&self) -> impl Iterator<Item = (&'static str, &StatisticRecord)> {
        self.filtered().filter(|(_, record)| record.pinned)
    }

    pub fn unpinned(&self) -> impl Iterator<Item = (&'static str, &StatisticRecord)> {
        self.filtered().filter(|(_, record)| !record.pinned)
    }

    pub fn filtered(&self) -> impl Iterator<Item = (&'static str, &StatisticRecord)> {
        let filter = self.filter.to_lowercase();
        self.map
            .iter()
            .filter(move |(name, _)| {
                filter.is_empty() || name.to_lowercase().contains(filter.as_str())
            })
            .map(|(name, record)| (*name, record))
    }

    pub fn pin(&mut self, name: &'static str) {
        if let Some(record) = self.map.get_mut(name) {
            record.pinned = true;
        }
    }

    pub fn unpin(&mut self, name: &'static str) {
        if let Some(record) = self.map.get_mut(name) {
            record.pinned = false;
        }
    }
}

const HISTORY_LENGTH: usize = 100;

#[derive(Clone)]
pub struct StatisticRecord {
    pub pinned: bool,
    pub count: u32,
    pub total_time: Duration,
    pub max_time: Duration,
    pub min_time: Duration,
    history: CircularBuffer<Duration>,
}

impl StatisticRecord {
    pub fn new(pinned: bool) -> Self {
        StatisticRecord {
            count: 0,
            pinned,
            total_time: Duration::ZERO,
            max_time: Duration::ZERO,
            min_time: Duration::from_secs(u64::MAX),
            history: CircularBuffer::new(HISTORY_LENGTH),
        }
    }

    pub fn add(&mut self, duration: Duration) {
        self.count += 1;
        self.total_time += duration;
        self.max_time = self.max_time.max(duration);
        self.min_time = self.min_time.min(duration);
        self.history.push(duration);
    }

    pub fn average(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        self.total_time / self.count
    }

    pub fn latest(&self) -> Duration {
        self.history.first().copied().unwrap_or(Duration::ZERO)
    }
}

/// Measures the time from construction to drop and books it under `name`.
pub struct TimedScope {
    name: &'static str,
    start: std::time::Instant,
    pinned: bool,
}

impl TimedScope {
    pub fn new(name: &'static str, pinned: bool) -> Self {
        TimedScope {
            name,
            start: std::time::Instant::now(),
            pinned,
        }
    }
}

impl Drop for TimedScope {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let mut statistics = STATISTICS.lock();
        if let Some(current) = statistics.as_mut() {
            let record = current
                .map
                .entry(self.name)
                .or_insert_with(|| StatisticRecord::new(self.pinned));
            record.add(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tracks_count_extremes_and_average() {
        let mut record = StatisticRecord::new(false);
        record.add(Duration::from_millis(2));
        record.add(Duration::from_millis(4));
        assert_eq!(record.count, 2);
        assert_eq!(record.average(), Duration::from_millis(3));
        assert_eq!(record.max_time, Duration::from_millis(4));
        assert_eq!(record.min_time, Duration::from_millis(2));
        assert_eq!(record.latest(), Duration::from_millis(4));
    }

    #[test]
    fn empty_record_has_zero_average() {
        let record = StatisticRecord::new(false);
        assert_eq!(record.average(), Duration::ZERO);
        assert_eq!(record.latest(), Duration::ZERO);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mut statistic = Statistic {
            map: HashMap::new(),
            filter: "RENDER".to_owned(),
        };
        statistic.map.insert("app::render_frame", StatisticRecord::new(false));
        statistic.map.insert("app::update_tick", StatisticRecord::new(false));
        let names: Vec<_> = statistic.filtered().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["app::render_frame"]);
    }

    #[test]
    fn pinned_records_are_split_from_unpinned() {
        let mut statistic = Statistic {
            map: HashMap::new(),
            filter: String::new(),
        };
        statistic.map.insert("a", StatisticRecord::new(false));
        statistic.map.insert("b", StatisticRecord::new(false));
        statistic.pin("b");
        assert_eq!(statistic.pinned().count(), 1);
        assert_eq!(statistic.unpinned().count(), 1);
        statistic.unpin("b");
        assert_eq!(statistic.pinned().count(), 0);
    }
}
