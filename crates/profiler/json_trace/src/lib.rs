//! Records scope enter/exit events and dumps them as a chrome://tracing
//! compatible JSON file when the session guard drops.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use parking_lot::Mutex;
use serde::ser::{Serialize, SerializeMap, Serializer};

static SESSION: Mutex<Option<TraceSession>> = Mutex::new(None);

static NEXT_THREAD_INDEX: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static THREAD_INDEX: u64 = NEXT_THREAD_INDEX.fetch_add(1, Ordering::Relaxed);
}

fn current_thread_index() -> u64 {
    THREAD_INDEX.with(|index| *index)
}

#[derive(Clone, Copy)]
pub enum EventCategory {
    Performance,
    Rendering,
    Update,
}

impl EventCategory {
    fn code(&self) -> &'static str {
        match self {
            EventCategory::Performance => "performance",
            EventCategory::Rendering => "rendering",
            EventCategory::Update => "update",
        }
    }
}

#[derive(Clone, Copy)]
enum EventPhase {
    Begin,
    End,
    Metadata,
}

impl EventPhase {
    fn code(&self) -> &'static str {
        match self {
            EventPhase::Begin => "B",
            EventPhase::End => "E",
            EventPhase::Metadata => "M",
        }
    }
}

struct TraceEvent {
    name: &'static str,
    category: &'static str,
    phase: EventPhase,
    timestamp_us: u128,
    thread_index: u64,
    args: Option<Box<dyn erased_serde::Serialize + Send>>,
}

impl Serialize for TraceEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", self.name)?;
        map.serialize_entry("cat", self.category)?;
        map.serialize_entry("ph", self.phase.code())?;
        map.serialize_entry("ts", &self.timestamp_us)?;
        map.serialize_entry("pid", &std::process::id())?;
        map.serialize_entry("tid", &self.thread_index)?;
        if let Some(args) = &self.args {
            map.serialize_entry("args", args)?;
        }
        map.end()
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceFile<'a> {
    trace_events: &'a [TraceEvent],
    display_time_unit: &'static str,
}

struct TraceSession {
    name: &'static str,
    start: Instant,
    events: Vec<TraceEvent>,
}

fn record_event(
    name: &'static str,
    category: &'static str,
    phase: EventPhase,
    args: Option<Box<dyn erased_serde::Serialize + Send>>,
) {
    let mut lock = SESSION.lock();
    if let Some(session) = lock.as_mut() {
        session.events.push(TraceEvent {
            name,
            category,
            phase,
            timestamp_us: session.start.elapsed().as_micros(),
            thread_index: current_thread_index(),
            args,
        });
    }
}

/// Opens a trace session. Dropping the guard writes `<name>.trace.json`
/// into the working directory.
pub struct SessionGuard {
    owns_session: bool,
}

impl SessionGuard {
    pub fn new(name: &'static str) -> Self {
        let mut lock = SESSION.lock();
        if lock.is_some() {
            log::warn!("Trace session already open, ignoring '{}'", name);
            return SessionGuard { owns_session: false };
        }
        *lock = Some(TraceSession {
            name,
            start: Instant::now(),
            events: Vec::new(),
        });
        SessionGuard { owns_session: true }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if !self.owns_session {
            return;
        }
        let Some(session) = SESSION.lock().take() else {
            return;
        };
        let file_name = format!("{}.trace.json", session.name);
        let trace_file = TraceFile {
            trace_events: &session.events,
            display_time_unit: "ms",
        };
        let result = std::fs::File::create(&file_name)
            .map_err(|error| error.to_string())
            .and_then(|file| serde_json::to_writer(file, &trace_file).map_err(|error| error.to_string()));
        match result {
            Ok(()) => log::info!("Trace with {} events written to {}", session.events.len(), file_name),
            Err(error) => log::error!("Failed to write trace {}: {}", file_name, error),
        }
    }
}

/// Emits a begin event on construction and the matching end event on drop.
pub struct EventGuard {
    name: &'static str,
    category: &'static str,
}

impl EventGuard {
    pub fn new<A: serde::Serialize + Send + 'static>(
        name: &'static str,
        category: EventCategory,
        args: Option<A>,
    ) -> Self {
        let category = category.code();
        let args = args.map(|args| Box::new(args) as Box<dyn erased_serde::Serialize + Send>);
        record_event(name, category, EventPhase::Begin, args);
        EventGuard { name, category }
    }
}

impl Drop for EventGuard {
    fn drop(&mut self) {
        record_event(self.name, self.category, EventPhase::End, None);
    }
}

/// Names the current thread in the trace.
pub struct ThreadGuard;

impl ThreadGuard {
    pub fn new(name: &'static str) -> Self {
        #[derive(serde::Serialize)]
        struct ThreadName {
            name: &'static str,
        }
        record_event(
            "thread_name",
            "__metadata",
            EventPhase::Metadata,
            Some(Box::new(ThreadName { name })),
        );
        ThreadGuard
    }
}
