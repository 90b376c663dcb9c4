use crate::config::{Config, LogConfig};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::VecDeque};

thread_local! {
    static LOG_BUFFER: RefCell<VecDeque<LogEntry>> = const { RefCell::new(VecDeque::new()) };
}

///
/// Level
///

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Display, Serialize, Deserialize)]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    Warn,
    Error, // most severe
}

///
/// Topic
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    AbstractFactory,
    Builder,
    Command,
    Config,
    FactoryMethod,
    Observer,
    Prototype,
    Singleton,
    State,
    Strategy,
}

///
/// LogEntry
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogEntry {
    pub level: Level,
    pub topic: Option<Topic>,
    pub message: String,
}

#[macro_export]
macro_rules! log {
    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some($topic), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(
            @inner None::<$crate::log::Topic>,
            $crate::log::Level::$level,
            $fmt $(, $arg)*
        );
    }};

    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let message = format!($fmt $(, $arg)*);
        $crate::log::__emit($topic, $level, message);
    }};
}

///
/// LogBuffer
///
/// Bounded, per-thread record of every emitted entry.
///
/// The console copy is for people; the buffer is what tests and callers
/// inspect. Capacity comes from `log.max_entries` and the oldest entries are
/// dropped first.
///

pub struct LogBuffer;

impl LogBuffer {
    fn append(cfg: &LogConfig, entry: LogEntry) {
        let max = usize::try_from(cfg.max_entries).unwrap_or(usize::MAX);

        LOG_BUFFER.with_borrow_mut(|buf| {
            buf.push_back(entry);
            while buf.len() > max {
                buf.pop_front();
            }
        });
    }

    /// Point-in-time copy of the buffered entries, oldest first.
    #[must_use]
    pub fn snapshot() -> Vec<LogEntry> {
        LOG_BUFFER.with_borrow(|buf| buf.iter().cloned().collect())
    }

    /// Return true if any buffered entry for `topic` contains `needle`.
    #[must_use]
    pub fn contains(topic: Topic, needle: &str) -> bool {
        LOG_BUFFER.with_borrow(|buf| {
            buf.iter()
                .any(|e| e.topic == Some(topic) && e.message.contains(needle))
        })
    }

    pub fn clear() {
        LOG_BUFFER.with_borrow_mut(VecDeque::clear);
    }
}

///
/// Helpers
///

fn render(entry: &LogEntry, color: bool) -> String {
    let (open, reset) = match (color, entry.level) {
        (true, Level::Ok) => ("\x1b[32m", "\x1b[0m"),
        (true, Level::Info) => ("\x1b[34m", "\x1b[0m"),
        (true, Level::Warn) => ("\x1b[33m", "\x1b[0m"),
        (true, Level::Error) => ("\x1b[31m", "\x1b[0m"),
        _ => ("", ""),
    };

    let label = format!("{open}{:^5}{reset}", entry.level.to_string().to_uppercase());
    let topic = entry
        .topic
        .map_or_else(|| "...".to_string(), |t| t.to_string());

    format!("{label}|{topic:^17}| {}", entry.message)
}

#[doc(hidden)]
pub fn __emit(topic: Option<Topic>, level: Level, message: String) {
    let cfg = Config::get();
    if level < cfg.log.level {
        return;
    }

    let entry = LogEntry {
        level,
        topic,
        message,
    };
    let line = render(&entry, cfg.log.color);
    LogBuffer::append(&cfg.log, entry);

    println!("{line}");
}

///
/// TESTS
///
