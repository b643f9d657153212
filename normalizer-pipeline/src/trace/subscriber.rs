use serde_derive::Serialize;
use std::{
    fmt,
    fs::File,
    io::{self, Write},
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Mutex,
    },
};
use tracing::*;

/// Thread safe json logger that writes a [`LineRecord`] per traced event into a given log
/// file, one json object per line.
pub struct JsonLogger {
    log_file: Mutex<File>,
    next_span: AtomicU64,
    failed: AtomicBool,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
            next_span: AtomicU64::new(1),
            failed: AtomicBool::new(false),
        }
    }

    // Only the first failure is reported on standard error.
    fn write(&self, record: &LineRecord) {
        let result = serde_json::to_string(record)
            .map_err(io::Error::from)
            .and_then(|json| match self.log_file.lock() {
                Ok(mut file) => writeln!(file, "{}", json),
                Err(_) => Err(io::Error::new(
                    io::ErrorKind::Other,
                    "the log file lock is poisoned",
                )),
            });

        if let Err(e) = result {
            if !self.failed.swap(true, Ordering::Relaxed) {
                eprintln!("cannot write to the log file: {}", e);
            }
        }
    }
}

impl subscriber::Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes) -> span::Id {
        span::Id::from_u64(self.next_span.fetch_add(1, Ordering::Relaxed))
    }

    fn record(&self, _span: &span::Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::default();
        event.record(&mut recorder);

        if let Some(record) = LineRecord::try_from(recorder, event.metadata().level()) {
            self.write(&record);
        }
    }

    fn enter(&self, _span: &span::Id) {}

    fn exit(&self, _span: &span::Id) {}
}

/// A record of a pipeline event: the file it concerns and, for line events, the line
/// number, its text and either its output or the error that made the pipeline skip it.
#[derive(Serialize, PartialEq, Debug)]
struct LineRecord {
    event: String,
    level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl LineRecord {
    // Events without an event type are not pipeline events.
    fn try_from(value: Recorder, level: &Level) -> Option<Self> {
        Some(LineRecord {
            event: value.event?,
            level: level.to_string(),
            path: value.path,
            line: value.line,
            text: value.text,
            output: value.output,
            error: value.error,
        })
    }
}

/// Generic trace visitor to collect as many fields as it can.
#[derive(Default)]
struct Recorder {
    event: Option<String>,
    path: Option<String>,
    line: Option<u64>,
    text: Option<String>,
    output: Option<String>,
    error: Option<String>,
}

impl Recorder {
    fn set(&mut self, name: &str, value: String) {
        match name {
            super::EVENT_FIELD => self.event = Some(value),
            super::PATH_FIELD => self.path = Some(value),
            super::TEXT_FIELD => self.text = Some(value),
            super::OUTPUT_FIELD => self.output = Some(value),
            super::ERROR_FIELD => self.error = Some(value),
            _ => (),
        }
    }
}

impl field::Visit for Recorder {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        if field.name() == super::LINE_FIELD {
            self.line = Some(value);
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.set(field.name(), value.to_owned());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        self.set(field.name(), format!("{:?}", value));
    }
}
