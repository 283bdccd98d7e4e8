//! Diagnostics sink threaded through the parse phase.
//!
//! The parser never logs on its own; callers hand it a sink. The CLI uses
//! [`TracingDiagnostics`], the WASM surface and tests use
//! [`CollectedDiagnostics`].

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
}

pub trait Diagnostics {
    fn emit(&mut self, level: Level, message: &str);

    fn debug(&mut self, message: &str) {
        self.emit(Level::Debug, message);
    }

    fn info(&mut self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn warn(&mut self, message: &str) {
        self.emit(Level::Warn, message);
    }
}

/// Forwards every message to a `tracing` event of the matching level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&mut self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!("{message}"),
            Level::Info => tracing::info!("{message}"),
            Level::Warn => tracing::warn!("{message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub level: Level,
    pub message: String,
}

/// Buffers messages in emission order.
#[derive(Debug, Default, Clone)]
pub struct CollectedDiagnostics {
    pub messages: Vec<Message>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(&self, level: Level) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(move |m| m.level == level)
            .map(|m| m.message.as_str())
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn emit(&mut self, level: Level, message: &str) {
        self.messages.push(Message {
            level,
            message: message.to_string(),
        });
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Diagnostics for Silent {
    fn emit(&mut self, _level: Level, _message: &str) {}
}
