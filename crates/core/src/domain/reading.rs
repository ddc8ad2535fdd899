use chrono::{DateTime, Local, SecondsFormat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub fortune: &'static str,
    pub confidence: u8,
    pub timestamp: DateTime<Local>,
    pub recommendation: &'static str,
}

impl Reading {
    /// RFC 3339 / ISO-8601 with microseconds and the local offset.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}
