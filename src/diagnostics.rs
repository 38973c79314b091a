use std::fmt;

/// Severity of a non-fatal anomaly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Human-readable report of something the decorator skipped or worked around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{level}: {}", self.message)
    }
}

/// Receiver for decorator diagnostics. Never used to signal a fatal condition.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);

    fn warn(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.emit(Diagnostic::new(Severity::Warning, message));
    }

    fn error(&mut self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.emit(Diagnostic::new(Severity::Error, message));
    }
}

/// Forwards diagnostics to `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Info => tracing::info!(target: "tui_treedecor", "{}", diagnostic.message),
            Severity::Warning => tracing::warn!(target: "tui_treedecor", "{}", diagnostic.message),
            Severity::Error => tracing::error!(target: "tui_treedecor", "{}", diagnostic.message),
        }
    }
}

/// Collects diagnostics in memory.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_keeps_order_and_severity() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.warn("missing item at index 2");
        sink.error("tag icon unavailable");

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].severity, Severity::Warning);
        assert_eq!(sink[1].to_string(), "error: tag icon unavailable");
    }
}
