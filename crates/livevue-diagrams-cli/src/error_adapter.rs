//! Error adapter for converting DiagramError to miette diagnostics.
//!
//! The library reports errors through the plain [`std::error::Error`] trait;
//! the CLI wraps them so miette's graphical handler can show an error code
//! and a hint for each failure.

use std::fmt;

use log::{LevelFilter, error};
use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan};

use livevue_diagrams::DiagramError;

/// Adapter giving a [`DiagramError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a DiagramError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DiagramError::Io(_) => "livevue_diagrams::io",
            DiagramError::Write { .. } => "livevue_diagrams::write",
            DiagramError::Graph(_) => "livevue_diagrams::graph",
            DiagramError::Layout(_) => "livevue_diagrams::layout",
            DiagramError::Export(_) => "livevue_diagrams::export",
            DiagramError::Config(_) => "livevue_diagrams::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            DiagramError::Io(_) | DiagramError::Write { .. } => {
                "check that the output directory is writable"
            }
            DiagramError::Graph(_) => "every edge must connect nodes declared in the same diagram",
            DiagramError::Layout(_) => "try different spacing values in the [layout] section",
            DiagramError::Export(_) => "check the [style] section of the configuration",
            DiagramError::Config(_) => {
                "pass an existing TOML file with --config or remove the flag to use defaults"
            }
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`DiagramError`] into the list of errors to render.
///
/// Generation stops at the first failure, so the list holds one entry.
pub fn to_reportables(err: &DiagramError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}

/// Render `err` with miette's graphical handler and emit every report.
///
/// Reports go through the logger, or straight to `fallback` when logging is
/// turned off so a failed run is never silent.
///
/// # Errors
///
/// Returns an error when writing to `fallback` fails.
pub fn report(
    err: &DiagramError,
    log_level: LevelFilter,
    fallback: &mut impl fmt::Write,
) -> fmt::Result {
    let reporter = GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        reporter.render_report(&mut rendered, &reportable)?;

        if log_level == LevelFilter::Off {
            writeln!(fallback, "{rendered}")?;
        } else {
            error!("{rendered}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_graph_error() {
        let err = DiagramError::Graph("edge references unknown node `x`".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        assert_eq!(
            reportables[0].to_string(),
            "Graph error: edge references unknown node `x`"
        );
        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "livevue_diagrams::graph"
        );
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = DiagramError::write(
            "output/architecture.svg",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "livevue_diagrams::write");
        assert!(adapter.help().is_some());
        assert_eq!(std::error::Error::source(&adapter).unwrap().to_string(), "denied");
    }

    #[test]
    fn test_graphical_report_contains_code_and_help() {
        let err = DiagramError::Config("Missing configuration file: nope.toml".to_string());
        let reporter = miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::none())
            .with_width(200);

        let mut rendered = String::new();
        reporter
            .render_report(&mut rendered, &ErrorAdapter(&err))
            .unwrap();

        assert!(rendered.contains("livevue_diagrams::config"));
        assert!(rendered.contains("nope.toml"));
        assert!(rendered.contains("--config"));
    }

    #[test]
    fn test_report_falls_back_when_logging_is_off() {
        let err = DiagramError::Graph("edge references unknown node `x`".to_string());

        let mut fallback = String::new();
        report(&err, LevelFilter::Off, &mut fallback).unwrap();

        assert!(fallback.contains("unknown node `x`"));
        assert!(fallback.contains("livevue_diagrams::graph"));
    }

    #[test]
    fn test_report_uses_logger_when_enabled() {
        let err = DiagramError::Layout("no room".to_string());

        let mut fallback = String::new();
        report(&err, LevelFilter::Error, &mut fallback).unwrap();

        assert!(fallback.is_empty());
    }
}
