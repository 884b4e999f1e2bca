//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the tool's error types and miette's
//! rich diagnostic formatting. Parse errors carry the offending file's text and
//! the span TOML reported, so they render with a source snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use coulomb::{ConfigError, LayoutError, SimulationError};

use crate::error::CliError;

/// Adapter implementing [`MietteDiagnostic`] for a [`CliError`].
pub struct ErrorAdapter<'a>(pub &'a CliError);

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
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Io(_) => "coulomb::io",
            CliError::MissingConfig(_) => "coulomb::config",
            CliError::Parse { .. } => "coulomb::parse",
            CliError::Layout(LayoutError::Config(_)) => "coulomb::config",
            CliError::Layout(LayoutError::Graph(_)) => "coulomb::graph",
            CliError::Layout(LayoutError::Simulation(_)) => "coulomb::simulation",
            CliError::Serialize(_) => "coulomb::output",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::MissingConfig(_) => "check the path passed to --config",
            CliError::Layout(LayoutError::Config(ConfigError::CoolingRate(_))) => {
                "cooling_rate must be at least 0 and strictly below 1"
            }
            CliError::Layout(LayoutError::Config(_)) => {
                "see the [simulation], [spring_electric] and [gravity] sections of the configuration"
            }
            CliError::Layout(LayoutError::Simulation(SimulationError::NonFinitePosition {
                ..
            })) => "try a smaller step_size or a larger min_distance",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            CliError::Parse { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let CliError::Parse {
            message,
            span: Some(span),
            ..
        } = self.0
        else {
            return None;
        };

        let span = SourceSpan::new(span.start.into(), span.len());
        let label = LabeledSpan::new_primary_with_span(Some(message.clone()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Convert a [`CliError`] into a reportable diagnostic.
pub fn to_reportable(err: &CliError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
