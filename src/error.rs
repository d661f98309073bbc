//! Error types for reading module matrices from text

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Invalid module {found:?} at {span:?}")]
    InvalidModule { span: Span, found: char },

    #[error("Matrix is not square at {span:?}: expected {expected} modules per row, found {found}")]
    NotSquare {
        span: Span,
        expected: usize,
        found: usize,
    },

    #[error("Matrix is empty")]
    Empty,
}

impl MatrixError {
    /// Byte range of the offending input, if any
    pub fn span(&self) -> Option<Span> {
        match self {
            MatrixError::InvalidModule { span, .. } | MatrixError::NotSquare { span, .. } => {
                Some(span.clone())
            }
            MatrixError::Empty => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        self.format_with_color(source, filename, false)
    }

    /// Like [`MatrixError::format`], with ANSI colors for terminals
    pub fn format_with_color(&self, source: &str, filename: &str, color: bool) -> String {
        let (span, label) = match self {
            MatrixError::InvalidModule { span, found } => (
                span.clone(),
                format!("expected one of 1 # X 0 . - but found {:?}", found),
            ),
            MatrixError::NotSquare {
                span,
                expected,
                found,
            } => (
                span.clone(),
                format!("row has {} modules, expected {}", found, expected),
            ),
            MatrixError::Empty => return self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_config(Config::default().with_color(color))
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
