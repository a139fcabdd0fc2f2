//! Stylesheet harvesting errors.

use camino::Utf8PathBuf;
use thiserror::Error;

/// A stylesheet that could not be harvested. Aborts the run.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum HarvestError {
    /// The stylesheet could not be read.
    #[error("failed to read stylesheet {path}")]
    #[diagnostic(code(class_check::read_stylesheet))]
    Read {
        /// The stylesheet path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
