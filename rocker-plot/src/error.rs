use thiserror::Error;

/// Errors that can occur when producing a figure.
#[derive(Debug, Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[from] rocker_stress::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The interactive window failed, with the message reported by `eframe`.
    #[cfg(feature = "gui")]
    #[error("plot window error: {0}")]
    Gui(String),
}
