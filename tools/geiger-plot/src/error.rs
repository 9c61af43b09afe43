use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: serialport::Error,
    },

    #[error("serial I/O failed: {0}")]
    Io(#[from] io::Error),
}
