//! Reading the export into memory.
//!
//! Input is read as raw bytes so `\r\n` survives untouched; the grammar
//! accepts both line-ending forms itself.

use std::{
    fmt, fs,
    io::{self, Read},
    path::PathBuf,
};

use crate::errors::AppError;

/// Where the export comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    Stdin,
}

impl InputSource {
    /// Reads the whole input into one buffer.
    pub fn read(&self) -> Result<String, AppError> {
        let bytes = match self {
            InputSource::Path(path) => fs::read(path).map_err(|source| AppError::Read {
                path: path.clone(),
                source,
            })?,
            InputSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .map_err(AppError::Stdin)?;
                buf
            }
        };
        String::from_utf8(bytes).map_err(AppError::Utf8)
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            InputSource::Path(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Line-ending style of an input, judged by its first line only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// Looks at the first line separator. Returns `None` for single-line input.
    pub fn detect(text: &str) -> Option<Self> {
        let newline = text.find('\n')?;
        if text[..newline].ends_with('\r') {
            Some(LineEnding::CrLf)
        } else {
            Some(LineEnding::Lf)
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "LF"),
            LineEnding::CrLf => write!(f, "CR LF"),
        }
    }
}
