// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the dashboard shell.
///
/// The variants carry pre-rendered strings because they cross the Iced
/// message boundary and therefore must be `Clone`.
#[derive(Debug, Clone)]
pub enum Error {
    /// The file could not be read (missing, permission denied, etc.).
    Io(String),
    /// The file was read but could not be decoded as a raster image.
    Image(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
