//! Error type for the display loops.

use core::fmt::Debug;

use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The draw target rejected a fill or text draw.
    #[error("draw failed: {0}")]
    Draw(String),
}

impl Error {
    /// Wrap a draw target error. Draw target errors only guarantee `Debug`.
    pub fn draw<E: Debug>(err: E) -> Self {
        Self::Draw(format!("{err:?}"))
    }
}
