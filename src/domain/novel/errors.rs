//! Novel Context - Errors

use thiserror::Error;

use super::NovelId;

#[derive(Debug, Error)]
pub enum NovelError {
    #[error("Novel not found: {0}")]
    NotFound(NovelId),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("No update data provided")]
    EmptyPatch,
}
