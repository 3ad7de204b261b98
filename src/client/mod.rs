//! The client application: a form and a searchable, paginated table over the
//! items API.

use crate::domain::ValidationError;
use thiserror::Error;

pub mod api;
pub mod app;
pub mod cache;
pub mod form;
pub mod render;
pub mod view;

pub use api::{ApiClient, PlayersApi};
pub use app::{ClientApp, Phase};
pub use cache::PlayerCache;
pub use form::PlayerForm;
pub use view::{ListView, Page, PAGE_SIZE};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid form: {0}")]
    InvalidForm(#[from] ValidationError),
}
