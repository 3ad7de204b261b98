use crate::app::PlayerService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug)]
pub struct AppState {
    pub players: PlayerService,
}

impl AppState {
    pub fn new(players: PlayerService) -> Self {
        Self { players }
    }
}

/// Body of every failed request. Messages are static and never name the
/// offending field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HealthBody {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl MessageBody {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub const MSG_NOT_FOUND: &str = "player not found";
pub const MSG_SAVE_FAILED: &str = "player could not be saved";
pub const MSG_UPDATE_FAILED: &str = "player could not be updated";
pub const MSG_LIST_FAILED: &str = "players could not be fetched";
pub const MSG_FETCH_FAILED: &str = "player could not be fetched";
pub const MSG_DELETE_FAILED: &str = "player could not be deleted";
pub const MSG_DELETED: &str = "player deleted";
pub const MSG_ALIVE: &str = "API is running";
pub const MSG_STORE_UNAVAILABLE: &str = "store unavailable";
