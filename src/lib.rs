pub mod app;
pub mod client;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::PlayerService;
pub use domain::{Player, PlayerDraft, ValidationError};
pub use infra::config::Config;
pub use storage::{MemoryPlayerStore, PlayerStore, PostgresPlayerStore, StoreError};
