//! The client application state machine.
//!
//! `mount` loads the list (Loading → Ready | Error). Submits and deletes run
//! one request each and land in Ready on success or Error on failure. A
//! failure only sets the banner; the cached list and the form are kept as
//! they were.

use crate::client::api::PlayersApi;
use crate::client::cache::PlayerCache;
use crate::client::form::PlayerForm;
use crate::client::view::{ListView, Page};
use crate::client::ClientError;
use crate::domain::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    /// Holds the banner message.
    Error(String),
}

pub struct ClientApp<A> {
    api: A,
    phase: Phase,
    cache: PlayerCache,
    form: PlayerForm,
    view: ListView,
}

impl<A: PlayersApi> ClientApp<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            phase: Phase::Loading,
            cache: PlayerCache::new(),
            form: PlayerForm::new(),
            view: ListView::new(),
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn banner(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn players(&self) -> &[Player] {
        self.cache.as_slice()
    }

    pub fn cache(&self) -> &PlayerCache {
        &self.cache
    }

    pub fn form(&self) -> &PlayerForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PlayerForm {
        &mut self.form
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetches the full list and replaces the cache with it.
    pub async fn mount(&mut self) -> Result<(), ClientError> {
        self.phase = Phase::Loading;
        match self.api.list().await {
            Ok(players) => {
                tracing::debug!(count = players.len(), "player list loaded");
                self.cache.replace_all(players);
                self.phase = Phase::Ready;
                Ok(())
            }
            Err(e) => Err(self.fail("Could not load players", e)),
        }
    }

    /// Creates or updates from the form, depending on edit mode. The form is
    /// cleared only when the request succeeds.
    pub async fn submit(&mut self) -> Result<Player, ClientError> {
        let draft = match self.form.to_draft() {
            Ok(d) => d,
            Err(e) => return Err(self.fail("Could not save player", e.into())),
        };

        let editing = self.form.editing_id().map(str::to_string);
        let result = match editing {
            Some(id) => {
                self.api.update(&id, &draft).await.map(|player| {
                    if !self.cache.update(player.clone()) {
                        self.cache.insert(player.clone());
                    }
                    player
                })
            }
            None => self.api.create(&draft).await.map(|player| {
                self.cache.insert(player.clone());
                player
            }),
        };

        match result {
            Ok(player) => {
                self.form.reset();
                self.phase = Phase::Ready;
                Ok(player)
            }
            Err(e) => Err(self.fail("Could not save player", e)),
        }
    }

    /// Puts the cached player `id` into the form for editing.
    pub fn edit(&mut self, id: &str) -> bool {
        match self.cache.get(id) {
            Some(player) => {
                self.form.edit(player);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form.cancel_edit();
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        match self.api.delete(id).await {
            Ok(()) => {
                self.cache.remove(id);
                if self.form.editing_id() == Some(id) {
                    self.form.reset();
                }
                self.phase = Phase::Ready;
                Ok(())
            }
            Err(e) => Err(self.fail("Could not delete player", e)),
        }
    }

    /// Fetches a single player from the server without touching the cache.
    pub async fn fetch_one(&mut self, id: &str) -> Result<Player, ClientError> {
        match self.api.get(id).await {
            Ok(player) => {
                self.phase = Phase::Ready;
                Ok(player)
            }
            Err(e) => Err(self.fail("Could not load player", e)),
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.view.set_search(term);
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total = self.current_page().total_pages;
        self.view.go_to_page(page.min(total));
    }

    pub fn next_page(&mut self) {
        let page = self.current_page().page + 1;
        self.go_to_page(page);
    }

    pub fn previous_page(&mut self) {
        let page = self.current_page().page.saturating_sub(1);
        self.go_to_page(page);
    }

    pub fn current_page(&self) -> Page<'_> {
        self.view.page_of(self.cache.as_slice())
    }

    fn fail(&mut self, context: &str, err: ClientError) -> ClientError {
        tracing::warn!(error = %err, "{}", context);
        self.phase = Phase::Error(format!("{}: {}", context, err));
        err
    }
}
