//! The client's copy of the player list.

use crate::domain::Player;
use std::collections::HashMap;

/// Players keyed by identifier, kept in server order.
///
/// Replaced wholesale on every fetch and patched locally after each
/// successful mutation.
#[derive(Debug, Clone, Default)]
pub struct PlayerCache {
    players: Vec<Player>,
    index: HashMap<String, usize>,
}

impl PlayerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, players: Vec<Player>) {
        self.players = players;
        self.reindex();
    }

    /// Appends a created player; a duplicate id overwrites in place instead.
    pub fn insert(&mut self, player: Player) {
        match self.index.get(&player.id) {
            Some(&pos) => self.players[pos] = player,
            None => {
                self.index.insert(player.id.clone(), self.players.len());
                self.players.push(player);
            }
        }
    }

    /// Swaps in an updated player at its current position. Returns false when
    /// the id is not cached.
    pub fn update(&mut self, player: Player) -> bool {
        match self.index.get(&player.id) {
            Some(&pos) => {
                self.players[pos] = player;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Player> {
        let pos = self.index.remove(id)?;
        let removed = self.players.remove(pos);
        self.reindex();
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.index.get(id).map(|&pos| &self.players[pos])
    }

    pub fn as_slice(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn reindex(&mut self) {
        self.index = self
            .players
            .iter()
            .enumerate()
            .map(|(pos, p)| (p.id.clone(), pos))
            .collect();
    }
}
