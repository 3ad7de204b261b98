//! Client-side search and pagination over the held player list.

use crate::domain::Player;

pub const PAGE_SIZE: usize = 10;

/// Search term and page index. The rows shown are a pure function of
/// (players, search term, page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    search: String,
    /// 1-based; clamped against the filtered list when a page is computed.
    page: usize,
}

/// One computed page of the filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub rows: Vec<&'a Player>,
    pub page: usize,
    pub total_pages: usize,
    /// Players matching the search term, across all pages.
    pub total_matches: usize,
    /// 1-based position of the first row shown, 0 when nothing matches.
    pub first: usize,
    pub last: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Changing the term always goes back to the first page.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Case-insensitive match on name, team or nationality.
    pub fn matches(&self, player: &Player) -> bool {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&player.name, &player.team, &player.nationality]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    pub fn filtered<'a>(&self, players: &'a [Player]) -> Vec<&'a Player> {
        players.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn page_of<'a>(&self, players: &'a [Player]) -> Page<'a> {
        let matches = self.filtered(players);
        let total_matches = matches.len();
        let total_pages = total_pages(total_matches);
        let page = self.page.clamp(1, total_pages);

        let start = (page - 1) * PAGE_SIZE;
        let rows: Vec<&Player> = matches.into_iter().skip(start).take(PAGE_SIZE).collect();
        let (first, last) = if rows.is_empty() {
            (0, 0)
        } else {
            (start + 1, start + rows.len())
        };

        Page {
            rows,
            page,
            total_pages,
            total_matches,
            first,
            last,
        }
    }
}

impl Page<'_> {
    /// e.g. `Showing 1 to 10 of 12`
    pub fn caption(&self) -> String {
        format!(
            "Showing {} to {} of {}",
            self.first, self.last, self.total_matches
        )
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Never less than one, so an empty list still has a (blank) first page.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::write_timestamp;

    fn player(i: usize, team: &str) -> Player {
        let now = write_timestamp();
        Player {
            id: format!("id-{i}"),
            name: format!("Player {i}"),
            position: "Midfielder".into(),
            team: team.into(),
            age: 20 + i as i64,
            goals: 0,
            assists: 0,
            nationality: "Portuguese".into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 25 players, 12 of them at Benfica.
    fn roster() -> Vec<Player> {
        (0..25)
            .map(|i| player(i, if i % 2 == 0 && i < 24 { "Benfica" } else { "Porto" }))
            .collect()
    }

    #[test]
    fn search_over_25_players_matching_12_spans_two_pages() {
        let players = roster();
        let mut view = ListView::new();
        view.set_search("benFICA");

        let page = view.page_of(&players);
        assert_eq!(page.total_matches, 12);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.caption(), "Showing 1 to 10 of 12");
        assert!(page.has_next());
        assert!(!page.has_previous());

        view.go_to_page(2);
        let page = view.page_of(&players);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.caption(), "Showing 11 to 12 of 12");
        assert_eq!(page.rows[1].id, "id-22");
        assert!(!page.has_next());
    }

    #[test]
    fn search_matches_name_team_and_nationality_only() {
        let mut p = player(1, "Sporting");
        p.position = "Goalkeeper".into();
        let players = vec![p];
        let mut view = ListView::new();

        for term in ["player 1", "SPORT", "portug", "  sporting "] {
            view.set_search(term);
            assert_eq!(view.filtered(&players).len(), 1, "term {term:?}");
        }
        view.set_search("goalkeeper");
        assert!(view.filtered(&players).is_empty());
    }

    #[test]
    fn changing_search_resets_page() {
        let mut view = ListView::new();
        view.go_to_page(3);
        view.set_search("x");
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let players = roster();
        let mut view = ListView::new();
        view.go_to_page(9);
        let page = view.page_of(&players);
        assert_eq!(page.page, 3);
        assert_eq!(page.caption(), "Showing 21 to 25 of 25");

        view.go_to_page(0);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn empty_list_has_one_blank_page() {
        let page = ListView::new().page_of(&[]);
        assert_eq!(page.total_pages, 1);
        assert!(page.rows.is_empty());
        assert_eq!(page.caption(), "Showing 0 to 0 of 0");
    }
}
