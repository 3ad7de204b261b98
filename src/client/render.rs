//! Plain-text rendering of the client view.

use crate::client::app::{ClientApp, Phase};
use crate::client::api::PlayersApi;
use crate::client::form::PlayerForm;
use crate::client::view::Page;
use crate::domain::Player;

const HEADERS: [&str; 9] = [
    "", "Name", "Position", "Team", "Age", "Nationality", "Goals", "Assists", "Id",
];

/// Up to two uppercase initials, e.g. `CR` for "Cristiano Ronaldo".
pub fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn row_cells(player: &Player) -> [String; 9] {
    [
        avatar_initials(&player.name),
        player.name.clone(),
        player.position.clone(),
        player.team.clone(),
        player.age.to_string(),
        player.nationality.clone(),
        player.goals.to_string(),
        player.assists.to_string(),
        player.id.clone(),
    ]
}

/// Renders `rows` as an aligned text table with a header line.
pub fn render_table(rows: &[&Player]) -> String {
    let cells: Vec<[String; 9]> = rows.iter().map(|p| row_cells(p)).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |values: &[&str]| -> String {
        values
            .iter()
            .zip(widths.iter())
            .map(|(v, w)| format!("{:<width$}", v, width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(&HEADERS));
    out.push('\n');
    let rule_len = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &cells {
        let values: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&line(&values));
        out.push('\n');
    }
    out
}

/// Page indicator with the available navigation, e.g. `Page 2 of 3  < Prev | Next >`.
pub fn page_line(page: &Page<'_>) -> String {
    let prev = if page.has_previous() { "< Prev" } else { "      " };
    let next = if page.has_next() { "Next >" } else { "" };
    format!("Page {} of {}  {} | {}", page.page, page.total_pages, prev, next)
        .trim_end()
        .to_string()
}

/// The form's mode, named by its submit action.
pub fn form_line(form: &PlayerForm) -> String {
    match form.editing_id() {
        Some(id) => format!("Form: [{}] editing {} (cancel to add)", form.submit_label(), id),
        None => format!("Form: [{}]", form.submit_label()),
    }
}

/// The whole screen: banner, loading line, form mode, table, caption and page
/// navigation.
pub fn render<A: PlayersApi>(app: &ClientApp<A>) -> String {
    let mut out = String::from("Players\n");
    match app.phase() {
        Phase::Loading => out.push_str("Loading...\n"),
        Phase::Error(message) => out.push_str(&format!("Error: {}\n", message)),
        Phase::Ready => {}
    }
    out.push_str(&form_line(app.form()));
    out.push('\n');
    if !app.view().search().is_empty() {
        out.push_str(&format!("Search: {}\n", app.view().search()));
    }

    let page = app.current_page();
    out.push_str(&render_table(&page.rows));
    out.push_str(&page.caption());
    out.push('\n');
    out.push_str(&page_line(&page));
    out.push('\n');
    out
}
