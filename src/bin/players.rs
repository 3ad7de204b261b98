//! Players CLI
//!
//! Command-line front end for the items API: every command loads the list,
//! performs one action and prints the table.

use clap::{Args, Parser, Subcommand};
use player_registry::client::render::render;
use player_registry::client::{ApiClient, ClientApp, PlayerForm};
use player_registry::infra::logging;
use player_registry::Config;

/// Players CLI
#[derive(Parser, Debug)]
#[command(name = "players")]
#[command(about = "Manage football player records through the items API")]
struct Cli {
    /// Base URL of the items endpoint (defaults to API_URL)
    #[arg(short, long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the player table
    List {
        /// Filter on name, team or nationality
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show (10 rows per page)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Show a single player
    Show {
        /// Player identifier
        id: String,
    },

    /// Add a player
    Add(FieldArgs),

    /// Update a player; omitted fields keep their current value
    Update {
        /// Player identifier
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a player
    Delete {
        /// Player identifier
        id: String,
    },
}

#[derive(Args, Debug)]
struct FieldArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    position: Option<String>,
    #[arg(long)]
    team: Option<String>,
    #[arg(long)]
    age: Option<String>,
    #[arg(long)]
    nationality: Option<String>,
    #[arg(long)]
    goals: Option<String>,
    #[arg(long)]
    assists: Option<String>,
}

impl FieldArgs {
    fn fill(self, form: &mut PlayerForm) {
        let slots = [
            (self.name, &mut form.name),
            (self.position, &mut form.position),
            (self.team, &mut form.team),
            (self.age, &mut form.age),
            (self.nationality, &mut form.nationality),
            (self.goals, &mut form.goals),
            (self.assists, &mut form.assists),
        ];
        for (value, slot) in slots {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let api_url = match cli.api_url {
        Some(url) => url,
        None => Config::from_env()?.api_url,
    };

    let mut app = ClientApp::new(ApiClient::new(&api_url));
    let outcome = run(&mut app, cli.command).await;
    println!("{}", render(&app));
    outcome
}

async fn run(app: &mut ClientApp<ApiClient>, command: Commands) -> anyhow::Result<()> {
    app.mount().await?;

    match command {
        Commands::List { search, page } => {
            if let Some(term) = search {
                app.set_search(&term);
            }
            app.go_to_page(page);
        }
        Commands::Show { id } => {
            let player = app.fetch_one(&id).await?;
            println!("{}", serde_json::to_string_pretty(&player)?);
        }
        Commands::Add(fields) => {
            fields.fill(app.form_mut());
            let player = app.submit().await?;
            println!("Added player {}", player.id);
        }
        Commands::Update { id, fields } => {
            if !app.edit(&id) {
                anyhow::bail!("no player with id {}", id);
            }
            fields.fill(app.form_mut());
            let player = app.submit().await?;
            println!("Updated player {}", player.id);
        }
        Commands::Delete { id } => {
            app.delete(&id).await?;
            println!("Deleted player {}", id);
        }
    }
    Ok(())
}
