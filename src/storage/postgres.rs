//! Persistent player store implementation using PostgreSQL.

use crate::domain::player::{write_timestamp, Player, PlayerDraft};
use crate::storage::{PlayerStore, StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use uuid::Uuid;

const CREATE_PLAYERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS players (
    id TEXT PRIMARY KEY,
    seq BIGSERIAL NOT NULL,
    name TEXT NOT NULL,
    position TEXT NOT NULL,
    team TEXT NOT NULL,
    age BIGINT NOT NULL,
    nationality TEXT NOT NULL,
    goals BIGINT NOT NULL DEFAULT 0,
    assists BIGINT NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)";

const PLAYER_COLUMNS: &str =
    "id, name, position, team, age, nationality, goals, assists, created_at, updated_at";

/// A `PlayerStore` backed by the `players` table.
#[derive(Clone)]
pub struct PostgresPlayerStore {
    pool: PgPool,
}

impl PostgresPlayerStore {
    /// Connects to the database and makes sure the `players` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Self::new_with_pool(pool).await
    }

    pub async fn new_with_pool(pool: PgPool) -> StoreResult<Self> {
        sqlx::query(CREATE_PLAYERS_TABLE).execute(&pool).await?;
        Ok(Self { pool })
    }
}

fn row_to_player(row: &PgRow) -> Result<Player, sqlx::Error> {
    Ok(Player {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        position: row.try_get("position")?,
        team: row.try_get("team")?,
        age: row.try_get("age")?,
        goals: row.try_get("goals")?,
        assists: row.try_get("assists")?,
        nationality: row.try_get("nationality")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn found(row: Option<PgRow>) -> StoreResult<Player> {
    let row = row.ok_or(StoreError::NotFound)?;
    Ok(row_to_player(&row)?)
}

#[async_trait]
impl PlayerStore for PostgresPlayerStore {
    async fn insert(&self, draft: PlayerDraft) -> StoreResult<Player> {
        let player = Player::create(Uuid::new_v4().to_string(), draft, write_timestamp());
        let sql = format!(
            "INSERT INTO players ({PLAYER_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {PLAYER_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&player.id)
            .bind(&player.name)
            .bind(&player.position)
            .bind(&player.team)
            .bind(player.age)
            .bind(&player.nationality)
            .bind(player.goals)
            .bind(player.assists)
            .bind(player.created_at)
            .bind(player.updated_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(row_to_player(&row)?)
    }

    async fn find_all(&self) -> StoreResult<Vec<Player>> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY seq");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let mut players = Vec::with_capacity(rows.len());
        for row in rows {
            players.push(row_to_player(&row)?);
        }
        Ok(players)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Player> {
        let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        found(row)
    }

    async fn replace(&self, id: &str, draft: PlayerDraft) -> StoreResult<Player> {
        // Single statement; concurrent replaces of one id are last-writer-wins.
        let sql = format!(
            "UPDATE players SET
                name = $2,
                position = $3,
                team = $4,
                age = $5,
                nationality = $6,
                goals = COALESCE($7, goals),
                assists = COALESCE($8, assists),
                updated_at = GREATEST($9, updated_at + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {PLAYER_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.position)
            .bind(&draft.team)
            .bind(draft.age)
            .bind(&draft.nationality)
            .bind(draft.goals)
            .bind(draft.assists)
            .bind(write_timestamp())
            .fetch_optional(&self.pool)
            .await?;
        found(row)
    }

    async fn remove(&self, id: &str) -> StoreResult<Player> {
        let sql = format!("DELETE FROM players WHERE id = $1 RETURNING {PLAYER_COLUMNS}");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        found(row)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
