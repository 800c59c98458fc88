use rusqlite::{Connection, params};
use tracing::info;

use crate::controller::reconstruct::GameReconstruction;
use crate::controller::summary::player_summaries;
use crate::error::AppError;
use crate::model::IntervalRow;

pub const SCHEMA: [&str; 3] = [
    include_str!("../sql/schema/sqlite/01_game.sql"),
    include_str!("../sql/schema/sqlite/02_lineup_interval.sql"),
    include_str!("../sql/schema/sqlite/03_player_on_court.sql"),
];

pub const DROP_TABLES: &str = include_str!("../sql/schema/sqlite/00_table_drop.sql");

/// SQLite destination for reconstructed games. Loading a game replaces any
/// rows already stored for it.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and makes sure the tables exist.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be opened or the schema fails
    pub fn open(path: &str) -> Result<Self, AppError> {
        let store = Self {
            conn: Connection::open(path)?,
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// # Errors
    ///
    /// Will return `Err` if the schema fails
    pub fn open_in_memory() -> Result<Self, AppError> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// # Errors
    ///
    /// Will return `Err` if any statement fails
    pub fn ensure_schema(&self) -> Result<(), AppError> {
        self.run_script(&SCHEMA.join("\n"))
    }

    /// # Errors
    ///
    /// Will return `Err` if any statement fails
    pub fn run_script(&self, sql: &str) -> Result<(), AppError> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Drops every table and recreates an empty schema.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any statement fails
    pub fn reset(&self) -> Result<(), AppError> {
        self.run_script(DROP_TABLES)?;
        self.ensure_schema()
    }

    /// # Errors
    ///
    /// Will return `Err` if any statement fails; nothing is written in that case
    pub fn store_game(&mut self, recon: &GameReconstruction) -> Result<(), AppError> {
        let game_id = recon.game_id();
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM player_on_court WHERE game_id = ?1", params![game_id])?;
        tx.execute("DELETE FROM lineup_interval WHERE game_id = ?1", params![game_id])?;
        tx.execute("DELETE FROM game WHERE game_id = ?1", params![game_id])?;

        tx.execute(
            "INSERT INTO game (game_id, home_team_id, home_tricode, away_team_id, away_tricode, interval_count, anomaly_count)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                game_id,
                recon.roster.home.team_id.0,
                recon.roster.home.tricode,
                recon.roster.away.team_id.0,
                recon.roster.away.tricode,
                recon.intervals.len() as i64,
                recon.anomalies.len() as i64,
            ],
        )?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO lineup_interval (game_id, interval_idx, start_period, start_clock, end_period, end_clock, duration_seconds,
                    home_player_1, home_player_2, home_player_3, home_player_4, home_player_5,
                    away_player_1, away_player_2, away_player_3, away_player_4, away_player_5,
                    home_points, away_points, plus_minus)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)",
            )?;
            for row in recon.rows() {
                stmt.execute(params![
                    row.game_id,
                    row.interval as i64,
                    row.start_period,
                    row.start_clock,
                    row.end_period,
                    row.end_clock,
                    row.duration_seconds,
                    row.home_player_1,
                    row.home_player_2,
                    row.home_player_3,
                    row.home_player_4,
                    row.home_player_5,
                    row.away_player_1,
                    row.away_player_2,
                    row.away_player_3,
                    row.away_player_4,
                    row.away_player_5,
                    row.home_points,
                    row.away_points,
                    row.plus_minus,
                ])?;
            }

            let mut stmt = tx.prepare(
                "INSERT INTO player_on_court (game_id, player_id, player_name, side, seconds_on_court, intervals, points_for, points_against, plus_minus)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for p in player_summaries(&recon.intervals, &recon.roster) {
                stmt.execute(params![
                    p.game_id,
                    p.player_id.0,
                    p.player_name,
                    p.side.as_str(),
                    p.seconds_on_court,
                    p.intervals as i64,
                    p.points_for,
                    p.points_against,
                    p.plus_minus,
                ])?;
            }
        }

        tx.commit()?;
        info!(game_id, intervals = recon.intervals.len(), "stored game in sqlite");
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the query fails
    pub fn load_intervals(&self, game_id: &str) -> Result<Vec<IntervalRow>, AppError> {
        let mut stmt = self.conn.prepare(
            "SELECT game_id, interval_idx, start_period, start_clock, end_period, end_clock, duration_seconds,
                home_player_1, home_player_2, home_player_3, home_player_4, home_player_5,
                away_player_1, away_player_2, away_player_3, away_player_4, away_player_5,
                home_points, away_points, plus_minus
             FROM lineup_interval WHERE game_id = ?1 ORDER BY interval_idx",
        )?;
        let rows = stmt.query_map(params![game_id], |r| {
            Ok(IntervalRow {
                game_id: r.get(0)?,
                interval: r.get::<_, i64>(1)? as usize,
                start_period: r.get(2)?,
                start_clock: r.get(3)?,
                end_period: r.get(4)?,
                end_clock: r.get(5)?,
                duration_seconds: r.get(6)?,
                home_player_1: r.get(7)?,
                home_player_2: r.get(8)?,
                home_player_3: r.get(9)?,
                home_player_4: r.get(10)?,
                home_player_5: r.get(11)?,
                away_player_1: r.get(12)?,
                away_player_2: r.get(13)?,
                away_player_3: r.get(14)?,
                away_player_4: r.get(15)?,
                away_player_5: r.get(16)?,
                home_points: r.get(17)?,
                away_points: r.get(18)?,
                plus_minus: r.get(19)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the query fails
    pub fn player_plus_minus(&self, game_id: &str) -> Result<Vec<(String, i32)>, AppError> {
        let mut stmt = self.conn.prepare(
            "SELECT player_name, plus_minus FROM player_on_court WHERE game_id = ?1 ORDER BY player_id",
        )?;
        let rows = stmt.query_map(params![game_id], |r| Ok((r.get(0)?, r.get(1)?)))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the query fails
    pub fn game_count(&self) -> Result<i64, AppError> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM game", [], |r| r.get(0))?)
    }
}
