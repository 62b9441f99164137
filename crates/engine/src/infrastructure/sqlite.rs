//! SQLite-backed cargo storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use cargotrack_domain::{Cargo, CargoCode, CargoId, CargoStatus, CargoWeight, Location};

use crate::infrastructure::ports::{CargoRepo, RepoError};

const SELECT_COLUMNS: &str = "SELECT id, code, weight, origin, destination, status, \
     current_location, created_at, delivered_at FROM cargos";

/// SQLite implementation of cargo storage.
///
/// The `code` column carries a UNIQUE constraint, so two concurrent creations
/// with the same code cannot both be stored even though the uniqueness check
/// in the use case is a separate read.
pub struct SqliteCargoRepo {
    pool: SqlitePool,
}

impl SqliteCargoRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cargos (
                id BLOB PRIMARY KEY,
                code TEXT NOT NULL UNIQUE,
                weight REAL NOT NULL,
                origin TEXT NOT NULL,
                destination TEXT NOT NULL,
                status TEXT NOT NULL,
                current_location TEXT NOT NULL,
                created_at TEXT NOT NULL,
                delivered_at TEXT
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("migrate", e))?;

        tracing::debug!(path = %db_path, "SQLite cargo store ready");
        Ok(Self { pool })
    }
}

fn row_to_cargo(row: &SqliteRow) -> Result<Cargo, RepoError> {
    let id: Uuid = row.try_get("id").map_err(RepoError::serialization)?;
    let code: String = row.try_get("code").map_err(RepoError::serialization)?;
    let weight: f64 = row.try_get("weight").map_err(RepoError::serialization)?;
    let origin: String = row.try_get("origin").map_err(RepoError::serialization)?;
    let destination: String = row
        .try_get("destination")
        .map_err(RepoError::serialization)?;
    let status: String = row.try_get("status").map_err(RepoError::serialization)?;
    let current_location: String = row
        .try_get("current_location")
        .map_err(RepoError::serialization)?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(RepoError::serialization)?;
    let delivered_at: Option<DateTime<Utc>> = row
        .try_get("delivered_at")
        .map_err(RepoError::serialization)?;

    Ok(Cargo::from_parts(
        CargoId::from_uuid(id),
        CargoCode::new(code).map_err(RepoError::serialization)?,
        CargoWeight::new(weight).map_err(RepoError::serialization)?,
        origin.parse::<Location>().map_err(RepoError::serialization)?,
        destination
            .parse::<Location>()
            .map_err(RepoError::serialization)?,
        status
            .parse::<CargoStatus>()
            .map_err(RepoError::serialization)?,
        current_location
            .parse::<Location>()
            .map_err(RepoError::serialization)?,
        created_at,
        delivered_at,
    ))
}

#[async_trait]
impl CargoRepo for SqliteCargoRepo {
    async fn find_by_code(&self, code: &CargoCode) -> Result<Option<Cargo>, RepoError> {
        let row = sqlx::query(&format!("{} WHERE code = ?", SELECT_COLUMNS))
            .bind(code.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("cargo.find_by_code", e))?;

        row.as_ref().map(row_to_cargo).transpose()
    }

    async fn save(&self, cargo: &Cargo) -> Result<(), RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO cargos (id, code, weight, origin, destination, status,
                                current_location, created_at, delivered_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                weight = excluded.weight,
                origin = excluded.origin,
                destination = excluded.destination,
                status = excluded.status,
                current_location = excluded.current_location,
                delivered_at = excluded.delivered_at
            WHERE cargos.status <> 'DELIVERED'
            "#,
        )
        .bind(cargo.id().to_uuid())
        .bind(cargo.code().as_str())
        .bind(cargo.weight().value())
        .bind(cargo.origin().as_str())
        .bind(cargo.destination().as_str())
        .bind(cargo.status().as_str())
        .bind(cargo.current_location().as_str())
        .bind(cargo.created_at())
        .bind(cargo.delivered_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return RepoError::constraint(format!(
                        "cargo code {} already exists",
                        cargo.code()
                    ));
                }
            }
            RepoError::database("cargo.save", e)
        })?;

        // Zero rows means the conflicting row was already delivered
        if result.rows_affected() == 0 {
            return Err(RepoError::constraint(format!(
                "cargo {} is already delivered",
                cargo.code()
            )));
        }

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Cargo>, RepoError> {
        let rows = sqlx::query(&format!("{} ORDER BY rowid", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("cargo.find_all", e))?;

        rows.iter().map(row_to_cargo).collect()
    }
}
