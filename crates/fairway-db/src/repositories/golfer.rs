//! SQLite implementation of GolferRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::instrument;

use fairway_core::entities::{Golfer, NewGolfer};
use fairway_core::error::DomainError;
use fairway_core::traits::{GolferRepository, RepoResult};

use crate::models::GolferModel;

use super::error::{map_db_error, map_unique_violation};

const GOLFER_COLUMNS: &str = r"
    golfer_id, first_name, last_name, email, username, password_hash,
    golfer_age, handicap, right_handed, alcohol, legal_drugs, smoker,
    gambler, music, tees, phone, city, district, country, token, token_exp
";

/// SQLite implementation of GolferRepository
#[derive(Clone)]
pub struct SqliteGolferRepository {
    pool: SqlitePool,
}

impl SqliteGolferRepository {
    /// Create a new SqliteGolferRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GolferRepository for SqliteGolferRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Golfer>> {
        let result = sqlx::query_as::<_, GolferModel>(&format!(
            "SELECT {GOLFER_COLUMNS} FROM golfers WHERE golfer_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Golfer::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Golfer>> {
        let result = sqlx::query_as::<_, GolferModel>(&format!(
            "SELECT {GOLFER_COLUMNS} FROM golfers WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Golfer::from))
    }

    #[instrument(skip(self, token))]
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Golfer>> {
        let result = sqlx::query_as::<_, GolferModel>(&format!(
            "SELECT {GOLFER_COLUMNS} FROM golfers WHERE token = ?"
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Golfer::from))
    }

    #[instrument(skip(self))]
    async fn username_or_email_exists(&self, username: &str, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM golfers WHERE username = ? OR email = ?)
            ",
        )
        .bind(username)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, golfer, password_hash), fields(username = %golfer.username))]
    async fn create(&self, golfer: &NewGolfer, password_hash: &str) -> RepoResult<Golfer> {
        let model = sqlx::query_as::<_, GolferModel>(&format!(
            r"
            INSERT INTO golfers (first_name, last_name, email, username, password_hash,
                                 golfer_age, city, district, country)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {GOLFER_COLUMNS}
            "
        ))
        .bind(&golfer.first_name)
        .bind(&golfer.last_name)
        .bind(&golfer.email)
        .bind(&golfer.username)
        .bind(password_hash)
        .bind(golfer.golfer_age)
        .bind(&golfer.city)
        .bind(&golfer.district)
        .bind(&golfer.country)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::GolferAlreadyExists))?;

        Ok(Golfer::from(model))
    }

    #[instrument(skip(self, golfer), fields(golfer_id = golfer.golfer_id))]
    async fn update(&self, golfer: &Golfer) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE golfers
            SET first_name = ?, last_name = ?, email = ?, golfer_age = ?,
                handicap = ?, right_handed = ?, alcohol = ?, legal_drugs = ?,
                smoker = ?, gambler = ?, music = ?, tees = ?, phone = ?,
                city = ?, district = ?, country = ?
            WHERE golfer_id = ?
            ",
        )
        .bind(&golfer.first_name)
        .bind(&golfer.last_name)
        .bind(&golfer.email)
        .bind(golfer.golfer_age)
        .bind(golfer.handicap)
        .bind(golfer.right_handed)
        .bind(golfer.alcohol)
        .bind(golfer.legal_drugs)
        .bind(golfer.smoker)
        .bind(golfer.gambler)
        .bind(golfer.music)
        .bind(&golfer.tees)
        .bind(&golfer.phone)
        .bind(&golfer.city)
        .bind(&golfer.district)
        .bind(&golfer.country)
        .bind(golfer.golfer_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GolferNotFound(golfer.golfer_id));
        }

        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn update_token(&self, id: i64, token: &str, token_exp: DateTime<Utc>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE golfers SET token = ?, token_exp = ? WHERE golfer_id = ?
            ",
        )
        .bind(token)
        .bind(token_exp)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GolferNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM golfers WHERE golfer_id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM golfers WHERE golfer_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GolferNotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteGolferRepository>();
    }
}
