//! SQLite implementation of TeetimeRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use fairway_core::entities::{NewTeetime, Teetime};
use fairway_core::error::DomainError;
use fairway_core::traits::{RepoResult, TeetimeRepository};

use crate::models::TeetimeModel;

use super::error::map_db_error;

const TEETIME_COLUMNS: &str = r"
    teetime_id, course_name, price, teetime_date, teetime_time,
    space_remaining, golfer_id, course_id
";

/// SQLite implementation of TeetimeRepository
#[derive(Clone)]
pub struct SqliteTeetimeRepository {
    pool: SqlitePool,
}

impl SqliteTeetimeRepository {
    /// Create a new SqliteTeetimeRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeetimeRepository for SqliteTeetimeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Teetime>> {
        let result = sqlx::query_as::<_, TeetimeModel>(&format!(
            "SELECT {TEETIME_COLUMNS} FROM teetimes WHERE teetime_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Teetime::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, search: Option<&str>) -> RepoResult<Vec<Teetime>> {
        let rows = match search {
            Some(term) => {
                sqlx::query_as::<_, TeetimeModel>(&format!(
                    r"
                    SELECT {TEETIME_COLUMNS} FROM teetimes
                    WHERE LOWER(course_name) LIKE '%' || LOWER(?) || '%'
                    ORDER BY teetime_id
                    "
                ))
                .bind(term)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, TeetimeModel>(&format!(
                    "SELECT {TEETIME_COLUMNS} FROM teetimes ORDER BY teetime_id"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Teetime::from).collect())
    }

    #[instrument(skip(self, teetime), fields(golfer_id = teetime.golfer_id))]
    async fn create(&self, teetime: &NewTeetime) -> RepoResult<Teetime> {
        let model = sqlx::query_as::<_, TeetimeModel>(&format!(
            r"
            INSERT INTO teetimes (course_name, price, teetime_date, teetime_time,
                                  space_remaining, golfer_id, course_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {TEETIME_COLUMNS}
            "
        ))
        .bind(&teetime.course_name)
        .bind(teetime.price)
        .bind(&teetime.teetime_date)
        .bind(&teetime.teetime_time)
        .bind(teetime.space_remaining)
        .bind(teetime.golfer_id)
        .bind(teetime.course_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Teetime::from(model))
    }

    #[instrument(skip(self, teetime), fields(teetime_id = teetime.teetime_id))]
    async fn update(&self, teetime: &Teetime) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE teetimes
            SET price = ?, teetime_date = ?, teetime_time = ?, space_remaining = ?
            WHERE teetime_id = ?
            ",
        )
        .bind(teetime.price)
        .bind(&teetime.teetime_date)
        .bind(&teetime.teetime_time)
        .bind(teetime.space_remaining)
        .bind(teetime.teetime_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TeetimeNotFound(teetime.teetime_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM teetimes WHERE teetime_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TeetimeNotFound(id));
        }

        Ok(())
    }
}
