//! SQLite implementation of CommentRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use fairway_core::entities::{GolferComment, NewComment};
use fairway_core::error::DomainError;
use fairway_core::traits::{CommentRepository, RepoResult};

use crate::models::CommentModel;

use super::error::map_db_error;

/// SQLite implementation of CommentRepository
#[derive(Clone)]
pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    /// Create a new SqliteCommentRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<GolferComment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT golfer_comment_id, body, golfer_id, teetime_id
            FROM golfer_comments
            WHERE golfer_comment_id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GolferComment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_teetime(&self, teetime_id: i64) -> RepoResult<Vec<GolferComment>> {
        let rows = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT golfer_comment_id, body, golfer_id, teetime_id
            FROM golfer_comments
            WHERE teetime_id = ?
            ORDER BY golfer_comment_id
            ",
        )
        .bind(teetime_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(GolferComment::from).collect())
    }

    #[instrument(skip(self, comment), fields(teetime_id = comment.teetime_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<GolferComment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO golfer_comments (body, golfer_id, teetime_id)
            VALUES (?, ?, ?)
            RETURNING golfer_comment_id, body, golfer_id, teetime_id
            ",
        )
        .bind(&comment.body)
        .bind(comment.golfer_id)
        .bind(comment.teetime_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(GolferComment::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM golfer_comments WHERE golfer_comment_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        Ok(())
    }
}
