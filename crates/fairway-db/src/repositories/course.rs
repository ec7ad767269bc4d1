//! SQLite implementation of CourseRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use fairway_core::entities::{Course, NewCourse};
use fairway_core::error::DomainError;
use fairway_core::traits::{CourseRepository, RepoResult};

use crate::models::CourseModel;

use super::error::map_db_error;

const COURSE_COLUMNS: &str = r"
    course_id, course_name, address, city, district, country,
    weekday_price, weekend_price, strict_dress, rating, slope,
    course_length, par, designer
";

/// SQLite implementation of CourseRepository
#[derive(Clone)]
pub struct SqliteCourseRepository {
    pool: SqlitePool,
}

impl SqliteCourseRepository {
    /// Create a new SqliteCourseRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for SqliteCourseRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Course>> {
        let result = sqlx::query_as::<_, CourseModel>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE course_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Course::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Course>> {
        let rows = sqlx::query_as::<_, CourseModel>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY course_id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    #[instrument(skip(self, course), fields(course_name = %course.course_name))]
    async fn create(&self, course: &NewCourse) -> RepoResult<Course> {
        let model = sqlx::query_as::<_, CourseModel>(&format!(
            r"
            INSERT INTO courses (course_name, address, city, district, country,
                                 weekday_price, weekend_price, strict_dress,
                                 rating, slope, course_length, par, designer)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {COURSE_COLUMNS}
            "
        ))
        .bind(&course.course_name)
        .bind(&course.address)
        .bind(&course.city)
        .bind(&course.district)
        .bind(&course.country)
        .bind(course.weekday_price)
        .bind(course.weekend_price)
        .bind(course.strict_dress)
        .bind(course.rating)
        .bind(course.slope)
        .bind(course.course_length)
        .bind(course.par)
        .bind(&course.designer)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Course::from(model))
    }

    #[instrument(skip(self, course), fields(course_id = course.course_id))]
    async fn update(&self, course: &Course) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE courses
            SET course_name = ?, weekday_price = ?, weekend_price = ?,
                strict_dress = ?, rating = ?, slope = ?, course_length = ?, par = ?
            WHERE course_id = ?
            ",
        )
        .bind(&course.course_name)
        .bind(course.weekday_price)
        .bind(course.weekend_price)
        .bind(course.strict_dress)
        .bind(course.rating)
        .bind(course.slope)
        .bind(course.course_length)
        .bind(course.par)
        .bind(course.course_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CourseNotFound(course.course_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM courses WHERE course_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CourseNotFound(id));
        }

        Ok(())
    }
}
