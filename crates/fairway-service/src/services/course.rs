//! Course service
//!
//! Courses are shared reference data: any authenticated golfer may create,
//! edit, or delete them, so there are no ownership checks here.

use tracing::{info, instrument};

use fairway_core::entities::NewCourse;
use fairway_core::DomainError;

use crate::dto::{CourseResponse, CreateCourseRequest, SuccessResponse, UpdateCourseRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Course service
pub struct CourseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CourseService<'a> {
    /// Create a new CourseService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all courses
    pub async fn list(&self) -> ServiceResult<Vec<CourseResponse>> {
        let courses = self.ctx.course_repo().list().await?;
        Ok(courses.iter().map(CourseResponse::from).collect())
    }

    /// Get a course by ID
    pub async fn get(&self, course_id: i64) -> ServiceResult<CourseResponse> {
        let course = self
            .ctx
            .course_repo()
            .find_by_id(course_id)
            .await?
            .ok_or(DomainError::CourseNotFound(course_id))?;
        Ok(CourseResponse::from(&course))
    }

    /// Create a new course
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateCourseRequest) -> ServiceResult<CourseResponse> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(ServiceError::MissingFields(missing));
        }

        let new_course = NewCourse {
            course_name: request.course_name.unwrap_or_default(),
            address: request.address.unwrap_or_default(),
            city: request.city.unwrap_or_default(),
            district: request.district.unwrap_or_default(),
            country: request.country.unwrap_or_default(),
            par: request.par.unwrap_or_default(),
            weekday_price: request.weekday_price,
            weekend_price: request.weekend_price,
            strict_dress: request.strict_dress,
            rating: request.rating,
            slope: request.slope,
            course_length: request.course_length,
            designer: request.designer,
        };

        let course = self.ctx.course_repo().create(&new_course).await?;
        info!(course_id = course.course_id, "Course created");
        Ok(CourseResponse::from(&course))
    }

    /// Apply a whitelisted partial update to a course.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        course_id: i64,
        request: UpdateCourseRequest,
    ) -> ServiceResult<CourseResponse> {
        let mut course = self
            .ctx
            .course_repo()
            .find_by_id(course_id)
            .await?
            .ok_or(DomainError::CourseNotFound(course_id))?;

        if let Some(v) = request.course_name {
            course.course_name = v;
        }
        if let Some(v) = request.weekday_price {
            course.weekday_price = Some(v);
        }
        if let Some(v) = request.weekend_price {
            course.weekend_price = Some(v);
        }
        if let Some(v) = request.strict_dress {
            course.strict_dress = Some(v);
        }
        if let Some(v) = request.rating {
            course.rating = Some(v);
        }
        if let Some(v) = request.slope {
            course.slope = Some(v);
        }
        if let Some(v) = request.course_length {
            course.course_length = Some(v);
        }
        if let Some(v) = request.par {
            course.par = v;
        }

        self.ctx.course_repo().update(&course).await?;
        info!(course_id = course.course_id, "Course updated");
        Ok(CourseResponse::from(&course))
    }

    /// Delete a course. Teetimes that referenced it keep their denormalized
    /// course name but lose the link.
    #[instrument(skip(self))]
    pub async fn delete(&self, course_id: i64) -> ServiceResult<SuccessResponse> {
        self.ctx
            .course_repo()
            .find_by_id(course_id)
            .await?
            .ok_or(DomainError::CourseNotFound(course_id))?;

        self.ctx.course_repo().delete(course_id).await?;
        info!(course_id, "Course deleted");
        Ok(SuccessResponse::new("Course has been successfully deleted"))
    }
}
