//! Teetime entity - a bookable slot at a course

/// Teetime entity. Belongs to exactly one golfer (the author); optionally
/// references a course. The course name is a denormalized copy supplied at
/// creation time, not derived from the linked course.
#[derive(Debug, Clone, PartialEq)]
pub struct Teetime {
    pub teetime_id: i64,
    pub course_name: String,
    pub price: i64,
    pub teetime_date: String,
    pub teetime_time: String,
    pub space_remaining: i64,
    pub golfer_id: i64,
    pub course_id: Option<i64>,
}

impl Teetime {
    /// Only the authoring golfer may edit or delete a teetime.
    #[inline]
    pub fn is_owned_by(&self, golfer_id: i64) -> bool {
        self.golfer_id == golfer_id
    }
}

/// Field set for creating a new teetime.
#[derive(Debug, Clone)]
pub struct NewTeetime {
    pub course_name: String,
    pub price: i64,
    pub teetime_date: String,
    pub teetime_time: String,
    pub space_remaining: i64,
    pub golfer_id: i64,
    pub course_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership() {
        let teetime = Teetime {
            teetime_id: 7,
            course_name: "Pebble Beach".into(),
            price: 550,
            teetime_date: "2026-09-12".into(),
            teetime_time: "07:30".into(),
            space_remaining: 3,
            golfer_id: 42,
            course_id: None,
        };
        assert!(teetime.is_owned_by(42));
        assert!(!teetime.is_owned_by(43));
    }
}
