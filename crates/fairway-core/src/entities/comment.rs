//! Golfer comment entity - a comment left on a teetime

/// Comment left by a golfer on a teetime.
#[derive(Debug, Clone, PartialEq)]
pub struct GolferComment {
    pub golfer_comment_id: i64,
    pub body: String,
    pub golfer_id: i64,
    pub teetime_id: i64,
}

impl GolferComment {
    /// Only the authoring golfer may delete a comment.
    #[inline]
    pub fn is_authored_by(&self, golfer_id: i64) -> bool {
        self.golfer_id == golfer_id
    }

    /// A comment addressed through a teetime URL must actually belong to
    /// that teetime.
    #[inline]
    pub fn belongs_to(&self, teetime_id: i64) -> bool {
        self.teetime_id == teetime_id
    }
}

/// Field set for creating a new comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: String,
    pub golfer_id: i64,
    pub teetime_id: i64,
}
