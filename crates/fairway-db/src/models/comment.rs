//! Golfer comment database model

use sqlx::FromRow;

use fairway_core::GolferComment;

/// Database model for the golfer_comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub golfer_comment_id: i64,
    pub body: String,
    pub golfer_id: i64,
    pub teetime_id: i64,
}

impl From<CommentModel> for GolferComment {
    fn from(model: CommentModel) -> Self {
        GolferComment {
            golfer_comment_id: model.golfer_comment_id,
            body: model.body,
            golfer_id: model.golfer_id,
            teetime_id: model.teetime_id,
        }
    }
}
