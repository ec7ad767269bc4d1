//! Initial schema creation
//!
//! Four tables with the foreign-key relationships of the data model.
//! Cascade policy: deleting a golfer removes their teetimes and comments;
//! deleting a teetime removes its comments; deleting a course detaches
//! linked teetimes (the denormalized course name stays on the row).

use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS golfers (
        golfer_id     INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name    TEXT NOT NULL,
        last_name     TEXT NOT NULL,
        email         TEXT NOT NULL,
        username      TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        golfer_age    INTEGER NOT NULL,
        handicap      REAL,
        right_handed  BOOLEAN,
        alcohol       BOOLEAN,
        legal_drugs   BOOLEAN,
        smoker        BOOLEAN,
        gambler       BOOLEAN,
        music         BOOLEAN,
        tees          TEXT,
        phone         TEXT,
        city          TEXT NOT NULL,
        district      TEXT NOT NULL,
        country       TEXT NOT NULL,
        token         TEXT,
        token_exp     TIMESTAMP
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS courses (
        course_id     INTEGER PRIMARY KEY AUTOINCREMENT,
        course_name   TEXT NOT NULL,
        address       TEXT NOT NULL,
        city          TEXT NOT NULL,
        district      TEXT NOT NULL,
        country       TEXT NOT NULL,
        weekday_price INTEGER,
        weekend_price INTEGER,
        strict_dress  BOOLEAN,
        rating        REAL,
        slope         REAL,
        course_length INTEGER,
        par           INTEGER NOT NULL,
        designer      TEXT
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS teetimes (
        teetime_id      INTEGER PRIMARY KEY AUTOINCREMENT,
        course_name     TEXT NOT NULL,
        price           INTEGER NOT NULL,
        teetime_date    TEXT NOT NULL,
        teetime_time    TEXT NOT NULL,
        space_remaining INTEGER NOT NULL,
        golfer_id       INTEGER NOT NULL
                        REFERENCES golfers (golfer_id) ON DELETE CASCADE,
        course_id       INTEGER
                        REFERENCES courses (course_id) ON DELETE SET NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS golfer_comments (
        golfer_comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
        body              TEXT NOT NULL,
        golfer_id         INTEGER NOT NULL
                          REFERENCES golfers (golfer_id) ON DELETE CASCADE,
        teetime_id        INTEGER NOT NULL
                          REFERENCES teetimes (teetime_id) ON DELETE CASCADE
    )
    ",
    r"CREATE INDEX IF NOT EXISTS idx_teetimes_golfer ON teetimes (golfer_id)",
    r"CREATE INDEX IF NOT EXISTS idx_comments_teetime ON golfer_comments (teetime_id)",
];

/// Create the tables and indexes if they do not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
