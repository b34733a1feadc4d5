//! Database schema and migrations for ATOM.

/// Database migrations.
///
/// Each migration is a SQL script executed in order. The schema_version
/// table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Topics
    r#"
CREATE TABLE topics (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    topic_uuid  TEXT NOT NULL UNIQUE,
    title       TEXT NOT NULL,
    author      TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE INDEX idx_topics_created_at ON topics(created_at);
"#,
    // v2: Messages. topic_uuid is NULL when the topic id did not resolve.
    r#"
CREATE TABLE messages (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    message_uuid  TEXT NOT NULL UNIQUE,
    text          TEXT NOT NULL,
    author        TEXT NOT NULL,
    created_at    TEXT NOT NULL,
    topic_uuid    TEXT REFERENCES topics(topic_uuid) ON DELETE CASCADE
);

CREATE INDEX idx_messages_topic_uuid ON messages(topic_uuid);
CREATE INDEX idx_messages_author ON messages(author);
"#,
];
