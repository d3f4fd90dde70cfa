// src/infrastructure/repositories/sqlite/model.rs
use chrono::NaiveDateTime;
use diesel::{Identifiable, Insertable, Queryable, Selectable};

#[derive(Queryable, Identifiable, Clone, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::bookmarks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DbBookmark {
    pub id: i32,
    pub user_id: i32,
    pub url: String,
    pub title: String,
    pub desc: String,
    pub favicon: Option<String>,
    pub created_ts: NaiveDateTime,
    pub last_update_ts: NaiveDateTime,
}

/// New bookmark for insertion
#[derive(Insertable, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::bookmarks)]
pub struct NewBookmark {
    pub user_id: i32,
    pub url: String,
    pub title: String,
    pub desc: String,
    pub favicon: Option<String>,
    pub created_ts: NaiveDateTime,
    pub last_update_ts: NaiveDateTime,
}

#[derive(Queryable, Identifiable, Selectable, Clone, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DbUser {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
    pub created_ts: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::users)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
    pub created_ts: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::sessions)]
pub struct NewSession {
    pub token: String,
    pub user_id: i32,
    pub created_ts: NaiveDateTime,
}
