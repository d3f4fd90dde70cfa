diesel::table! {
    users (id) {
        id -> Integer,
        email -> Text,
        password_hash -> Text,
        password_salt -> Text,
        created_ts -> Timestamp,
    }
}

diesel::table! {
    sessions (id) {
        id -> Integer,
        token -> Text,
        user_id -> Integer,
        created_ts -> Timestamp,
    }
}

diesel::table! {
    bookmarks (id) {
        id -> Integer,
        user_id -> Integer,
        url -> Text,
        title -> Text,
        desc -> Text,
        favicon -> Nullable<Text>,
        created_ts -> Timestamp,
        last_update_ts -> Timestamp,
    }
}

diesel::joinable!(bookmarks -> users (user_id));
diesel::joinable!(sessions -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, sessions, bookmarks);
