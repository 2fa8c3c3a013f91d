//! Diesel table definitions for the tables this service touches.
//!
//! The schema is owned elsewhere; only the columns read or written here are
//! declared.

diesel::table! {
    /// Registered users. Only existence by `id` is checked.
    users (id) {
        id -> Int8,
    }
}

diesel::table! {
    /// Submitted locations, one row per accepted request.
    locations (id) {
        id -> Int8,
        latitude -> Float8,
        longitude -> Float8,
        user_id -> Int8,
    }
}

diesel::joinable!(locations -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(locations, users);
