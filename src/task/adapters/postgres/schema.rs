//! Diesel schema for task persistence.

diesel::table! {
    /// Task records. `status_id` is a plain column without an enforcing
    /// foreign key, so deleting a status orphans its tasks.
    task (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 2048]
        name -> Varchar,
        /// Free-text task body.
        #[max_length = 4096]
        text -> Varchar,
        /// Referenced status identifier.
        status_id -> Int4,
    }
}
