//! Diesel schema for status persistence.

diesel::table! {
    /// Named categories referenced by tasks.
    status (id) {
        /// Store-generated status identifier.
        id -> Int4,
        /// Human-readable status label.
        #[max_length = 2048]
        name -> Varchar,
    }
}
