//! Diesel schema for task and owner persistence.

diesel::table! {
    /// Task owners keyed by normalized phone number.
    users (id) {
        /// Owner identifier.
        id -> Uuid,
        /// Normalized phone number; unique across owners.
        #[max_length = 32]
        phone_number -> Varchar,
        /// Optional display name.
        #[max_length = 255]
        name -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Structured task records captured from chat messages.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user.
        owner_id -> Uuid,
        /// Optional short title.
        #[max_length = 255]
        title -> Nullable<Varchar>,
        /// Task content; never empty.
        content -> Text,
        /// Optional one-line summary.
        summary -> Nullable<Text>,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Urgency level.
        #[max_length = 10]
        priority -> Varchar,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional category assigned by triage.
        #[max_length = 100]
        category -> Nullable<Varchar>,
        /// Triage flag for tasks awaiting categorization.
        is_flagged -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> users (owner_id));
diesel::allow_tables_to_appear_in_same_query!(tasks, users);
