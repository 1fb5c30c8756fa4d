//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Field keys the test capture layer lifts out of every event
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Operation names
pub const OP_COMPUTE_CHANGES: &str = "compute_changes";
pub const OP_APPLY_CHANGE_SET: &str = "apply_change_set";
pub const OP_RELOAD: &str = "reload";
pub const OP_SAVE_FAVORITE: &str = "save_favorite";
pub const OP_REMOVE_FAVORITE: &str = "remove_favorite";
