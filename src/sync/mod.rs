//! Synchronisation with the technician app.
//!
//! Only the payload is built here: pending notifications with their resolved
//! recipients, technician categories, ships and locations. Delivering it is
//! left to the caller.

mod payload;

pub use payload::{
    ALL_USERS, DEFAULT_CREATED_BY, SyncNotification, SyncPayload, TechnicianCategoryList,
    build_sync_payload, mark_notifications_sent, resolve_target_users,
};
