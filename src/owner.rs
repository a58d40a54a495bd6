// owner.rs — Owner and group name resolution
//
// Resolves numeric uid/gid to names for the long listing. An id with no
// matching account renders the "?" placeholder; resolution failure never
// fails the entry.

use uzers::{get_group_by_gid, get_user_by_uid};

/// Placeholder for an id that resolves to no account name.
pub const UNRESOLVED_NAME: &str = "?";

/// Resolve a uid to its account name, or the placeholder.
pub fn owner_name(uid: u32) -> String {
    match get_user_by_uid(uid) {
        Some(user) => user.name().to_string_lossy().into_owned(),
        None => UNRESOLVED_NAME.to_string(),
    }
}

/// Resolve a gid to its group name, or the placeholder.
pub fn group_name(gid: u32) -> String {
    match get_group_by_gid(gid) {
        Some(group) => group.name().to_string_lossy().into_owned(),
        None => UNRESOLVED_NAME.to_string(),
    }
}
