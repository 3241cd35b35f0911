//! Endpoint operations, one method per remote Compass operation.
//!
//! Each `impl CompassClient` block covers one API area. Methods build the
//! request (path template, query pairs, JSON body, error map), delegate
//! transport to the client, and reshape the response where a more
//! convenient structure exists.

mod folders;
mod markings;
mod projects;
mod resources;
mod roles;
mod trash;

pub use folders::ChildrenParams;
pub use projects::{ProjectSearchRequest, PROJECTS_BATCH_SIZE};
pub use resources::{GetResourceParams, PATHS_BATCH_SIZE};
pub use roles::RoleGrantsUpdate;

use std::collections::HashMap;

/// Merge one chunk's results into the accumulated mapping.
///
/// Identifiers are unique so chunks should never disagree; if the server
/// ever returns differing values for the same key the latest chunk wins
/// and the overwrite is logged rather than silent.
pub(crate) fn merge_batch<V>(into: &mut HashMap<String, V>, batch: HashMap<String, V>)
where
    V: PartialEq,
{
    for (key, value) in batch {
        if let Some(previous) = into.get(&key) {
            if *previous != value {
                tracing::warn!(
                    %key,
                    "batched lookup returned conflicting values for the same key, keeping the latest"
                );
            }
        }
        into.insert(key, value);
    }
}
