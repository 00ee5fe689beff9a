use serde::{Deserialize, Serialize};

/// A Discord guild the caller belongs to.
///
/// Only the fields the dashboard needs survive deserialization: the upstream
/// guild payload also carries icon hashes, owner flags and permission bits,
/// all of which are dropped here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub id: String,
    pub name: String,
}
