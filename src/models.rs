use serde::Serialize;

/// Opaque identifier of a warble. The client performs no validation; an
/// unknown id is forwarded to the server as-is.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct WarbleId(pub String);

impl std::fmt::Display for WarbleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for WarbleId {
    fn from(value: &str) -> Self {
        WarbleId(value.to_owned())
    }
}

/// Request payload for creating a warble.
#[derive(Debug, Clone, Serialize)]
pub struct NewWarble {
    pub text: String,
}

/// Result of asking the server to flip the like relation between the
/// current user and a warble.
///
/// The client never raises; transport failures and unrecognized responses
/// are folded into `RequestFailed` so callers always see one of these
/// three tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    LikeAdded,
    LikeRemoved,
    RequestFailed,
}

/// Result of submitting a new warble for creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Failed,
}
