use serde::{Deserialize, Serialize};

/// Identity of the caller performing a request.
///
/// Resolved by the web layer's authentication middleware and passed
/// explicitly into component entry points that need it; the engine never
/// consults a global session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub user_id: i64,
    pub name: String,
    pub role: String,
}

impl CallerIdentity {
    /// Identity used when authentication is disabled (local development and
    /// tests).
    pub fn local_admin() -> Self {
        Self {
            user_id: 1,
            name: "local-admin".to_string(),
            role: "ADMIN".to_string(),
        }
    }
}
