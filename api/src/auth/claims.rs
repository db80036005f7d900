use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried by a signed credential: the server-assigned expiry plus
/// whatever object was signed for the client. The payload is kept as an
/// open map because callers decide its shape.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub exp: usize,
    #[serde(flatten)]
    pub user: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
