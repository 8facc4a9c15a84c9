use serde::Serialize;

/// Liveness probe payload.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}
