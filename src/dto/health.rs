use serde::Serialize;
use utoipa::ToSchema;

/// Whether the player document could be read when `/healthcheck` was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Ok,
    /// Reads would currently answer 500; the process itself is still serving.
    Degraded,
}

/// Body of `/healthcheck`. Always sent with 200 so load balancers can tell a
/// live process with a broken data file from a dead one.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: StoreStatus,
}

impl HealthResponse {
    pub fn for_store(readable: bool) -> Self {
        let status = if readable {
            StoreStatus::Ok
        } else {
            StoreStatus::Degraded
        };
        Self { status }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unreadable_store_serializes_as_degraded() {
        let body = serde_json::to_value(HealthResponse::for_store(false)).unwrap();
        assert_eq!(body, json!({ "status": "degraded" }));

        let body = serde_json::to_value(HealthResponse::for_store(true)).unwrap();
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
