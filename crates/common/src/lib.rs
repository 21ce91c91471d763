//! Shared building blocks for the institute admin workspace.
//!
//! - `types`: small response payloads reused by the HTTP layer.
//! - `utils::logging`: tracing subscriber setup shared by binaries and tests.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn error_body_skips_missing_detail() {
        let body = types::ErrorBody { error: "Not Found".into(), detail: None };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["error"], "Not Found");
        assert!(v.get("detail").is_none());
    }
}
