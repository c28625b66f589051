use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct AdminApiError {
    pub operation: &'static str,
    pub kind: FailureKind,
    pub detail: String,
}

impl AdminApiError {
    pub fn transport(operation: &'static str, err: &reqwest::Error) -> Self {
        Self {
            operation,
            kind: FailureKind::Transport,
            detail: err.to_string(),
        }
    }

    pub fn status(operation: &'static str, status: reqwest::StatusCode, body: String) -> Self {
        Self {
            operation,
            kind: FailureKind::Status(status.as_u16()),
            detail: body,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind == FailureKind::Transport
    }
}

impl fmt::Display for AdminApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::Transport => write!(
                f,
                "admin API transport error (operation={}): {}",
                self.operation, self.detail
            ),
            FailureKind::Status(code) => write!(
                f,
                "admin API HTTP {code} (operation={}): {}",
                self.operation, self.detail
            ),
        }
    }
}

impl std::error::Error for AdminApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_operation_and_status() {
        let err = AdminApiError::status(
            "delete_stock",
            reqwest::StatusCode::UNAUTHORIZED,
            "{\"error\":\"Unauthorized\"}".to_string(),
        );
        assert!(!err.is_transport());
        assert_eq!(err.kind, FailureKind::Status(401));
        let text = err.to_string();
        assert!(text.contains("HTTP 401"));
        assert!(text.contains("delete_stock"));
    }

    #[test]
    fn survives_a_round_trip_through_anyhow() {
        let err: anyhow::Error = AdminApiError {
            operation: "create_stock",
            kind: FailureKind::Transport,
            detail: "connection refused".to_string(),
        }
        .into();

        let diag = err.downcast_ref::<AdminApiError>().unwrap();
        assert!(diag.is_transport());
    }
}
