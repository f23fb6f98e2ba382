use crate::case::CaseName;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutomationError {
    #[error(
        "Invalid caseName '{value}'. Use one of: {options}",
        options = CaseName::valid_options()
    )]
    InvalidCaseName { value: String },

    #[error("Failed to reach automation service: {0}")]
    UnreachableService(String),

    #[error("Automation service error {status}: {body}")]
    ServiceError { status: u16, body: String },
}

impl AutomationError {
    /// Wraps a transport failure, keeping every cause in the error chain.
    pub fn unreachable(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        Self::UnreachableService(message)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer(&'static str, Option<Box<Layer>>);

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for Layer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.1.as_deref().map(|l| l as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn test_invalid_case_name_lists_options() {
        let err = AutomationError::InvalidCaseName {
            value: "NOPE".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid caseName 'NOPE'. Use one of: IMLC_001, TEST_001"
        );
    }

    #[test]
    fn test_unreachable_includes_source_chain() {
        let err = Layer(
            "error sending request",
            Some(Box::new(Layer("Connection refused", None))),
        );
        let wrapped = AutomationError::unreachable(&err);
        assert_eq!(
            wrapped.to_string(),
            "Failed to reach automation service: error sending request: Connection refused"
        );
    }

    #[test]
    fn test_unreachable_skips_repeated_causes() {
        let err = Layer(
            "connect failed: Connection refused",
            Some(Box::new(Layer("Connection refused", None))),
        );
        let wrapped = AutomationError::unreachable(&err);
        assert_eq!(
            wrapped.to_string(),
            "Failed to reach automation service: connect failed: Connection refused"
        );
    }

    #[test]
    fn test_service_error_message() {
        let err = AutomationError::ServiceError {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Automation service error 502: bad gateway");
    }
}
