//! Status messages for operation feedback.

use std::fmt;

/// One-line success or failure message.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Success when `changed`, otherwise a failure carrying `unchanged`.
    pub fn changed(changed: bool, message: impl Into<String>, unchanged: impl Into<String>) -> Self {
        if changed {
            Self::success(message)
        } else {
            Self::failure(unchanged)
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        assert_eq!(
            OperationStatus::success("Tag added").to_string(),
            "Success: Tag added\n"
        );
        assert_eq!(
            OperationStatus::changed(false, "Tag removed", "Tag 'go' not on pathway").to_string(),
            "Error: Tag 'go' not on pathway\n"
        );
    }
}
