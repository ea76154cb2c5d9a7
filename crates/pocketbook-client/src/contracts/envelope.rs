use serde::Serialize;
use serde_json::Value;

use crate::API_VERSION;
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub command: String,
    pub version: String,
    pub data: Value,
}

impl SuccessEnvelope {
    /// Level of the outcome notification, when the command produced one.
    pub fn notification_level(&self) -> Option<&str> {
        self.data
            .get("notification")
            .and_then(|notification| notification.get("level"))
            .and_then(Value::as_str)
    }

    /// True when the command ran but could not persist its change.
    pub fn has_error_notification(&self) -> bool {
        self.notification_level() == Some("error")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope {
    pub ok: bool,
    pub error: ErrorContract,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorContract {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
}

pub fn success<T>(command: &str, data: T) -> ClientResult<SuccessEnvelope>
where
    T: Serialize,
{
    let json_data = serde_json::to_value(data)
        .map_err(|err| ClientError::internal_serialization(&err.to_string()))?;
    Ok(SuccessEnvelope {
        ok: true,
        command: command.to_string(),
        version: API_VERSION.to_string(),
        data: json_data,
    })
}

pub fn failure_from_error(error: &ClientError) -> FailureEnvelope {
    FailureEnvelope {
        ok: false,
        error: ErrorContract {
            code: error.code.clone(),
            message: error.message.clone(),
            recovery_steps: error.recovery_steps.clone(),
        },
        data: error.data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{failure_from_error, success};
    use crate::ClientError;

    #[test]
    fn error_notification_is_detected_from_data() {
        let envelope = success(
            "add",
            json!({"applied": false, "notification": {"level": "error", "message": "Failed to add transaction!"}}),
        );
        assert!(envelope.is_ok());
        if let Ok(envelope) = envelope {
            assert!(envelope.has_error_notification());
        }

        let quiet = success("summary", json!({"income": 0}));
        assert!(quiet.is_ok());
        if let Ok(envelope) = quiet {
            assert_eq!(envelope.notification_level(), None);
            assert!(!envelope.has_error_notification());
        }
    }

    #[test]
    fn failure_carries_code_and_recovery_steps() {
        let failure = failure_from_error(&ClientError::transaction_not_found("txn_9"));
        assert!(!failure.ok);
        assert_eq!(failure.error.code, "transaction_not_found");
        assert_eq!(failure.error.recovery_steps.len(), 2);
        assert!(failure.data.is_some());
    }
}
