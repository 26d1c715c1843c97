//! JSON envelope written to stdout and the exit code that goes with it.

use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

use union_gen::error::Hint;
use union_gen::{Error, ErrorCode, Result};

/// `{ "success": true, "data": ... }` or `{ "success": false, "error": ... }`.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Hint>,
}

impl Envelope {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code: err.code.as_str(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: err.hints.clone(),
            }),
        }
    }

    fn render(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::internal_json(e.to_string(), Some("render envelope".to_string())))
    }
}

/// Serialize a command's output, pairing it with the exit code to return.
pub fn map_cmd_result_to_json<T: Serialize>(result: Result<(T, i32)>) -> (Result<Value>, i32) {
    let (data, exit_code) = match result {
        Ok(pair) => pair,
        Err(err) => {
            let exit_code = exit_code_for(err.code);
            return (Err(err), exit_code);
        }
    };

    match serde_json::to_value(data) {
        Ok(value) => (Ok(value), exit_code),
        Err(e) => (
            Err(Error::internal_json(e.to_string(), Some("serialize output".to_string()))),
            exit_code_for(ErrorCode::InternalJsonError),
        ),
    }
}

pub fn print_json_result(result: Result<Value>) -> Result<()> {
    let envelope = match &result {
        Ok(data) => Envelope::ok(data.clone()),
        Err(err) => Envelope::failed(err),
    };
    let text = envelope.render()?;

    let mut out = io::stdout().lock();
    match writeln!(out, "{}", text) {
        Ok(()) => Ok(()),
        // A closed pipe (`| head`) is not a failure of the command.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(Error::internal_io(e.to_string(), Some("write stdout".to_string()))),
    }
}

pub fn exit_code_for(code: ErrorCode) -> i32 {
    use ErrorCode::*;

    match code {
        ConfigInvalidJson | ValidationMissingArgument | ValidationInvalidArgument => 2,
        InstallCommandFailed => 20,
        EmissionFailed | TemplateUnknownPlaceholder | TemplateAssetNotFound => 30,
        InternalIoError | InternalJsonError | InternalUnexpected => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use union_gen::error::EmissionOperation;

    #[test]
    fn emission_error_maps_to_exit_code_30() {
        let err = Error::emission_failed(EmissionOperation::CopyStatic, "public/robots.txt", "denied");
        let (value, exit_code) = map_cmd_result_to_json::<Value>(Err(err));
        assert!(value.is_err());
        assert_eq!(exit_code, 30);
    }

    #[test]
    fn missing_argument_maps_to_exit_code_2() {
        let err = Error::validation_missing_argument(vec!["--site-url".to_string()]);
        let (_value, exit_code) = map_cmd_result_to_json::<Value>(Err(err));
        assert_eq!(exit_code, 2);
    }

    #[test]
    fn failed_envelope_includes_code_details_and_hints() {
        let err = Error::emission_failed(EmissionOperation::CreateDirectory, "public", "denied");
        let json = Envelope::failed(&err).render().unwrap();

        assert!(json.contains("\"success\": false"));
        assert!(json.contains("\"code\": \"emission.failed\""));
        assert!(json.contains("\"operation\": \"create_directory\""));
        assert!(json.contains("\"hints\""));
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn hints_are_omitted_when_empty() {
        let err = Error::validation_invalid_argument("target", "not a directory", None);
        let json = Envelope::failed(&err).render().unwrap();
        assert!(!json.contains("\"hints\""));
    }

    #[test]
    fn success_passes_through_exit_code() {
        let (value, exit_code) = map_cmd_result_to_json(Ok((serde_json::json!({"ok": true}), 0)));
        assert_eq!(value.unwrap()["ok"], true);
        assert_eq!(exit_code, 0);
    }
}
