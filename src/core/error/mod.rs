use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,

    ValidationMissingArgument,
    ValidationInvalidArgument,

    EmissionFailed,

    TemplateUnknownPlaceholder,
    TemplateAssetNotFound,

    InstallCommandFailed,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",

            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::EmissionFailed => "emission.failed",

            ErrorCode::TemplateUnknownPlaceholder => "template.unknown_placeholder",
            ErrorCode::TemplateAssetNotFound => "template.asset_not_found",

            ErrorCode::InstallCommandFailed => "install.command_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

/// The filesystem primitive that was running when an emission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionOperation {
    CreateDirectory,
    CopyStatic,
    RenderTemplate,
    WriteGenerated,
}

impl EmissionOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmissionOperation::CreateDirectory => "create_directory",
            EmissionOperation::CopyStatic => "copy_static",
            EmissionOperation::RenderTemplate => "render_template",
            EmissionOperation::WriteGenerated => "write_generated",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionFailedDetails {
    pub operation: EmissionOperation,
    pub path: String,
    pub cause: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownPlaceholderDetails {
    pub asset: String,
    pub placeholders: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallCommandFailedDetails {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    pub cause: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "Missing required argument",
            to_details(MissingArgumentDetails { args }),
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
    ) -> Self {
        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            to_details(InvalidArgumentDetails {
                field: field.into(),
                problem: problem.into(),
                id,
            }),
        )
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidJson,
            "Invalid JSON in configuration",
            to_details(ConfigInvalidJsonDetails {
                path: path.into(),
                error: err.to_string(),
            }),
        )
        .with_hint("Fix the JSON syntax or run 'union-gen config reset'")
    }

    pub fn emission_failed(
        operation: EmissionOperation,
        path: impl Into<String>,
        cause: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let message = format!("{} failed for {}", operation.as_str(), path);
        Self::new(
            ErrorCode::EmissionFailed,
            message,
            to_details(EmissionFailedDetails {
                operation,
                path,
                cause: cause.into(),
            }),
        )
        .with_hint("Files written before this step were left in place; fix the cause and rerun")
    }

    pub fn template_unknown_placeholder(asset: impl Into<String>, placeholders: Vec<String>) -> Self {
        let asset = asset.into();
        Self::new(
            ErrorCode::TemplateUnknownPlaceholder,
            format!("Template '{}' has unresolved placeholders", asset),
            to_details(UnknownPlaceholderDetails {
                asset,
                placeholders,
            }),
        )
    }

    pub fn template_asset_not_found(asset: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::TemplateAssetNotFound,
            "Bundled asset not found",
            serde_json::json!({ "asset": asset.into() }),
        )
    }

    pub fn install_command_failed(details: InstallCommandFailedDetails) -> Self {
        let message = format!("Install command failed: {}", details.command);
        Self::new(ErrorCode::InstallCommandFailed, message, to_details(details))
            .with_hint("Run 'npm install & bower install' manually, then 'gulp'")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalIoError,
            "IO error",
            to_details(InternalIoErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON error",
            to_details(InternalJsonErrorDetails {
                error: error.into(),
                context,
            }),
        )
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::internal_unexpected(message)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emission_failed_carries_operation_and_path() {
        let err = Error::emission_failed(
            EmissionOperation::CreateDirectory,
            "public",
            "permission denied",
        );

        assert_eq!(err.code.as_str(), "emission.failed");
        assert_eq!(err.details["operation"], "create_directory");
        assert_eq!(err.details["path"], "public");
        assert_eq!(err.details["cause"], "permission denied");
        assert!(err.message.contains("public"));
        assert_eq!(err.hints.len(), 1);
    }

    #[test]
    fn unknown_placeholder_lists_names() {
        let err = Error::template_unknown_placeholder(
            "index.html",
            vec!["title".to_string(), "author".to_string()],
        );

        assert_eq!(err.code, ErrorCode::TemplateUnknownPlaceholder);
        assert_eq!(err.details["asset"], "index.html");
        assert_eq!(err.details["placeholders"][1], "author");
    }

    #[test]
    fn install_exit_code_omitted_when_unknown() {
        let err = Error::install_command_failed(InstallCommandFailedDetails {
            command: "npm install".to_string(),
            exit_code: None,
            cause: "spawn failed".to_string(),
        });

        assert!(err.details.get("exitCode").is_none());
        assert_eq!(err.details["cause"], "spawn failed");
    }
}
