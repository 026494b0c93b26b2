use serde_json::Value;

use crate::errors::CommandError;
use crate::model::CommandOutcome;

/// Commands the simulated device understands. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Restart,
    Update,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "restart" => Some(Self::Restart),
            "update" => Some(Self::Update),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Restart => "restart",
            Self::Update => "update",
        }
    }
}

/// Validates a raw command payload.
///
/// Three stages: JSON parse, presence of a non-empty string `command`
/// field, vocabulary match. Each failure maps to its own error kind.
pub fn parse_payload(body: &[u8]) -> Result<Command, CommandError> {
    let payload: Value = serde_json::from_slice(body).map_err(CommandError::InvalidJson)?;

    // Valid JSON that is not an object carries no command field either;
    // both cases surface as MissingCommand, not InvalidJson.
    let name = payload
        .get("command")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(CommandError::MissingCommand)?;

    Command::from_name(name).ok_or_else(|| CommandError::UnknownCommand(name.to_string()))
}

/// Dispatches a validated command against the simulated device.
///
/// Commands have no effect beyond the acknowledgement message; the reading
/// store is untouched.
pub fn execute(command: Command) -> CommandOutcome {
    CommandOutcome {
        status: "success",
        message: format!("Command '{}' executed", command.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_restart() {
        let command = parse_payload(br#"{"command":"restart"}"#).unwrap();
        assert_eq!(command, Command::Restart);
    }

    #[test]
    fn test_parse_update() {
        let command = parse_payload(br#"{"command":"update"}"#).unwrap();
        assert_eq!(command, Command::Update);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let command = parse_payload(br#"{"command":"restart","params":{"mode":"hard"}}"#).unwrap();
        assert_eq!(command, Command::Restart);
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_payload(br#"{"command":"launch"}"#).unwrap_err();
        match err {
            CommandError::UnknownCommand(name) => assert_eq!(name, "launch"),
            other => panic!("expected UnknownCommand, got {:?}", other),
        }
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let err = parse_payload(br#"{"command":"Restart"}"#).unwrap_err();
        assert!(matches!(err, CommandError::UnknownCommand(_)));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_payload(b"not json").unwrap_err();
        assert!(matches!(err, CommandError::InvalidJson(_)));
    }

    #[test]
    fn test_missing_command_field() {
        let err = parse_payload(b"{}").unwrap_err();
        assert!(matches!(err, CommandError::MissingCommand));
    }

    #[test]
    fn test_empty_command_is_missing() {
        let err = parse_payload(br#"{"command":""}"#).unwrap_err();
        assert!(matches!(err, CommandError::MissingCommand));
    }

    #[test]
    fn test_non_string_command_is_missing() {
        let err = parse_payload(br#"{"command":5}"#).unwrap_err();
        assert!(matches!(err, CommandError::MissingCommand));
    }

    #[test]
    fn test_non_object_json_is_missing_not_invalid() {
        // "restart" alone is valid JSON but carries no command field
        let err = parse_payload(br#""restart""#).unwrap_err();
        assert!(matches!(err, CommandError::MissingCommand));

        let err = parse_payload(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, CommandError::MissingCommand));
    }

    #[test]
    fn test_execute_acknowledges_command() {
        let outcome = execute(Command::Restart);

        assert_eq!(outcome.status, "success");
        assert_eq!(outcome.message, "Command 'restart' executed");
    }
}
