//! REPL 입력 한 줄을 명령/인자로 해석하는 모듈.

use thiserror::Error;

/// 토큰화된 입력 한 줄.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    /// 소문자로 정규화된 명령 이름. 빈 입력이면 빈 문자열.
    pub command: String,
    pub arguments: Vec<String>,
}

impl ParsedCommand {
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

/// 공백 단위로 입력을 나눈다.
/// 첫 토큰만 소문자로 바꾸고, 인자는 원래 대소문자를 유지한다.
pub fn parse_input(raw: &str) -> ParsedCommand {
    let mut parts = raw.split_whitespace();
    let Some(first) = parts.next() else {
        return ParsedCommand::default();
    };

    ParsedCommand {
        command: first.to_lowercase(),
        arguments: parts.map(ToString::to_string).collect(),
    }
}

/// 핸들러가 신호하는 실패 종류. 래퍼가 사용자 메시지로 변환한다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Enter the argument for the command")]
    MissingArgument,
    #[error("{}", invalid_arguments(.0))]
    WrongArgumentCount(String),
    #[error("{}", contact_not_found(.0))]
    ContactNotFound(String),
}

fn invalid_arguments(message: &str) -> String {
    let message = message.trim();
    if message.is_empty() {
        "Invalid arguments.".to_string()
    } else {
        message.to_string()
    }
}

fn contact_not_found(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        "Contact not found.".to_string()
    } else {
        format!("Contact '{name}' not found.")
    }
}
