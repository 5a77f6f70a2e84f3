//! REPL 명령 핸들러와 공통 에러 정규화 래퍼.
//!
//! 핸들러는 `CommandOutcome`만 반환하고, 사용자 메시지 변환은 [`input_error`]가 전담한다.

use tracing::debug;

use crate::domain::command::CommandError;
use crate::domain::contact::ContactStore;

pub type CommandOutcome = Result<String, CommandError>;

/// 모든 래핑 대상 핸들러의 공통 시그니처.
pub type Handler = fn(&[String], &mut ContactStore) -> CommandOutcome;

const ADD_USAGE: &str = "Usage: add <name> <phone>";
const CHANGE_USAGE: &str = "Usage: change <name> <new_phone>";

/// 핸들러 실패를 고정 문자열로 바꾸는 고차 함수.
/// 디스패처는 이 래퍼를 거친 결과만 받으므로 실패로 루프가 끝나지 않는다.
pub fn input_error<F>(handler: F) -> impl Fn(&[String], &mut ContactStore) -> String
where
    F: Fn(&[String], &mut ContactStore) -> CommandOutcome,
{
    move |args, store| match handler(args, store) {
        Ok(response) => response,
        Err(err) => {
            debug!(error = ?err, "handler failure normalized");
            err.to_string()
        }
    }
}

/// 래핑 대상 명령 이름을 핸들러로 해석한다.
/// `hello`/`exit`/`close`/빈 입력은 디스패처가 직접 처리하므로 여기 없다.
pub fn resolve(command: &str) -> Option<Handler> {
    match command {
        "add" => Some(add_contact),
        "change" => Some(change_contact),
        "phone" => Some(show_phone),
        "all" => Some(show_all),
        "help" => Some(help_command),
        _ => None,
    }
}

/// add <name> <phone>
pub fn add_contact(args: &[String], store: &mut ContactStore) -> CommandOutcome {
    let [name, phone] = args else {
        return Err(CommandError::WrongArgumentCount(ADD_USAGE.to_string()));
    };
    store.add(name, phone);
    Ok("Contact added.".to_string())
}

/// change <name> <new_phone>
pub fn change_contact(args: &[String], store: &mut ContactStore) -> CommandOutcome {
    let [name, new_phone] = args else {
        return Err(CommandError::WrongArgumentCount(CHANGE_USAGE.to_string()));
    };
    store.change(name, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// phone <name>. 추가 인자는 무시한다.
pub fn show_phone(args: &[String], store: &mut ContactStore) -> CommandOutcome {
    let name = args.first().ok_or(CommandError::MissingArgument)?;
    Ok(store.lookup(name)?.to_string())
}

pub fn show_all(_args: &[String], store: &mut ContactStore) -> CommandOutcome {
    Ok(store.list_all())
}

pub fn help_command(_args: &[String], _store: &mut ContactStore) -> CommandOutcome {
    Ok(help_text().to_string())
}

pub fn help_text() -> &'static str {
    "Available commands:\n\
     - hello: greeting\n\
     - add <name> <phone>: add a new contact\n\
     - change <name> <new_phone>: update an existing contact\n\
     - phone <name>: show the phone number\n\
     - all: show all contacts\n\
     - help: show this message\n\
     - exit / close: quit"
}
