//! 연락처 봇 대화형 쉘(REPL) 인터페이스.
//!
//! 한 줄을 읽어 명령으로 해석하고, 래핑된 핸들러의 응답을 출력한다.
//! `exit`/`close` 또는 입력 종료 시 세션이 끝난다.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use crossterm::style::{Color, Stylize, style};
use tracing::debug;

use crate::application::config::{Config, DEFAULT_PROMPT};
use crate::application::handlers::{help_text, input_error, resolve};
use crate::domain::command::parse_input;
use crate::domain::contact::ContactStore;
use crate::interface::composition::AppComposition;
use crate::interface::cli::repl_input::read_repl_input;

const WELCOME: &str = "Welcome to the assistant bot!";
const GREETING: &str = "How can I help you?";
const FAREWELL: &str = "Good bye!";
const EMPTY_INPUT: &str = "Enter a command or type 'help'.";

/// 세션 출력 옵션.
#[derive(Debug, Clone)]
pub struct ReplOptions {
    pub prompt: String,
    pub welcome: bool,
    /// 인사/작별 문구에 색을 입힐지 여부
    pub color: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            welcome: true,
            color: false,
        }
    }
}

impl ReplOptions {
    /// 설정값을 반영하되, 색상은 stdout이 TTY일 때만 켠다.
    pub fn from_config(config: &Config) -> Self {
        Self {
            prompt: config.prompt(),
            welcome: config.welcome(),
            color: config.color() && io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// 세션 상태와 연락처 저장소를 소유하는 디스패처.
#[derive(Debug)]
pub struct Session {
    store: ContactStore,
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            store: ContactStore::new(),
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn terminate(&mut self) {
        self.state = SessionState::Terminated;
    }

    /// 입력 한 줄을 처리하고 출력할 응답 블록을 반환한다.
    pub fn handle_line(&mut self, line: &str) -> String {
        let parsed = parse_input(line);
        let command = parsed.command.as_str();
        debug!(command, args = parsed.arguments.len(), "dispatching");

        match command {
            "close" | "exit" => {
                self.terminate();
                FAREWELL.to_string()
            }
            "hello" => GREETING.to_string(),
            "" => EMPTY_INPUT.to_string(),
            _ => match resolve(command) {
                Some(handler) => input_error(handler)(&parsed.arguments, &mut self.store),
                None => format!("Unknown command: '{command}'\n{}", help_text()),
            },
        }
    }
}

/// 입력이 끝나거나 세션이 종료될 때까지 명령을 처리한다.
pub fn run_session<R, W>(input: &mut R, output: &mut W, options: &ReplOptions) -> Result<Session>
where
    R: BufRead,
    W: Write,
{
    if options.welcome {
        writeln!(output, "{}", paint(WELCOME, Color::Cyan, options.color))?;
    }

    let mut session = Session::new();
    while session.state() == SessionState::Running {
        let Some(line) = read_repl_input(input, output, &options.prompt)? else {
            // 종료 명령 없이 입력이 끝나면 정상 종료로 처리한다.
            writeln!(output)?;
            debug!("end of input; closing session");
            session.terminate();
            break;
        };

        let response = session.handle_line(&line);
        if session.state() == SessionState::Terminated {
            writeln!(output, "{}", paint(&response, Color::Magenta, options.color))?;
        } else {
            writeln!(output, "{response}")?;
        }
    }

    output.flush()?;
    Ok(session)
}

/// 표준 입출력에 연결된 대화형 세션을 실행한다.
pub fn run_repl(composition: &AppComposition) -> Result<()> {
    let config = composition.config()?;
    let options = ReplOptions::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    let session = run_session(&mut input, &mut output, &options)?;
    debug!(contacts = session.store().len(), "session finished");
    Ok(())
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).bold().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(lines: &[&str]) -> (Session, String) {
        let mut input = Cursor::new(lines.join("\n"));
        let mut output = Vec::new();
        let options = ReplOptions {
            prompt: String::new(),
            welcome: false,
            color: false,
        };
        let session = run_session(&mut input, &mut output, &options).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn dispatches_fixed_commands() {
        let mut session = Session::new();
        assert_eq!(session.handle_line("HELLO"), GREETING);
        assert_eq!(session.handle_line("   "), EMPTY_INPUT);
        assert_eq!(session.handle_line("help"), help_text());
        assert_eq!(session.state(), SessionState::Running);

        assert_eq!(session.handle_line("Close"), FAREWELL);
        assert_eq!(session.state(), SessionState::Terminated);
    }

    #[test]
    fn unknown_command_shows_help() {
        let mut session = Session::new();
        assert_eq!(
            session.handle_line("Delete bob"),
            format!("Unknown command: 'delete'\n{}", help_text())
        );
        // 약어/부분 일치는 허용하지 않는다.
        assert!(session.handle_line("ad a 1").starts_with("Unknown command: 'ad'"));
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn failures_never_stop_the_loop() {
        let (session, output) = run(&["add", "phone", "change x 1", "all", "exit"]);
        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(
            output,
            "Usage: add <name> <phone>\n\
             Enter the argument for the command\n\
             Contact 'x' not found.\n\
             No contacts.\n\
             Good bye!\n"
        );
    }

    #[test]
    fn lines_after_exit_are_not_read() {
        let (session, output) = run(&["add a 1", "exit", "add b 2"]);
        assert_eq!(session.store().len(), 1);
        assert_eq!(output, "Contact added.\nGood bye!\n");
    }

    #[test]
    fn end_of_input_terminates_cleanly() {
        let (session, output) = run(&["add a 1"]);
        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(output, "Contact added.\n\n");
    }

    #[test]
    fn invalid_utf8_line_does_not_end_session() {
        let mut raw = b"add a 1\n".to_vec();
        raw.extend_from_slice(&[0xff, 0xfe, b'\n']);
        raw.extend_from_slice(b"phone a\nexit\n");
        let mut input = Cursor::new(raw);
        let mut output = Vec::new();
        let options = ReplOptions {
            prompt: String::new(),
            welcome: false,
            color: false,
        };

        let session = run_session(&mut input, &mut output, &options).unwrap();
        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!(
                "Contact added.\nUnknown command: '\u{fffd}\u{fffd}'\n{}\n1\nGood bye!\n",
                help_text()
            )
        );
    }

    #[test]
    fn welcome_and_prompt_are_written() {
        let mut input = Cursor::new("hello\nexit\n");
        let mut output = Vec::new();
        run_session(&mut input, &mut output, &ReplOptions::default()).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: Good bye!\n"
        );
    }
}
