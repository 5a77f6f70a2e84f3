//! CLI 인터페이스 모듈 묶음.
//! 입력 파싱/REPL/보조 도구 출력을 한 네임스페이스로 관리한다.

pub mod command;
pub mod repl;
pub mod repl_input;
pub mod tools;

pub use crate::interface::composition::AppComposition;
pub use command::{Cli, CliAction};
pub use repl::{ReplOptions, Session, SessionState, run_repl, run_session};
