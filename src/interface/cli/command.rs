//! CLI 명령 파싱 모듈.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "contactbot")]
#[command(about = "Contact assistant bot with log, number and fibonacci helpers")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and searched paths
    Config,
    /// Count log lines per level and optionally list one level
    Logs {
        /// Log file path (UTF-8, `DATE TIME LEVEL MESSAGE` per line)
        file: PathBuf,
        /// Level to list in detail (info/error/debug/warning/...)
        level: Option<String>,
    },
    /// Sum whitespace-delimited numbers in text (reads stdin when no text is given)
    Sum {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Print fibonacci numbers using one shared memo table
    Fib {
        #[arg(required = true)]
        n: Vec<u64>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Interactive,
    InspectConfig,
    AnalyzeLogs {
        file: PathBuf,
        level: Option<String>,
    },
    /// `None`이면 stdin 전체를 읽는다.
    SumNumbers(Option<String>),
    Fibonacci(Vec<u64>),
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    pub fn try_parse_action_from<I, T>(args: I) -> Result<CliAction, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Cli::try_parse_from(args)?.into_action())
    }

    fn into_action(self) -> CliAction {
        match self.command {
            None => CliAction::Interactive,
            Some(Commands::Config) => CliAction::InspectConfig,
            Some(Commands::Logs { file, level }) => CliAction::AnalyzeLogs { file, level },
            Some(Commands::Sum { text }) => {
                if text.is_empty() {
                    CliAction::SumNumbers(None)
                } else {
                    CliAction::SumNumbers(Some(text.join(" ")))
                }
            }
            Some(Commands::Fib { n }) => CliAction::Fibonacci(n),
        }
    }
}
