//! 로그 파일을 줄 단위로 읽는 `LogSource` 구현.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::application::ports::{LoadedLogs, LogSource};
use crate::domain::log_record::parse_log_line;

/// UTF-8 텍스트 로그 파일 어댑터.
pub struct FileLogSource;

impl LogSource for FileLogSource {
    fn load(&self, path: &Path) -> Result<LoadedLogs> {
        if !path.exists() {
            bail!("file not found: {}", path.display());
        }
        if !path.is_file() {
            bail!("not a file: {}", path.display());
        }

        let file = File::open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        read_logs(BufReader::new(file))
            .with_context(|| format!("failed to read log file {}", path.display()))
    }
}

/// 빈 줄은 조용히 건너뛰고, 형식이 깨진 줄은 세기만 한다.
fn read_logs<R: BufRead>(reader: R) -> Result<LoadedLogs> {
    let mut loaded = LoadedLogs::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_log_line(&line) {
            Ok(record) => loaded.records.push(record),
            Err(err) => {
                debug!(line = idx + 1, error = %err, "skipping log line");
                loaded.malformed += 1;
            }
        }
    }
    Ok(loaded)
}
