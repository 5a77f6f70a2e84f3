//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;

use crate::application::config::Config;
use crate::domain::log_record::LogRecord;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 파싱된 로그와 건너뛴 줄 수.
#[derive(Debug, Clone, Default)]
pub struct LoadedLogs {
    pub records: Vec<LogRecord>,
    pub malformed: usize,
}

/// 로그 원본을 읽어 레코드로 변환하는 포트.
pub trait LogSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<LoadedLogs>;
}
