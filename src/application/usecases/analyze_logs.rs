//! 로그 파일 레벨별 집계 유스케이스.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crate::application::ports::{ConfigRepository, LogSource};
use crate::domain::log_record::{LogRecord, count_by_level, filter_by_level, ordered_levels};

/// 출력 순서가 정해진 집계 결과.
#[derive(Debug, Clone)]
pub struct LogReport {
    pub counts: Vec<(String, usize)>,
    pub malformed: usize,
    pub details: Option<LevelDetails>,
}

/// 사용자가 지정한 레벨의 상세 레코드.
#[derive(Debug, Clone)]
pub struct LevelDetails {
    pub level: String,
    pub records: Vec<LogRecord>,
}

pub struct AnalyzeLogsUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub log_source: &'a dyn LogSource,
}

impl<'a> AnalyzeLogsUseCase<'a> {
    pub fn execute(&self, path: &Path, level: Option<&str>) -> Result<LogReport> {
        let config = self.config_repo.load()?;
        let loaded = self.log_source.load(path)?;
        if loaded.malformed > 0 {
            warn!(path = %path.display(), malformed = loaded.malformed, "skipped malformed log lines");
        }

        let counts = count_by_level(&loaded.records, config.seed_standard_levels());
        let ordered = ordered_levels(&counts)
            .into_iter()
            .map(|lvl| (lvl.to_string(), counts.get(lvl).copied().unwrap_or(0)))
            .collect();

        // 빈 문자열 레벨은 지정하지 않은 것으로 본다.
        let details = level
            .filter(|lvl| !lvl.trim().is_empty())
            .map(|lvl| LevelDetails {
                level: lvl.to_uppercase(),
                records: filter_by_level(&loaded.records, lvl)
                    .into_iter()
                    .cloned()
                    .collect(),
            });

        Ok(LogReport {
            counts: ordered,
            malformed: loaded.malformed,
            details,
        })
    }
}
