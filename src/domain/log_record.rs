//! `DATE TIME LEVEL MESSAGE` 형식 로그 한 줄과 레벨 집계 규칙.

use std::collections::HashMap;

use thiserror::Error;

/// 기본 출력 순서이자 시드 대상 레벨.
pub const STANDARD_LEVELS: [&str; 4] = ["INFO", "DEBUG", "ERROR", "WARNING"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub date: String,
    pub time: String,
    /// 대문자로 정규화된 레벨
    pub level: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogParseError {
    #[error("empty line")]
    Empty,
    #[error("malformed log line: {0:?}")]
    Malformed(String),
}

/// 공백 기준 최대 4조각으로 나눈다. 메시지는 나머지 전체다.
pub fn parse_log_line(line: &str) -> Result<LogRecord, LogParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(LogParseError::Empty);
    }

    let mut rest = line;
    let mut head = Vec::with_capacity(3);
    for _ in 0..3 {
        let Some((token, tail)) = rest.split_once(char::is_whitespace) else {
            return Err(LogParseError::Malformed(line.to_string()));
        };
        head.push(token);
        rest = tail.trim_start();
    }
    if rest.is_empty() {
        return Err(LogParseError::Malformed(line.to_string()));
    }

    Ok(LogRecord {
        date: head[0].to_string(),
        time: head[1].to_string(),
        level: head[2].to_uppercase(),
        message: rest.to_string(),
    })
}

/// 레벨이 일치하는 레코드만 남긴다(대소문자 무시).
pub fn filter_by_level<'a>(records: &'a [LogRecord], level: &str) -> Vec<&'a LogRecord> {
    let level = level.to_uppercase();
    records.iter().filter(|r| r.level == level).collect()
}

/// 레벨별 건수. `seed_standard`면 표준 레벨을 0으로 먼저 채운다.
pub fn count_by_level(records: &[LogRecord], seed_standard: bool) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    if seed_standard {
        for level in STANDARD_LEVELS {
            counts.insert(level.to_string(), 0);
        }
    }

    for record in records {
        if record.level.is_empty() {
            continue;
        }
        *counts.entry(record.level.clone()).or_default() += 1;
    }
    counts
}

/// 표준 레벨을 고정 순서로, 나머지는 알파벳 순으로 정렬한다.
pub fn ordered_levels(counts: &HashMap<String, usize>) -> Vec<&str> {
    let mut ordered: Vec<&str> = STANDARD_LEVELS
        .iter()
        .copied()
        .filter(|level| counts.contains_key(*level))
        .collect();

    let mut extra: Vec<&str> = counts
        .keys()
        .map(String::as_str)
        .filter(|level| !STANDARD_LEVELS.contains(level))
        .collect();
    extra.sort_unstable();

    ordered.extend(extra);
    ordered
}
