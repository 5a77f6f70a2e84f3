//! 보조 도구(`logs`/`sum`/`fib`) 출력 렌더링.

use anyhow::{Result, anyhow};
use unicode_width::UnicodeWidthStr;

use crate::application::usecases::analyze_logs::LogReport;
use crate::domain::fibonacci::CachingFibonacci;
use crate::domain::numbers::{generator_numbers, sum_profit};

const LEVEL_TITLE: &str = "Log level";
const COUNT_TITLE: &str = "Count";

/// 레벨별 건수 표와 (선택) 상세 목록을 만든다.
pub fn render_log_report(report: &LogReport) -> String {
    let mut lines = Vec::new();
    if report.malformed > 0 {
        lines.push(format!("skipped malformed lines: {}", report.malformed));
    }

    let level_width = report
        .counts
        .iter()
        .map(|(level, _)| level.width())
        .chain(std::iter::once(LEVEL_TITLE.width()))
        .max()
        .unwrap_or(0);
    let count_width = COUNT_TITLE.width();

    lines.push(format!("{} | {COUNT_TITLE}", pad(LEVEL_TITLE, level_width)));
    lines.push(format!("{}-|-{}", "-".repeat(level_width), "-".repeat(count_width)));
    for (level, count) in &report.counts {
        lines.push(format!("{} | {count}", pad(level, level_width)));
    }

    if let Some(details) = &report.details {
        lines.push(String::new());
        lines.push(format!("Log details for level '{}':", details.level));
        if details.records.is_empty() {
            lines.push("(no entries)".to_string());
        }
        for record in &details.records {
            lines.push(format!("{} {} - {}", record.date, record.time, record.message));
        }
    }

    lines.join("\n")
}

/// 텍스트 안의 숫자 합계를 한 줄로 만든다.
pub fn render_sum(text: &str) -> String {
    let total = sum_profit(text, generator_numbers);
    format!("Total income: {total}")
}

/// 하나의 계산기 인스턴스를 공유해 각 인덱스 값을 출력한다.
pub fn render_fibonacci(indices: &[u64]) -> Result<String> {
    let mut fib = CachingFibonacci::new();
    let mut lines = Vec::with_capacity(indices.len());
    for &n in indices {
        let value = fib
            .get(n)
            .ok_or_else(|| anyhow!("fib({n}) does not fit in 128 bits"))?;
        lines.push(format!("fib({n}) = {value}"));
    }
    Ok(lines.join("\n"))
}

// 표시 폭 기준으로 오른쪽을 공백으로 채운다.
fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - used))
}
