//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROMPT: &str = "Enter a command: ";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 대화형 세션 설정
    #[serde(default)]
    pub repl: ReplConfig,
    /// `logs` 분석기 설정
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReplConfig {
    /// 입력 프롬프트 문자열
    pub prompt: Option<String>,
    /// 시작 인사 출력 여부(기본 true)
    pub welcome: Option<bool>,
    /// TTY일 때 색상 출력 여부(기본 true)
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogsConfig {
    /// INFO/ERROR/DEBUG/WARNING을 0건으로 미리 채울지 여부(기본 true)
    pub seed_standard_levels: Option<bool>,
}

impl Config {
    pub fn prompt(&self) -> String {
        self.repl
            .prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }

    pub fn welcome(&self) -> bool {
        self.repl.welcome.unwrap_or(true)
    }

    pub fn color(&self) -> bool {
        self.repl.color.unwrap_or(true)
    }

    pub fn seed_standard_levels(&self) -> bool {
        self.logs.seed_standard_levels.unwrap_or(true)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.repl.merge_from(other.repl);
        self.logs.merge_from(other.logs);
    }
}

impl ReplConfig {
    pub fn merge_from(&mut self, other: ReplConfig) {
        if other.prompt.is_some() {
            self.prompt = other.prompt;
        }
        if other.welcome.is_some() {
            self.welcome = other.welcome;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
    }
}

impl LogsConfig {
    pub fn merge_from(&mut self, other: LogsConfig) {
        if other.seed_standard_levels.is_some() {
            self.seed_standard_levels = other.seed_standard_levels;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::default();
        assert_eq!(config.prompt(), DEFAULT_PROMPT);
        assert!(config.welcome());
        assert!(config.color());
        assert!(config.seed_standard_levels());
    }

    #[test]
    fn later_values_win_field_by_field() {
        let mut merged: Config =
            serde_json::from_str(r#"{"repl":{"prompt":"> ","color":false}}"#).unwrap();
        let incoming: Config =
            serde_json::from_str(r#"{"repl":{"color":true},"logs":{"seed_standard_levels":false}}"#)
                .unwrap();
        merged.merge_from(incoming);

        assert_eq!(merged.prompt(), "> ");
        assert!(merged.color());
        assert!(!merged.seed_standard_levels());
    }
}
