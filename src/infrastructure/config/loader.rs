//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::config::Config;

/// 최우선 설정 파일 경로를 지정하는 환경변수.
pub const CONFIG_ENV: &str = "CONTACTBOT_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    load_from_paths(config_paths())
}

/// 주어진 경로를 순서대로 병합한다. 없는 파일은 건너뛴다.
pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            debug!(path = %path.display(), "config file not present");
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        info!(path = %path.display(), "loaded config");
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/contactbot/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("contactbot").join("config.json"));
    }

    paths.push(PathBuf::from(".contactbot/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_present_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let low = dir.path().join("low.json");
        let high = dir.path().join("high.json");
        let missing = dir.path().join("missing.json");
        fs::write(&low, r#"{"repl":{"prompt":"low> ","welcome":false}}"#).unwrap();
        fs::write(&high, r#"{"repl":{"prompt":"high> "}}"#).unwrap();

        let loaded = load_from_paths(vec![low.clone(), missing, high.clone()]).unwrap();
        assert_eq!(loaded.searched_paths.len(), 3);
        assert_eq!(loaded.loaded_paths, vec![low, high]);
        assert_eq!(loaded.config.prompt(), "high> ");
        assert!(!loaded.config.welcome());
    }

    #[test]
    fn invalid_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();

        let err = load_from_paths(vec![bad.clone()]).unwrap_err();
        assert!(format!("{err:#}").contains(&bad.display().to_string()));
    }

    #[test]
    fn duplicate_paths_are_dropped() {
        let paths = dedup_paths(vec![
            PathBuf::from("a.json"),
            PathBuf::from("b.json"),
            PathBuf::from("a.json"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
    }
}
