//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use crate::application::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    /// 파일에 적힌 그대로의 병합 값
    pub raw: Config,
    /// 기본값까지 반영한 실제 적용 값
    pub effective: EffectiveSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub prompt: String,
    pub welcome: bool,
    pub color: bool,
    pub seed_standard_levels: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = loaded.config;
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            effective: EffectiveSettings {
                prompt: config.prompt(),
                welcome: config.welcome(),
                color: config.color(),
                seed_standard_levels: config.seed_standard_levels(),
            },
            raw: config,
        }
    }
}
