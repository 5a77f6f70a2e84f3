//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::ConfigRepository;
use crate::application::usecases::analyze_logs::AnalyzeLogsUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::infrastructure::adapters::{FileLogSource, JsonConfigRepository};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: Box<dyn ConfigRepository>,
    log_source: FileLogSource,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_config_repo(Box::new(JsonConfigRepository))
    }
}

impl AppComposition {
    /// 설정 저장소를 외부에서 주입한다.
    pub fn with_config_repo(config_repo: Box<dyn ConfigRepository>) -> Self {
        Self {
            config_repo,
            log_source: FileLogSource,
        }
    }

    /// 병합된 설정을 로딩한다.
    pub fn config(&self) -> Result<Config> {
        self.config_repo.load()
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: self.config_repo.as_ref(),
        }
    }

    /// 로그 집계 유스케이스를 생성한다.
    pub fn analyze_logs_usecase(&self) -> AnalyzeLogsUseCase<'_> {
        AnalyzeLogsUseCase {
            config_repo: self.config_repo.as_ref(),
            log_source: &self.log_source,
        }
    }
}
