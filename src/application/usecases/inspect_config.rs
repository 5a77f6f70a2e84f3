//! 병합된 설정과 탐색 경로를 보여 주는 유스케이스.

use anyhow::Result;

use crate::application::ports::ConfigRepository;

pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    /// `contactbot config` 출력용 pretty JSON.
    pub fn execute(&self) -> Result<String> {
        self.config_repo.inspect_pretty_json()
    }
}
