//! contactbot library root.
//! Clean Architecture 계층(domain/application/infrastructure/interface)을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::AppComposition;

/// 표준 입출력으로 대화형 세션을 실행한다.
pub fn run_interactive() -> Result<()> {
    let composition = AppComposition::default();
    interface::cli::run_repl(&composition)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
