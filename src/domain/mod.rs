//! Domain layer
//! 연락처/명령/로그 규칙을 외부 의존성 없이 표현한다.

pub mod command;
pub mod contact;
pub mod fibonacci;
pub mod log_record;
pub mod numbers;
