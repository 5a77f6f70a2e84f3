//! 애플리케이션 유스케이스 모음.

pub mod analyze_logs;
pub mod inspect_config;
