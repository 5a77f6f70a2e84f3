//! Infrastructure layer
//! 파일시스템/환경변수와 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
