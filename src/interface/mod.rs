//! Interface layer
//! CLI 파싱, 대화형 세션, 실행 조립을 담당한다.

pub mod cli;
pub mod composition;
