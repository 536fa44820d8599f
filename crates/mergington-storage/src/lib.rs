//! # mergington-storage
//!
//! 활동 디렉토리 저장소 어댑터.
//! 프로세스 수명 동안 유지되는 인메모리 디렉토리를 제공한다 (영속화 없음).
//!
//! ## 모듈
//! - `memory`: 인메모리 디렉토리 (ActivityDirectory 구현)

pub mod memory;

pub use memory::MemoryDirectory;
