//! API 핸들러 모듈.

pub mod activities;
pub mod index;
