//! Shared test utilities

pub mod fixtures;
pub mod logs;
pub mod mock_service;
