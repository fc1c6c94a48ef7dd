//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the capture engine and repositories into use-case APIs.
//! - Keep CLI/FFI layers decoupled from storage details.

pub mod board_service;
pub mod capture_service;
