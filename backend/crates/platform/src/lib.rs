//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt with a tunable cost factor)
//! - Signing secret holder (zeroized, never printed)
//! - Bearer token extraction from HTTP headers

pub mod bearer;
pub mod password;
pub mod secret;
