//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64url, random bytes)
//! - Password hashing (Argon2id with tunable cost)
//! - Password entropy estimation
//! - Bearer token extraction from `Authorization` headers
//! - Remote image metadata probing (HEAD requests)

pub mod bearer;
pub mod crypto;
pub mod entropy;
pub mod image_probe;
pub mod password;
