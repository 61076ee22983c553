//! Value Object Module

pub mod identity;
pub mod login;
pub mod user_password;
