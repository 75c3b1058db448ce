//! Plain prompt mode

pub mod plain;
