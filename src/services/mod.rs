// src/services/mod.rs
pub mod backend;
pub mod formatter;
pub mod networked;
pub mod offline;
pub mod transcript;
