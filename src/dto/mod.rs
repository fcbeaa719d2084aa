//! DTO modules that bridge services with templates and APIs.

pub mod catalog;
pub mod navigation;
