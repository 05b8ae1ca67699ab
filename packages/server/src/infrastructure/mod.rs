//! Infrastructure layer: concrete registry storage and wire DTOs.

pub mod dto;
pub mod repository;
