//! Data models for EduLibrary

pub mod enums;
pub mod resource;
pub mod seed;

// Re-export commonly used types
pub use enums::{Category, SkillLevel};
pub use resource::{NewResource, Resource, ResourcePayload};
