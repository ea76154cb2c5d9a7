pub mod add;
pub mod categories;
pub mod clear;
pub mod common;
pub mod delete;
pub mod edit;
pub mod export;
pub mod insights;
pub mod list;
pub mod monthly;
pub mod summary;
pub mod theme;

pub use common::RunOptions;
