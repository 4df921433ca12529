pub mod config;
pub mod contact;
pub mod files;
pub mod gpa;
pub mod report;
