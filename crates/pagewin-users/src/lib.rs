//! The `users` query over pagewin.
//!
//! A thin serving layer: it owns the `User` output shape, the sample
//! dataset and configuration loading, and delegates every decision to
//! [`pagewin::Paginator`].

pub mod cli;
pub mod config;
pub mod dataset;
pub mod user;

pub use config::Config;
pub use dataset::{load_records, parse_records, sample_users};
pub use user::{users, User, UsersArgs};
