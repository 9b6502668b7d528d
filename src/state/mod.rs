//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - Navigation types (View, Focus, NavLink)
//! - Form types (IssueForm, FieldErrors, SubmissionStatus) and validation
//! - Transient notices shown in the footer
//! - State error handling

mod error;
mod form;
mod navigation;
mod notice;
mod state_impl;

pub use error::StateError;
pub use form::{validate, FieldErrors, FormField, IssueForm, SubmissionStatus};
pub use navigation::{nav_links, Focus, NavLink, View};
pub use notice::{Notice, NoticeKind};
pub use state_impl::State;
