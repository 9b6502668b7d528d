mod all;
mod dashboard;
mod footer;
mod issues;
mod log;
mod navbar;
mod new_issue;

use super::*;

pub use all::all as render;
