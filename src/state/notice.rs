//! Transient notice types.
//!
//! Notices are fire-and-forget messages shown in the footer for a short
//! time: validation reminders, submission results, and load failures.

/// Specifying the severity of a notice.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A transient footer message. Expires after a fixed number of terminal
/// ticks.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub ticks_remaining: u32,
}

/// Specify notice lifetime in terminal ticks. At the 60ms tick rate this
/// keeps a notice visible for roughly four seconds.
///
pub const NOTICE_TICKS: u32 = 66;

impl Notice {
    /// Return a new notice with a full lifetime.
    ///
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Notice {
            kind,
            text: text.into(),
            ticks_remaining: NOTICE_TICKS,
        }
    }
}
