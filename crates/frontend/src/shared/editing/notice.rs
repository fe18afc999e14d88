use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Status line shown above a form or grid.
/// `id` tells two notices with the same text apart, so a timer can clear only its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Remembers which success notice already has an expiry timer, so each gets exactly one
#[derive(Debug, Default)]
pub struct NoticeExpiry {
    last_timed: Cell<u64>,
}

impl NoticeExpiry {
    /// Id of a success notice that still needs its timer
    pub fn needs_timer(&self, notice: Option<&Notice>) -> Option<u64> {
        let notice = notice.filter(|n| n.is_success())?;
        if self.last_timed.get() == notice.id {
            return None;
        }
        self.last_timed.set(notice.id);
        Some(notice.id)
    }
}
