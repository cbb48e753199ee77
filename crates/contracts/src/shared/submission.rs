//! Submit-button and toast bookkeeping shared by the inquiry and review forms.
//!
//! One call may be in flight at a time. Responses that arrive after the view
//! moved on (cancelled ticket) are dropped, and a dismiss timer only clears
//! the notice it was started for.

use serde::{Deserialize, Serialize};

/// Время показа уведомления
pub const NOTICE_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pending: Option<SubmitTicket>,
    last_ticket: u64,
    notice: Option<Notice>,
    last_notice: u64,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Кнопка отправки заблокирована, пока идёт запрос
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Start a submission; `None` while another one is still pending.
    pub fn begin(&mut self) -> Option<SubmitTicket> {
        if self.pending.is_some() {
            return None;
        }
        self.last_ticket += 1;
        let ticket = SubmitTicket(self.last_ticket);
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Finish the call. Returns the id of the shown notice, or `None` when the
    /// ticket is stale and the response must be ignored.
    pub fn complete(
        &mut self,
        ticket: SubmitTicket,
        kind: NoticeKind,
        message: impl Into<String>,
    ) -> Option<NoticeId> {
        if self.pending != Some(ticket) {
            return None;
        }
        self.pending = None;
        Some(self.notify(kind, message))
    }

    /// Новое уведомление вытесняет предыдущее
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) -> NoticeId {
        self.last_notice += 1;
        let id = NoticeId(self.last_notice);
        self.notice = Some(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: NoticeId) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }

    /// Forget the in-flight call (navigation away, product switch).
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
