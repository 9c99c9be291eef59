// src/notices.rs

use crate::validation::SubmissionRejection;

/// Segundos que permanece visible un aviso.
pub const NOTICE_SECONDS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    RequiredMissing,
    TooFewAnswers,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub shown_at: f64,
}

impl Notice {
    pub fn expires_at(&self) -> f64 {
        self.shown_at + NOTICE_SECONDS
    }
}

/// Avisos temporales. Cada uno caduca por su cuenta; si se repite uno del
/// mismo tipo se apila en vez de sustituir al anterior.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>, now: f64) {
        self.items.push(Notice {
            kind,
            text: text.into(),
            shown_at: now,
        });
    }

    pub fn push_rejection(&mut self, rejection: &SubmissionRejection, now: f64) {
        let kind = match rejection {
            SubmissionRejection::RequiredUnanswered { .. } => NoticeKind::RequiredMissing,
            SubmissionRejection::TooFewAnswered { .. } => NoticeKind::TooFewAnswers,
        };
        self.push(kind, rejection.to_string(), now);
    }

    /// Quita los caducados y devuelve los que siguen visibles.
    pub fn active(&mut self, now: f64) -> &[Notice] {
        self.items.retain(|n| n.expires_at() > now);
        &self.items
    }

    /// Segundos hasta que caduque el próximo aviso.
    pub fn next_expiry_in(&self, now: f64) -> Option<f64> {
        self.items
            .iter()
            .map(|n| (n.expires_at() - now).max(0.0))
            .reduce(f64::min)
    }
}
