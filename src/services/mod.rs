//! Glue between the list view and its collaborators.

use crate::list_view::{Toast, ToastVariant};

pub mod list_view;

/// Shows user-facing notifications. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, toast: &Toast);
}

/// Record-creation surface.
pub trait CreateAccountForm {
    /// Presents the form; `Some(true)` when a record was created.
    fn open(&mut self) -> Option<bool>;
}

/// Notifier that only writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: &Toast) {
        match toast.variant {
            ToastVariant::Success => log::info!("{} {}", toast.title, toast.message),
            ToastVariant::Error => log::warn!("{} {}", toast.title, toast.message),
        }
    }
}
