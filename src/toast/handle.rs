// SPDX-License-Identifier: MPL-2.0
//! Cloneable accessor for raising toasts from anywhere in the application.
//!
//! The manager is owned by the application root; layers that need to raise
//! notifications receive a [`ToastHandle`] instead of the manager itself.
//! Commands are queued on a channel and applied by the manager on the next
//! tick. Using a handle whose manager is gone is a usage error and fails
//! loudly with [`Error::Handle`] rather than silently dropping the toast.

use super::entry::ToastEntry;
use crate::error::{Error, Result};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone)]
pub(crate) enum Command {
    Add(ToastEntry),
    Remove(String),
}

/// A cheap, cloneable handle to a [`Toasts`](super::Toasts) manager.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    tx: UnboundedSender<Command>,
}

impl ToastHandle {
    pub(crate) fn new(tx: UnboundedSender<Command>) -> Self {
        Self { tx }
    }

    /// Queues a toast to be added on the manager's next tick.
    pub fn add_toast(&self, entry: ToastEntry) -> Result<()> {
        self.tx.send(Command::Add(entry)).map_err(|_| Error::Handle)
    }

    /// Queues a removal for the manager's next tick. Removing an absent id
    /// is a no-op on the manager side.
    pub fn remove_toast(&self, id: impl Into<String>) -> Result<()> {
        self.tx
            .send(Command::Remove(id.into()))
            .map_err(|_| Error::Handle)
    }
}
