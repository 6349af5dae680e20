use crate::ports;
use crate::types::notification::Notification;

use std::cell::Cell;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTicket(u64);

/// Drives the shared message area. Each `show` supersedes the previous
/// notification; a pending hide only applies to the notification it was
/// armed for.
#[derive(Debug)]
pub struct Notifier<T> {
    time: T,
    ttl: Duration,
    generation: Cell<u64>,
}

impl<T> Notifier<T>
where
    T: ports::TimeProvider,
{
    pub fn new(time: T, ttl: Duration) -> Self {
        Self {
            time,
            ttl,
            generation: Cell::new(0),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn show<P: ports::Page>(&self, page: &P, notification: Notification) -> NotificationTicket {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        page.show_notification(&notification);
        NotificationTicket(generation)
    }

    pub fn is_current(&self, ticket: NotificationTicket) -> bool {
        self.generation.get() == ticket.0
    }

    /// Waits out the time-to-live, then hides the area unless a newer
    /// notification replaced this one.
    pub async fn expire<P: ports::Page>(&self, page: &P, ticket: NotificationTicket) {
        self.time.sleep(self.ttl).await;
        if self.is_current(ticket) {
            page.hide_notification();
        } else {
            log::debug!("notification superseded before expiry");
        }
    }
}
