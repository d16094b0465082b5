//! Primary/secondary notifier composition

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::dispatch::Delivery;
use crate::domain::notification::Toast;

/// Tries `primary`, then `secondary` if the primary fails
pub struct FallbackNotifier<P: Notifier, S: Notifier> {
    primary: P,
    secondary: S,
}

impl<P: Notifier, S: Notifier> FallbackNotifier<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait]
impl<P: Notifier, S: Notifier> Notifier for FallbackNotifier<P, S> {
    async fn notify(&self, toast: &Toast) -> Result<Delivery, NotificationError> {
        let primary_error = match self.primary.notify(toast).await {
            Ok(delivery) => return Ok(delivery),
            Err(e) => e,
        };
        log::warn!("Primary notifier failed, falling back: {}", primary_error);

        match self.secondary.notify(toast).await {
            Ok(delivery) => {
                log::info!("Fallback notification sent via {}", delivery.mechanism);
                Ok(delivery)
            }
            Err(e) => {
                log::error!("Fallback notifier also failed: {}", e);
                Err(NotificationError::SendFailed(format!(
                    "{}; fallback: {}",
                    primary_error, e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubNotifier {
        mechanism: &'static str,
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    impl StubNotifier {
        fn new(mechanism: &'static str, fail: bool) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    mechanism,
                    fail,
                    calls: Arc::clone(&calls),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl Notifier for StubNotifier {
        async fn notify(&self, _toast: &Toast) -> Result<Delivery, NotificationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(NotificationError::SendFailed(format!("{} broke", self.mechanism)))
            } else {
                Ok(Delivery::via(self.mechanism))
            }
        }
    }

    fn toast() -> Toast {
        Toast {
            title: "t".into(),
            body: "b".into(),
        }
    }

    #[tokio::test]
    async fn primary_success_skips_secondary() {
        let (primary, _) = StubNotifier::new("toast", false);
        let (secondary, secondary_calls) = StubNotifier::new("notify-rust", false);
        let notifier = FallbackNotifier::new(primary, secondary);

        let delivery = notifier.notify(&toast()).await.unwrap();

        assert_eq!(delivery.mechanism, "toast");
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn primary_failure_uses_secondary() {
        let (primary, _) = StubNotifier::new("toast", true);
        let (secondary, secondary_calls) = StubNotifier::new("notify-rust", false);
        let notifier = FallbackNotifier::new(primary, secondary);

        let delivery = notifier.notify(&toast()).await.unwrap();

        assert_eq!(delivery.mechanism, "notify-rust");
        assert_eq!(secondary_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn both_failing_reports_both() {
        let (primary, _) = StubNotifier::new("toast", true);
        let (secondary, _) = StubNotifier::new("notify-rust", true);
        let notifier = FallbackNotifier::new(primary, secondary);

        let err = notifier.notify(&toast()).await.unwrap_err().to_string();

        assert!(err.contains("toast broke"));
        assert!(err.contains("notify-rust broke"));
    }
}
