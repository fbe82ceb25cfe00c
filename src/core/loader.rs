use std::time::Duration;
use tokio::sync::oneshot;

/// UI-level stopwatch for in-flight loads. Starting a load arms a timer;
/// if the handle is not stopped before the budget elapses, the timeout
/// callback runs exactly once. The underlying request is never aborted,
/// the timer only decides whether to warn the user.
#[derive(Debug, Clone)]
pub struct LoadCoordinator {
    budget: Duration,
}

/// Token for one tracked load. Stopping (or dropping) it disarms the timer.
#[derive(Debug)]
pub struct LoadHandle {
    done: oneshot::Sender<()>,
}

impl LoadCoordinator {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    /// Must be called from within a tokio runtime.
    pub fn start_load<F>(&self, on_timeout: F) -> LoadHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let (done, mut cancelled) = oneshot::channel::<()>();
        let budget = self.budget;

        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(budget) => {
                    tracing::debug!("load exceeded its {:?} budget", budget);
                    on_timeout();
                }
                _ = &mut cancelled => {}
            }
        });

        LoadHandle { done }
    }
}

impl LoadHandle {
    pub fn stop_load(self) {
        let _ = self.done.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_timeout_fires_when_load_outlives_budget() {
        let coordinator = LoadCoordinator::new(Duration::from_millis(20));
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&fired);
        let handle = coordinator.start_load(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        handle.stop_load();
    }

    #[tokio::test]
    async fn test_stopping_before_budget_suppresses_timeout() {
        let coordinator = LoadCoordinator::new(Duration::from_millis(50));
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&fired);
        let handle = coordinator.start_load(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        handle.stop_load();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dropping_the_handle_also_disarms_the_timer() {
        let coordinator = LoadCoordinator::new(Duration::from_millis(50));
        let fired = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&fired);
        let handle = coordinator.start_load(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        drop(handle);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
