//! Cancellable handle shared by timers and viewport observers.
//!
//! DESIGN
//! ======
//! Every callback registration in this crate returns a [`Subscription`]. The
//! handle owns the teardown closure, runs it at most once, and runs it on drop
//! if nobody did so explicitly. That keeps "no callback after teardown" a
//! property of ownership instead of a convention callers must remember.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

/// Owned registration of a callback with some event facility.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a teardown closure.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Whether the teardown closure is still pending.
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    /// Release the registration. Calling this more than once is a no-op.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}
