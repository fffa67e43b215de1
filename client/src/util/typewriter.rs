//! Character-by-character headline reveal.
//!
//! A [`Typewriter`] is the pure counter; [`start_typewriter`] drives it from a
//! repeating timer and stops the timer the moment the last character lands.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::EnvError;
use crate::util::subscription::Subscription;

/// Delay between emitted characters.
pub const TYPEWRITER_INTERVAL_MS: u32 = 80;

/// Progress through a fixed message, counted in characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    message: String,
    emitted: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let total = message.chars().count();
        Self { message, emitted: 0, total }
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.emitted >= self.total
    }

    /// The first `emitted` characters of the message.
    pub fn visible(&self) -> &str {
        let end = self
            .message
            .char_indices()
            .nth(self.emitted)
            .map_or(self.message.len(), |(i, _)| i);
        &self.message[..end]
    }

    /// Emit one more character. Returns `None` once the message is complete.
    pub fn tick(&mut self) -> Option<&str> {
        if self.is_complete() {
            return None;
        }
        self.emitted += 1;
        Some(self.visible())
    }

    /// Jump straight to the full message.
    pub fn finish(&mut self) {
        self.emitted = self.total;
    }
}

/// Repeating timer facility.
pub trait TickSource {
    /// Call `tick` every `interval_ms` until the subscription is cancelled.
    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Result<Subscription, EnvError>;
}

#[derive(Debug)]
struct Run {
    typewriter: Typewriter,
    timer: Option<Subscription>,
}

/// Owner of a running typewriter. Dropping it stops the timer.
#[derive(Debug)]
pub struct TypewriterHandle {
    run: Rc<RefCell<Run>>,
}

impl TypewriterHandle {
    pub fn visible(&self) -> String {
        self.run.borrow().typewriter.visible().to_owned()
    }

    pub fn emitted(&self) -> usize {
        self.run.borrow().typewriter.emitted()
    }

    pub fn is_complete(&self) -> bool {
        self.run.borrow().typewriter.is_complete()
    }

    /// Whether the timer is still scheduled.
    pub fn is_running(&self) -> bool {
        self.run.borrow().timer.as_ref().is_some_and(Subscription::is_active)
    }

    /// Cancel the timer, leaving the emitted count where it is. Idempotent.
    pub fn stop(&self) {
        let timer = self.run.borrow_mut().timer.take();
        if let Some(mut timer) = timer {
            timer.cancel();
        }
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start revealing `message`, calling `on_update` with each new prefix.
///
/// If the timer cannot be scheduled the full message is emitted at once.
pub fn start_typewriter<S>(source: &S, message: &str, on_update: impl Fn(&str) + 'static) -> TypewriterHandle
where
    S: TickSource + ?Sized,
{
    let run = Rc::new(RefCell::new(Run { typewriter: Typewriter::new(message), timer: None }));
    let handle = TypewriterHandle { run: Rc::clone(&run) };
    if run.borrow().typewriter.is_complete() {
        return handle;
    }

    let on_update = Rc::new(on_update);
    let on_tick = Rc::clone(&on_update);
    let weak = Rc::downgrade(&run);
    let tick = Box::new(move || {
        let Some(run) = weak.upgrade() else {
            return;
        };
        let (text, finished) = {
            let mut run = run.borrow_mut();
            let Some(text) = run.typewriter.tick().map(str::to_owned) else {
                return;
            };
            let finished = if run.typewriter.is_complete() { run.timer.take() } else { None };
            (text, finished)
        };
        if let Some(mut timer) = finished {
            timer.cancel();
        }
        (*on_tick)(&text);
    });

    match source.every(TYPEWRITER_INTERVAL_MS, tick) {
        Ok(mut timer) => {
            let mut slot = run.borrow_mut();
            if slot.typewriter.is_complete() {
                // Every character landed during `every` itself.
                drop(slot);
                timer.cancel();
            } else {
                slot.timer = Some(timer);
            }
        }
        Err(e) => {
            log::warn!("typewriter: timer unavailable, showing full text: {e}");
            run.borrow_mut().typewriter.finish();
            (*on_update)(message);
        }
    }
    handle
}

/// `gloo_timers` interval source.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTicks;

#[cfg(feature = "hydrate")]
impl TickSource for BrowserTicks {
    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Result<Subscription, EnvError> {
        let interval = gloo_timers::callback::Interval::new(interval_ms, tick);
        Ok(Subscription::new(move || {
            let closure = interval.cancel();
            // The last tick cancels its own interval; free the closure after it returns.
            gloo_timers::callback::Timeout::new(0, move || drop(closure)).forget();
        }))
    }
}
