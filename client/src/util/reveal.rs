//! One-shot scroll reveal for content blocks.
//!
//! DESIGN
//! ======
//! Each registered block walks `Unobserved -> Observing -> Shown`. The first
//! intersecting notification flips it to `Shown` and releases the observer
//! subscription in the same callback, so a block can never be revealed twice
//! and never reverts. The visual side is a pure function of the shown flag.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::EnvError;
use crate::util::subscription::Subscription;

/// Visible-area ratio that counts as "in view".
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// Bottom inset applied to the viewport before intersecting.
pub const DEFAULT_MARGIN_BOTTOM_PX: u32 = 80;

/// Fade/slide transition length.
pub const REVEAL_DURATION_MS: u32 = 500;

/// Delay added per position when staggering a list of blocks.
pub const STAGGER_STEP_MS: u32 = 80;

const REVEAL_BASE_CLASS: &str = "transform-gpu transition-all ease-out will-change-[opacity,transform]";
const REVEAL_SHOWN_CLASS: &str = "opacity-100 translate-y-0";
const REVEAL_HIDDEN_CLASS: &str = "opacity-0 translate-y-3";

/// Observation parameters for a block.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub margin_bottom_px: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD, margin_bottom_px: DEFAULT_MARGIN_BOTTOM_PX }
    }
}

impl RevealConfig {
    /// CSS margin string shrinking the viewport at the bottom edge.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.margin_bottom_px)
    }
}

/// Viewport intersection facility.
pub trait IntersectionSource {
    type Target: ?Sized;

    /// Start delivering intersection booleans for `target` to `on_change`
    /// until the returned subscription is cancelled.
    fn observe(
        &self,
        target: &Self::Target,
        config: &RevealConfig,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Subscription, EnvError>;
}

/// Lifecycle position of a registered block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Unobserved,
    Observing,
    Shown,
}

#[derive(Debug, Default)]
struct Block {
    phase: RevealPhase,
    subscription: Option<Subscription>,
}

/// Owner of a block's observation. Dropping it unregisters.
#[derive(Debug)]
pub struct RevealHandle {
    block: Rc<RefCell<Block>>,
}

impl RevealHandle {
    pub fn phase(&self) -> RevealPhase {
        self.block.borrow().phase
    }

    pub fn is_shown(&self) -> bool {
        self.phase() == RevealPhase::Shown
    }

    /// Whether an observation subscription is still held.
    pub fn is_observing(&self) -> bool {
        self.phase() == RevealPhase::Observing
    }

    /// Stop observing without revealing. Idempotent; a shown block stays shown.
    pub fn unregister(&self) {
        let subscription = {
            let mut block = self.block.borrow_mut();
            if block.phase == RevealPhase::Observing {
                block.phase = RevealPhase::Unobserved;
            }
            block.subscription.take()
        };
        if let Some(mut subscription) = subscription {
            subscription.cancel();
        }
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.unregister();
    }
}

/// Begin observing `target`; `on_shown` runs once, on the first intersection.
///
/// A missing target (block unmounted before registration) or a failing
/// source yields a handle that never reveals.
pub fn register<S>(
    source: &S,
    target: Option<&S::Target>,
    config: &RevealConfig,
    on_shown: impl FnOnce() + 'static,
) -> RevealHandle
where
    S: IntersectionSource + ?Sized,
{
    let block = Rc::new(RefCell::new(Block::default()));
    let handle = RevealHandle { block: Rc::clone(&block) };
    let Some(target) = target else {
        return handle;
    };

    let weak = Rc::downgrade(&block);
    let mut on_shown = Some(on_shown);
    let on_change = Box::new(move |intersecting: bool| {
        if !intersecting {
            return;
        }
        let Some(block) = weak.upgrade() else {
            return;
        };
        let subscription = {
            let mut block = block.borrow_mut();
            if block.phase != RevealPhase::Observing {
                return;
            }
            block.phase = RevealPhase::Shown;
            block.subscription.take()
        };
        if let Some(mut subscription) = subscription {
            subscription.cancel();
        }
        if let Some(on_shown) = on_shown.take() {
            on_shown();
        }
    });

    block.borrow_mut().phase = RevealPhase::Observing;
    match source.observe(target, config, on_change) {
        Ok(mut subscription) => {
            let mut slot = block.borrow_mut();
            if slot.phase == RevealPhase::Observing {
                slot.subscription = Some(subscription);
            } else {
                // Shown during `observe` itself; nothing left to watch for.
                drop(slot);
                subscription.cancel();
            }
        }
        Err(e) => {
            log::warn!("reveal: observation unavailable: {e}");
            block.borrow_mut().phase = RevealPhase::Unobserved;
        }
    }
    handle
}

/// Classes for a block in the given state.
pub fn reveal_class(shown: bool) -> String {
    let state = if shown { REVEAL_SHOWN_CLASS } else { REVEAL_HIDDEN_CLASS };
    format!("{REVEAL_BASE_CLASS} {state}")
}

/// Inline style carrying the transition length and the block's start delay.
pub fn reveal_style(delay_ms: u32) -> String {
    format!("transition-duration: {REVEAL_DURATION_MS}ms; transition-delay: {delay_ms}ms")
}

/// Start delay for the block at `index` in a staggered list.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(STAGGER_STEP_MS)
}

/// `IntersectionObserver`-backed source.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserIntersections;

#[cfg(feature = "hydrate")]
impl IntersectionSource for BrowserIntersections {
    type Target = web_sys::Element;

    fn observe(
        &self,
        target: &web_sys::Element,
        config: &RevealConfig,
        mut on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Subscription, EnvError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.is_intersecting());
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin());

        let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| EnvError::Observer(EnvError::js_message(&e)))?;
        observer.observe(target);

        Ok(Subscription::new(move || {
            observer.disconnect();
            // Cancellation usually happens inside the callback itself; free the
            // closure on the next turn instead of while it is running.
            gloo_timers::callback::Timeout::new(0, move || drop(callback)).forget();
        }))
    }
}
