//! In-memory stand-ins for browser facilities, used by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::error::EnvError;
use crate::util::reveal::{IntersectionSource, RevealConfig};
use crate::util::subscription::Subscription;
use crate::util::theme::ThemeEnv;
use crate::util::typewriter::TickSource;

// =============================================================
// Theme environment
// =============================================================

/// Storage map, ambient signal, and root flag held in memory.
#[derive(Debug, Default)]
pub struct MemoryThemeEnv {
    stored: RefCell<Option<String>>,
    writes: RefCell<Vec<String>>,
    root_dark: Cell<Option<bool>>,
    ambient_dark: bool,
    ambient_queries: Cell<u32>,
    storage_broken: bool,
    ambient_broken: bool,
}

impl MemoryThemeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored(value: &str) -> Self {
        let env = Self::default();
        *env.stored.borrow_mut() = Some(value.to_owned());
        env
    }

    pub fn ambient_dark(mut self, dark: bool) -> Self {
        self.ambient_dark = dark;
        self
    }

    pub fn storage_broken(mut self) -> Self {
        self.storage_broken = true;
        self
    }

    pub fn ambient_broken(mut self) -> Self {
        self.ambient_broken = true;
        self
    }

    /// A fresh session that keeps only the persisted value.
    pub fn reload(&self) -> Self {
        let env = Self::default();
        *env.stored.borrow_mut() = self.stored.borrow().clone();
        env
    }

    pub fn stored(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub fn root_dark(&self) -> Option<bool> {
        self.root_dark.get()
    }

    pub fn ambient_queries(&self) -> u32 {
        self.ambient_queries.get()
    }
}

impl ThemeEnv for MemoryThemeEnv {
    fn read_stored(&self) -> Result<Option<String>, EnvError> {
        if self.storage_broken {
            return Err(EnvError::Storage("disabled".to_owned()));
        }
        Ok(self.stored.borrow().clone())
    }

    fn write_stored(&self, value: &str) -> Result<(), EnvError> {
        if self.storage_broken {
            return Err(EnvError::Storage("disabled".to_owned()));
        }
        *self.stored.borrow_mut() = Some(value.to_owned());
        self.writes.borrow_mut().push(value.to_owned());
        Ok(())
    }

    fn prefers_dark(&self) -> Result<bool, EnvError> {
        self.ambient_queries.set(self.ambient_queries.get() + 1);
        if self.ambient_broken {
            return Err(EnvError::MediaQuery("unsupported".to_owned()));
        }
        Ok(self.ambient_dark)
    }

    fn set_root_dark(&self, enabled: bool) -> Result<(), EnvError> {
        self.root_dark.set(Some(enabled));
        Ok(())
    }
}

// =============================================================
// Callback registry shared by the manual sources
// =============================================================

struct Slot<K, F: ?Sized> {
    key: K,
    callback: Option<Box<F>>,
    cancelled: bool,
}

struct Registry<K, F: ?Sized> {
    slots: RefCell<Vec<Slot<K, F>>>,
}

impl<K, F: ?Sized> Default for Registry<K, F> {
    fn default() -> Self {
        Self { slots: RefCell::new(Vec::new()) }
    }
}

impl<K: 'static, F: ?Sized + 'static> Registry<K, F> {
    fn push(self: &Rc<Self>, key: K, callback: Box<F>) -> Subscription {
        let index = {
            let mut slots = self.slots.borrow_mut();
            slots.push(Slot { key, callback: Some(callback), cancelled: false });
            slots.len() - 1
        };
        let weak: Weak<Self> = Rc::downgrade(self);
        Subscription::new(move || {
            let Some(registry) = weak.upgrade() else {
                return;
            };
            // Take the callback out before dropping it so its destructor never
            // runs while the registry is borrowed.
            let callback = {
                let mut slots = registry.slots.borrow_mut();
                let slot = &mut slots[index];
                slot.cancelled = true;
                slot.callback.take()
            };
            drop(callback);
        })
    }

    /// Invoke every live callback whose key matches. Callbacks run with the
    /// registry unborrowed so they may cancel themselves.
    fn deliver(&self, matches: impl Fn(&K) -> bool, mut invoke: impl FnMut(&mut F)) -> usize {
        let indices: Vec<usize> = self
            .slots
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.cancelled && matches(&slot.key))
            .map(|(i, _)| i)
            .collect();

        let mut delivered = 0;
        for index in indices {
            let callback = self.slots.borrow_mut()[index].callback.take();
            let Some(mut callback) = callback else {
                continue;
            };
            invoke(callback.as_mut());
            delivered += 1;
            let mut slots = self.slots.borrow_mut();
            if !slots[index].cancelled {
                slots[index].callback = Some(callback);
            }
        }
        delivered
    }

    fn live(&self) -> usize {
        self.slots.borrow().iter().filter(|slot| !slot.cancelled).count()
    }
}

// =============================================================
// Intersections
// =============================================================

/// Intersection facility driven by explicit `notify` calls.
#[derive(Default)]
pub struct ManualIntersections {
    registry: Rc<Registry<(String, RevealConfig), dyn FnMut(bool)>>,
    fail: Cell<bool>,
    intersect_on_observe: Cell<bool>,
}

impl ManualIntersections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `observe` calls fail.
    pub fn fail_observe(&self) {
        self.fail.set(true);
    }

    /// Report the target as intersecting from inside `observe`, before the
    /// subscription is handed back.
    pub fn intersect_on_observe(&self) {
        self.intersect_on_observe.set(true);
    }

    /// Deliver one notification to every live observer of `target`.
    /// Returns how many callbacks actually ran.
    pub fn notify(&self, target: &str, intersecting: bool) -> usize {
        self.registry.deliver(|(key, _)| key == target, |cb| cb(intersecting))
    }

    /// Number of observations not yet cancelled.
    pub fn active(&self) -> usize {
        self.registry.live()
    }

    /// Configuration of the most recent observation of `target`.
    pub fn config_for(&self, target: &str) -> Option<RevealConfig> {
        self.registry
            .slots
            .borrow()
            .iter()
            .rev()
            .find(|slot| slot.key.0 == target)
            .map(|slot| slot.key.1.clone())
    }
}

impl IntersectionSource for ManualIntersections {
    type Target = str;

    fn observe(
        &self,
        target: &str,
        config: &RevealConfig,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Subscription, EnvError> {
        if self.fail.get() {
            return Err(EnvError::Observer("unsupported".to_owned()));
        }
        let mut on_change = on_change;
        if self.intersect_on_observe.get() {
            on_change(true);
        }
        Ok(self.registry.push((target.to_owned(), config.clone()), on_change))
    }
}

// =============================================================
// Ticks
// =============================================================

/// Interval facility driven by explicit `fire` calls.
#[derive(Default)]
pub struct ManualTicks {
    registry: Rc<Registry<u32, dyn FnMut()>>,
    fail: Cell<bool>,
    fire_on_start: Cell<u32>,
}

impl ManualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_start(&self) {
        self.fail.set(true);
    }

    /// Run each newly started interval `count` times from inside `every`,
    /// before the subscription is handed back.
    pub fn fire_on_start(&self, count: u32) {
        self.fire_on_start.set(count);
    }

    /// Fire every live interval once. Returns how many callbacks ran.
    pub fn fire(&self) -> usize {
        self.registry.deliver(|_| true, |cb| cb())
    }

    pub fn active(&self) -> usize {
        self.registry.live()
    }

    /// Interval of the most recently started timer.
    pub fn last_interval_ms(&self) -> Option<u32> {
        self.registry.slots.borrow().last().map(|slot| slot.key)
    }
}

impl TickSource for ManualTicks {
    fn every(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Result<Subscription, EnvError> {
        if self.fail.get() {
            return Err(EnvError::NoWindow);
        }
        let mut tick = tick;
        for _ in 0..self.fire_on_start.get() {
            tick();
        }
        Ok(self.registry.push(interval_ms, tick))
    }
}
