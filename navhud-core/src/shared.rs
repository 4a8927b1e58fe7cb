//! HUD shared between execution contexts
//!
//! Transport callbacks may arrive from an interrupt, another task, or
//! another core. [`SharedHud`] serializes them: each event runs its whole
//! decode → update → render cycle inside one critical section.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use navhud_display::DrawSurface;

use crate::hud::{Hud, Outcome};
use crate::state::Event;
use crate::traits::Transport;

/// [`Hud`] behind a blocking mutex
///
/// Closures passed to [`SharedHud::with`] and [`SharedHud::with_mut`] must
/// not call back into the same `SharedHud`.
pub struct SharedHud<M: RawMutex, S, T> {
    inner: Mutex<M, RefCell<Hud<S, T>>>,
}

impl<M, S, T> SharedHud<M, S, T>
where
    M: RawMutex,
    S: DrawSurface,
    T: Transport,
{
    /// Wrap a HUD
    pub const fn new(hud: Hud<S, T>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(hud)),
        }
    }

    /// Handle one transport event under the lock
    pub fn handle(&self, event: Event<'_>) -> Outcome {
        self.with_mut(|hud| hud.handle(event))
    }

    /// Show the power-on splash under the lock
    pub fn boot(&self) -> Outcome {
        self.with_mut(|hud| hud.boot())
    }

    /// Read the HUD under the lock
    pub fn with<R>(&self, f: impl FnOnce(&Hud<S, T>) -> R) -> R {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    /// Modify the HUD under the lock
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Hud<S, T>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Unwrap the HUD
    pub fn into_inner(self) -> Hud<S, T> {
        self.inner.into_inner().into_inner()
    }
}
