//! Listener registry with two subscription scopes.
//!
//! `Local` holds listeners registered directly on the gaze manager; `Global`
//! holds ambient subscribers (on the web, the document broadcaster). Both are
//! returned by the same `recipients` snapshot, local listeners first, each
//! scope in registration order.

use crate::events::{GazeEvent, GazeEventKind};
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;

pub trait Listener<E> {
    fn notify(&self, event: &GazeEvent<E>);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Local,
    Global,
}

pub type Recipients<L> = SmallVec<[L; 4]>;

pub struct EventBus<L> {
    local: [SmallVec<[L; 4]>; 3],
    global: [SmallVec<[L; 1]>; 3],
}

impl<L: Clone + PartialEq> EventBus<L> {
    pub fn new() -> Self {
        Self {
            local: Default::default(),
            global: Default::default(),
        }
    }

    /// Duplicates are kept; a listener added twice is notified twice.
    pub fn subscribe(&mut self, scope: Scope, kind: GazeEventKind, listener: L) {
        match scope {
            Scope::Local => self.local[kind.index()].push(listener),
            Scope::Global => self.global[kind.index()].push(listener),
        }
    }

    /// Removes every registration equal to `listener`; returns how many.
    pub fn unsubscribe(&mut self, scope: Scope, kind: GazeEventKind, listener: &L) -> usize {
        let i = kind.index();
        match scope {
            Scope::Local => {
                let before = self.local[i].len();
                self.local[i].retain(|x| *x != *listener);
                before - self.local[i].len()
            }
            Scope::Global => {
                let before = self.global[i].len();
                self.global[i].retain(|x| *x != *listener);
                before - self.global[i].len()
            }
        }
    }

    pub fn listener_count(&self, scope: Scope, kind: GazeEventKind) -> usize {
        match scope {
            Scope::Local => self.local[kind.index()].len(),
            Scope::Global => self.global[kind.index()].len(),
        }
    }

    /// Snapshot of everyone to notify for `kind`, in notification order.
    ///
    /// Callers hold no borrow of the bus while notifying, so listeners may
    /// subscribe or unsubscribe from inside a callback.
    pub fn recipients(&self, kind: GazeEventKind) -> Recipients<L> {
        let i = kind.index();
        self.local[i]
            .iter()
            .chain(self.global[i].iter())
            .cloned()
            .collect()
    }
}

impl<L: Clone + PartialEq> Default for EventBus<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Closure listener compared by pointer identity.
pub struct Callback<E>(Rc<dyn Fn(&GazeEvent<E>)>);

impl<E> Callback<E> {
    pub fn new(f: impl Fn(&GazeEvent<E>) + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl<E> Clone for Callback<E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<E> PartialEq for Callback<E> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const (),
            Rc::as_ptr(&other.0) as *const (),
        )
    }
}

impl<E> fmt::Debug for Callback<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

impl<E> Listener<E> for Callback<E> {
    fn notify(&self, event: &GazeEvent<E>) {
        (self.0)(event)
    }
}
