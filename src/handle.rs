//! Shared handle for collaborators that write fields later.
//!
//! A [`FormManager`] needs `&mut self` for every transition. Timers and
//! background tasks that populate fields after a delay need something they
//! can own; this handle wraps the manager in a mutex and hands out
//! `'static` setters.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::error::UnknownFieldError;
use crate::event::InputEvent;
use crate::key::FieldKey;
use crate::manager::{FormManager, FormView};
use crate::value::FieldValue;

/// Cloneable, thread-safe owner of one [`FormManager`].
///
/// Each operation holds the lock for its whole run, so concurrent writers
/// are applied one at a time in the order they acquire it.
///
/// # Deadlocks
/// Validators run under that lock, which is not re-entrant: a validator
/// must not call back into the same handle.
pub struct FormHandle<K: FieldKey> {
    inner: Arc<Mutex<FormManager<K>>>,
}

impl<K: FieldKey> Clone for FormHandle<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: FieldKey> FormHandle<K> {
    pub fn new(manager: FormManager<K>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Keyed update returning an owned setter.
    ///
    /// # Errors
    /// Fails immediately if `key` is not one of the initial fields.
    pub fn setter(
        &self,
        key: K,
    ) -> Result<impl Fn(FieldValue) + Send + Sync + 'static, UnknownFieldError> {
        self.inner.lock().ensure_known(&key)?;

        let inner = Arc::clone(&self.inner);
        Ok(move |value: FieldValue| {
            inner.lock().apply_keyed(key.clone(), value);
        })
    }

    pub fn set(&self, key: K, value: impl Into<FieldValue>) -> Result<(), UnknownFieldError> {
        self.inner.lock().set(key, value)
    }

    pub fn on_input(&self, event: &InputEvent) -> Result<(), UnknownFieldError> {
        self.inner.lock().update_from_event(event)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Read the derived view, completing one read cycle.
    pub fn read(&self) -> FormView<K> {
        self.inner.lock().read()
    }

    pub fn snapshot(&self) -> FormView<K> {
        self.inner.lock().snapshot()
    }

    pub fn value(&self, key: &K) -> Option<FieldValue> {
        self.inner.lock().value(key).cloned()
    }

    /// Run `f` against the manager while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut FormManager<K>) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}
