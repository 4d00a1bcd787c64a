//! Thread affinity checks for Lattice Rows.
//!
//! A list binding is fed and queried by the thread that owns the visual
//! hierarchy. [`ThreadAffinity`] records that thread when a binding is
//! created and lets every operation verify it is still running there.
//!
//! ```
//! use lattice_rows_core::thread_check::ThreadAffinity;
//!
//! struct Counter {
//!     affinity: ThreadAffinity,
//!     value: std::cell::Cell<i32>,
//! }
//!
//! impl Counter {
//!     fn bump(&self) {
//!         // Panics in debug builds if called from another thread.
//!         self.affinity.debug_assert_same_thread();
//!         self.value.set(self.value.get() + 1);
//!     }
//! }
//!
//! let counter = Counter {
//!     affinity: ThreadAffinity::current(),
//!     value: std::cell::Cell::new(0),
//! };
//! counter.bump();
//! ```
//!
//! Debug assertions compile to nothing in release builds. Use
//! [`ThreadAffinity::assert_same_thread`] where the check must survive
//! release builds.

use std::thread::ThreadId;

/// Records the thread an object was created on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Create an affinity bound to the current thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// Get the thread ID this affinity is bound to.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Check if the current thread matches this affinity.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Assert that we are on the bound thread.
    ///
    /// # Panics
    ///
    /// Panics with a descriptive message if called from a different thread.
    #[inline]
    pub fn assert_same_thread(&self) {
        self.assert_same_thread_with_msg("object accessed from wrong thread")
    }

    /// Assert that we are on the bound thread, with a custom message.
    ///
    /// # Panics
    ///
    /// Panics if called from a different thread.
    pub fn assert_same_thread_with_msg(&self, msg: &str) {
        if !self.is_same_thread() {
            self.panic_wrong_thread(msg);
        }
    }

    /// Debug-only assertion that we are on the bound thread.
    #[inline]
    pub fn debug_assert_same_thread(&self) {
        #[cfg(debug_assertions)]
        self.assert_same_thread();
    }

    /// Debug-only assertion with a custom message.
    #[inline]
    pub fn debug_assert_same_thread_with_msg(&self, msg: &str) {
        #[cfg(debug_assertions)]
        self.assert_same_thread_with_msg(msg);
        #[cfg(not(debug_assertions))]
        let _ = msg;
    }

    #[cold]
    #[inline(never)]
    fn panic_wrong_thread(&self, msg: &str) -> ! {
        let current = std::thread::current();
        let current_name = current.name().unwrap_or("<unnamed>");
        let current_id = current.id();

        panic!(
            "thread affinity violation: {msg}\n\
             bound to thread: {:?}\n\
             current thread: \"{current_name}\" ({current_id:?})\n\
             list bindings must be fed and queried from the thread that owns the view",
            self.thread_id
        )
    }
}
