use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::scheduler::{Millis, RateLimiterState, Scheduler};

/// Runs `action` once calls have stopped arriving for `wait` milliseconds, with
/// the arguments of the last call. Clones share the same timer.
pub struct Debounce<A> {
    inner: Rc<Inner<A>>,
}

struct Inner<A> {
    scheduler: Rc<dyn Scheduler>,
    action: Box<dyn Fn(A)>,
    wait: Millis,
    state: RefCell<RateLimiterState>,
}

impl<A: 'static> Debounce<A> {
    pub fn new(scheduler: Rc<dyn Scheduler>, wait: Millis, action: impl Fn(A) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                action: Box::new(action),
                wait,
                state: RefCell::new(RateLimiterState::default()),
            }),
        }
    }

    pub fn call(&self, args: A) {
        self.cancel();

        let weak: Weak<Inner<A>> = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.set_timeout(
            self.inner.wait,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.fire(args);
                }
            }),
        );
        self.inner.state.borrow_mut().pending_timer = Some(handle);
    }

    pub fn cancel(&self) {
        let pending = self.inner.state.borrow_mut().pending_timer.take();
        if let Some(handle) = pending {
            self.inner.scheduler.clear_timeout(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.inner.state.borrow().pending_timer.is_some()
    }

    #[cfg(test)]
    pub fn state(&self) -> RateLimiterState {
        self.inner.state.borrow().clone()
    }
}

impl<A> Inner<A> {
    fn fire(&self, args: A) {
        {
            let mut state = self.state.borrow_mut();
            state.pending_timer = None;
            state.last_invocation = Some(self.scheduler.now());
        }
        (self.action)(args);
    }
}

impl<A> Drop for Inner<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.state.get_mut().pending_timer.take() {
            self.scheduler.clear_timeout(handle);
        }
    }
}

impl<A> Clone for Debounce<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
