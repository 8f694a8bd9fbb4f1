use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::scheduler::{Millis, RateLimiterState, Scheduler};

/// Runs `action` at most once per `limit` milliseconds. The first call runs
/// right away; calls inside the window are coalesced into one trailing call
/// that lands exactly `limit` after the previous run, with the latest arguments.
pub struct Throttle<A> {
    inner: Rc<Inner<A>>,
}

struct Inner<A> {
    scheduler: Rc<dyn Scheduler>,
    action: Box<dyn Fn(A)>,
    limit: Millis,
    state: RefCell<RateLimiterState>,
    trailing: RefCell<Option<A>>,
}

impl<A: 'static> Throttle<A> {
    pub fn new(scheduler: Rc<dyn Scheduler>, limit: Millis, action: impl Fn(A) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                action: Box::new(action),
                limit,
                state: RefCell::new(RateLimiterState::default()),
                trailing: RefCell::new(None),
            }),
        }
    }

    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let now = inner.scheduler.now();
        let last = inner.state.borrow().last_invocation;

        let remaining = match last {
            Some(last) => inner.limit.saturating_sub(now.saturating_sub(last)),
            None => 0,
        };

        // Window already over: run now instead of arming a zero-delay timer.
        if remaining == 0 {
            self.cancel();
            inner.run(args, now);
            return;
        }

        *inner.trailing.borrow_mut() = Some(args);
        if inner.state.borrow().pending_timer.is_none() {
            Inner::schedule(inner, remaining);
        }
    }

    /// Drops the trailing call, if any. The window itself is kept.
    pub fn cancel(&self) {
        self.inner.trailing.borrow_mut().take();
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

impl<A: 'static> Inner<A> {
    fn schedule(this: &Rc<Self>, delay: Millis) {
        let weak: Weak<Self> = Rc::downgrade(this);
        let handle = this.scheduler.set_timeout(
            delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Inner::fire_trailing(&inner);
                }
            }),
        );
        this.state.borrow_mut().pending_timer = Some(handle);
    }

    fn fire_trailing(this: &Rc<Self>) {
        let now = this.scheduler.now();
        let last = {
            let mut state = this.state.borrow_mut();
            state.pending_timer = None;
            state.last_invocation
        };

        // Browser timers may fire a little early; wait out the rest of the window.
        if let Some(last) = last {
            let remaining = this.limit.saturating_sub(now.saturating_sub(last));
            if remaining > 0 {
                Inner::schedule(this, remaining);
                return;
            }
        }

        let args = this.trailing.borrow_mut().take();
        if let Some(args) = args {
            this.run(args, now);
        }
    }
}

impl<A> Inner<A> {
    fn run(&self, args: A, now: Millis) {
        self.state.borrow_mut().last_invocation = Some(now);
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

impl<A> Clone for Throttle<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
