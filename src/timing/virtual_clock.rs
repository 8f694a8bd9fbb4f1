use std::cell::{Cell, RefCell};

use super::scheduler::{Millis, Scheduler, TimerHandle};

struct Queued {
    due: Millis,
    id: u64,
    task: Box<dyn FnOnce()>,
}

/// Manually advanced clock for driving the rate limiters deterministically.
#[derive(Default)]
pub struct VirtualScheduler {
    now: Cell<Millis>,
    next_id: Cell<u64>,
    queue: RefCell<Vec<Queued>>,
}

impl VirtualScheduler {
    /// Moves the clock forward, running every task that falls due on the way in
    /// `(due, scheduling order)` order. Tasks see `now()` equal to their due time.
    pub fn advance(&self, by: Millis) {
        let target = self.now.get() + by;
        while let Some(next) = self.pop_due(target) {
            self.now.set(next.due);
            (next.task)();
        }
        self.now.set(target);
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn pop_due(&self, target: Millis) -> Option<Queued> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, q)| q.due <= target)
            .min_by_key(|(_, q)| (q.due, q.id))
            .map(|(i, _)| i)?;
        Some(queue.swap_remove(index))
    }
}

impl Scheduler for VirtualScheduler {
    fn now(&self) -> Millis {
        self.now.get()
    }

    fn set_timeout(&self, delay: Millis, task: Box<dyn FnOnce()>) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue.borrow_mut().push(Queued {
            due: self.now.get() + delay,
            id,
            task,
        });
        TimerHandle(id)
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        self.queue.borrow_mut().retain(|q| q.id != handle.0);
    }
}
