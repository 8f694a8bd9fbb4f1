use crate::dom::DomError;

/// A live listener. Dropping it unsubscribes.
pub struct Subscription {
    event: &'static str,
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(event: &'static str, unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            event,
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

/// Somewhere `scroll` and `resize` come from: the browser window, or a test double.
pub trait EventSource {
    fn subscribe(&self, event: &'static str, handler: Box<dyn FnMut()>) -> Result<Subscription, DomError>;
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::fake::FakeEvents;
    use super::*;

    #[test]
    fn emit_reaches_only_matching_listeners() {
        let events = FakeEvents::default();
        let scrolls = Rc::new(Cell::new(0));
        let hits = scrolls.clone();

        let _scroll = events
            .subscribe("scroll", Box::new(move || hits.set(hits.get() + 1)))
            .unwrap();
        events.emit("scroll");
        events.emit("resize");
        assert_eq!(scrolls.get(), 1);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let events = FakeEvents::default();
        let scrolls = Rc::new(Cell::new(0));
        let hits = scrolls.clone();

        let subscription = events
            .subscribe("scroll", Box::new(move || hits.set(hits.get() + 1)))
            .unwrap();
        assert_eq!(subscription.event(), "scroll");
        drop(subscription);

        events.emit("scroll");
        assert_eq!(scrolls.get(), 0);
        assert_eq!(events.listener_count(), 0);
    }
}
