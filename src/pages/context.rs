use std::rc::Rc;

use crate::config::LandingConfig;
use crate::dom::{DomError, WindowEvents};
use crate::events::{EventSource, Subscription};
use crate::timing::debounce::Debounce;
use crate::timing::scheduler::{BrowserScheduler, Scheduler};
use crate::timing::throttle::Throttle;

/// Everything the landing page hooks into the window, owned in one place.
/// Lives from mount to unmount; dropping it unsubscribes and cancels.
pub struct PageContext {
    subscriptions: Vec<Subscription>,
    scroll: Throttle<()>,
    resize: Debounce<()>,
}

impl PageContext {
    pub fn mount(
        config: &LandingConfig,
        on_scroll: impl Fn() + 'static,
        on_resize: impl Fn() + 'static,
    ) -> Result<Self, DomError> {
        let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new());
        Self::mount_with(scheduler, &WindowEvents, config, on_scroll, on_resize)
    }

    pub fn mount_with(
        scheduler: Rc<dyn Scheduler>,
        events: &dyn EventSource,
        config: &LandingConfig,
        on_scroll: impl Fn() + 'static,
        on_resize: impl Fn() + 'static,
    ) -> Result<Self, DomError> {
        let scroll = Throttle::new(scheduler.clone(), config.scroll_throttle, move |()| on_scroll());
        let resize = Debounce::new(scheduler, config.resize_debounce, move |()| on_resize());

        let subscriptions = vec![
            events.subscribe("scroll", {
                let scroll = scroll.clone();
                Box::new(move || scroll.call(()))
            })?,
            events.subscribe("resize", {
                let resize = resize.clone();
                Box::new(move || resize.call(()))
            })?,
        ];

        log::debug!(
            "Page context mounted ({} listeners, scroll throttle {}ms, resize debounce {}ms)",
            subscriptions.len(),
            config.scroll_throttle,
            config.resize_debounce
        );

        Ok(Self {
            subscriptions,
            scroll,
            resize,
        })
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for PageContext {
    fn drop(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            log::debug!("Unsubscribing from {}", subscription.event());
        }
        if self.scroll.is_pending() {
            log::debug!("Dropping trailing scroll tick");
        }
        if self.resize.is_pending() {
            log::debug!("Dropping pending resize");
        }
        self.scroll.cancel();
        self.resize.cancel();
        log::debug!("Page context unmounted");
    }
}
