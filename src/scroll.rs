/// Direction tracking shared by every scroll tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub last_scroll_position: u32,
    pub is_scrolling_down: bool,
}

/// What the reactor needs from the page for one tick. `element_tops` holds the
/// viewport-relative top of each animatable element, `None` when it isn't mounted.
#[derive(Clone, Debug)]
pub struct ScrollSample<'a> {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub element_tops: &'a [Option<f64>],
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollTick {
    pub is_scrolling_down: bool,
    pub navbar_scrolled: bool,
    pub navbar_changed: bool,
    pub newly_revealed: Vec<usize>,
}

/// Scroll state machine: direction, the navbar flag and one-way reveals.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollReactor {
    state: ScrollState,
    navbar_threshold: u32,
    animation_offset: f64,
    navbar_scrolled: bool,
    revealed: Vec<bool>,
}

impl ScrollReactor {
    pub fn new(element_count: usize, navbar_threshold: u32, animation_offset: u32) -> Self {
        Self {
            state: ScrollState::default(),
            navbar_threshold,
            animation_offset: f64::from(animation_offset),
            navbar_scrolled: false,
            revealed: vec![false; element_count],
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[cfg(test)]
    pub fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    pub fn track_direction(&mut self, scroll_y: f64) -> bool {
        let position = to_position(scroll_y);
        self.state.is_scrolling_down = position > self.state.last_scroll_position;
        self.state.last_scroll_position = position;
        self.state.is_scrolling_down
    }

    pub fn tick(&mut self, sample: &ScrollSample<'_>) -> ScrollTick {
        let is_scrolling_down = self.track_direction(sample.scroll_y);

        // Raw offset: zoomed pages report fractional positions.
        let navbar_scrolled = sample.scroll_y > f64::from(self.navbar_threshold);
        let navbar_changed = navbar_scrolled != self.navbar_scrolled;
        self.navbar_scrolled = navbar_scrolled;

        let reveal_line = sample.viewport_height - self.animation_offset;
        let mut newly_revealed = Vec::new();
        for (index, (revealed, top)) in self.revealed.iter_mut().zip(sample.element_tops).enumerate() {
            if *revealed {
                continue;
            }
            if let Some(top) = top {
                if *top < reveal_line {
                    *revealed = true;
                    newly_revealed.push(index);
                }
            }
        }

        ScrollTick {
            is_scrolling_down,
            navbar_scrolled,
            navbar_changed,
            newly_revealed,
        }
    }
}

// Elastic overscroll reports negative offsets.
fn to_position(scroll_y: f64) -> u32 {
    if scroll_y.is_nan() || scroll_y <= 0.0 {
        0
    } else {
        scroll_y.round().min(f64::from(u32::MAX)) as u32
    }
}

/// Inline style for an animatable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStyle {
    pub duration: u32,
}

impl RevealStyle {
    pub fn css(&self, revealed: bool) -> String {
        let (opacity, offset) = if revealed { ("1", "0") } else { ("0", "20px") };
        format!(
            "opacity: {opacity}; transform: translateY({offset}); transition: opacity {d}ms ease, transform {d}ms ease;",
            d = self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: f64) -> ScrollSample<'static> {
        ScrollSample {
            scroll_y: y,
            viewport_height: 800.0,
            element_tops: &[],
        }
    }

    #[test]
    fn starts_at_top_not_scrolling() {
        let reactor = ScrollReactor::new(0, 50, 100);
        assert_eq!(reactor.state(), ScrollState { last_scroll_position: 0, is_scrolling_down: false });
        assert!(!reactor.navbar_scrolled());
    }

    #[test]
    fn direction_and_navbar_follow_positions() {
        let mut reactor = ScrollReactor::new(0, 50, 100);
        let mut directions = vec![reactor.state().is_scrolling_down];
        let mut navbar = vec![reactor.navbar_scrolled()];

        for y in [30.0, 10.0, 80.0] {
            let tick = reactor.tick(&at(y));
            directions.push(tick.is_scrolling_down);
            navbar.push(tick.navbar_scrolled);
        }

        assert_eq!(directions, vec![false, true, false, true]);
        assert_eq!(navbar, vec![false, false, false, true]);
        assert_eq!(reactor.state().last_scroll_position, 80);
    }

    #[test]
    fn navbar_threshold_is_strict() {
        let mut reactor = ScrollReactor::new(0, 50, 100);
        assert!(!reactor.tick(&at(50.0)).navbar_scrolled);
        assert!(reactor.tick(&at(51.0)).navbar_scrolled);
    }

    #[test]
    fn fractional_offset_past_threshold_scrolls_navbar() {
        let mut reactor = ScrollReactor::new(0, 50, 100);
        let tick = reactor.tick(&at(50.4));
        assert!(tick.navbar_scrolled);
        assert_eq!(reactor.state().last_scroll_position, 50);
        assert!(!reactor.tick(&at(49.6)).navbar_scrolled);
    }

    #[test]
    fn navbar_change_reported_once() {
        let mut reactor = ScrollReactor::new(0, 50, 100);
        assert!(reactor.tick(&at(120.0)).navbar_changed);
        assert!(!reactor.tick(&at(140.0)).navbar_changed);
        let back = reactor.tick(&at(0.0));
        assert!(back.navbar_changed);
        assert!(!back.navbar_scrolled);
    }

    #[test]
    fn reveal_is_one_way() {
        let mut reactor = ScrollReactor::new(2, 50, 100);

        let tick = reactor.tick(&ScrollSample {
            scroll_y: 300.0,
            viewport_height: 800.0,
            element_tops: &[Some(650.0), Some(900.0)],
        });
        assert_eq!(tick.newly_revealed, vec![0]);

        // Scrolled back up: element 0 is now below the line again but stays revealed.
        let tick = reactor.tick(&ScrollSample {
            scroll_y: 0.0,
            viewport_height: 800.0,
            element_tops: &[Some(950.0), Some(1200.0)],
        });
        assert!(tick.newly_revealed.is_empty());
        assert_eq!(reactor.revealed(), &[true, false]);
    }

    #[test]
    fn reveal_line_is_strict() {
        let mut reactor = ScrollReactor::new(1, 50, 100);
        let tick = reactor.tick(&ScrollSample {
            scroll_y: 10.0,
            viewport_height: 800.0,
            element_tops: &[Some(700.0)],
        });
        assert!(tick.newly_revealed.is_empty());
    }

    #[test]
    fn missing_elements_are_skipped() {
        let mut reactor = ScrollReactor::new(3, 50, 100);
        let tick = reactor.tick(&ScrollSample {
            scroll_y: 10.0,
            viewport_height: 800.0,
            element_tops: &[None, Some(10.0)],
        });
        assert_eq!(tick.newly_revealed, vec![1]);
        assert_eq!(reactor.revealed(), &[false, true, false]);
    }

    #[test]
    fn overscroll_clamps_to_zero() {
        let mut reactor = ScrollReactor::new(0, 50, 100);
        reactor.tick(&at(40.0));
        let tick = reactor.tick(&at(-25.0));
        assert!(!tick.is_scrolling_down);
        assert_eq!(reactor.state().last_scroll_position, 0);
        assert!(!reactor.tick(&at(-5.0)).is_scrolling_down);
    }

    #[test]
    fn reveal_style_carries_transition() {
        let style = RevealStyle { duration: 600 };
        assert_eq!(
            style.css(false),
            "opacity: 0; transform: translateY(20px); transition: opacity 600ms ease, transform 600ms ease;"
        );
        assert!(style.css(true).starts_with("opacity: 1; transform: translateY(0);"));
    }
}
