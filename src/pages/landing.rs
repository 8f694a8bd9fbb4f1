use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::accordion::{Accordion, AccordionAction};
use crate::components::anchor_link::AnchorLink;
use crate::components::faq::{FaqList, FAQS};
use crate::components::highlight::{HighlightVisual, VisualTab};
use crate::config::LandingConfig;
use crate::dom::{self, DomError};
use crate::pages::context::PageContext;
use crate::scroll::{RevealStyle, ScrollReactor, ScrollSample};

const FEATURES: &[(&str, &str)] = &[
    ("Automatic categorization", "Every transaction is sorted into the right category the moment it clears."),
    ("Cash-flow forecast", "See your balance 90 days ahead, including bills and paychecks."),
    ("Goals that adapt", "Set a target and FinanceFlow adjusts your monthly plan as life happens."),
];

const STATS: &[(&str, &str)] = &[
    ("120k+", "households budgeting"),
    ("$38M", "saved last year"),
    ("4.8", "average app rating"),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("\"The first budget I have kept for more than a month.\"", "Marina, designer"),
    ("\"The forecast caught a double charge before it hit my rent.\"", "Caio, nurse"),
    ("\"Shared goals ended our money arguments.\"", "Priya and Tom"),
];

fn viewport() -> Result<(f64, f64), DomError> {
    Ok((dom::scroll_y()?, dom::viewport_height()?))
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub scrolled: bool,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    html! {
        <nav id="navigation" class={classes!("navigation", props.scrolled.then(|| "scrolled"))}>
            <AnchorLink href="#" class="nav-logo">{"FinanceFlow"}</AnchorLink>
            <div class="nav-links">
                <AnchorLink href="#features" class="nav-link">{"Features"}</AnchorLink>
                <AnchorLink href="#highlights" class="nav-link">{"How it works"}</AnchorLink>
                <AnchorLink href="#testimonials" class="nav-link">{"Stories"}</AnchorLink>
                <AnchorLink href="#faq" class="nav-link">{"FAQ"}</AnchorLink>
            </div>
        </nav>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let card_count = FEATURES.len() + STATS.len() + TESTIMONIALS.len();

    let card_refs = use_memo(|count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(), card_count);
    let answer_refs = use_memo(|count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(), FAQS.len());
    let navbar_scrolled = use_state_eq(|| false);
    let revealed = use_state_eq(move || vec![false; card_count]);
    let accordion = use_reducer_eq(|| Accordion::new(FAQS.len()));

    // Window listeners live exactly as long as the page.
    {
        let card_refs = card_refs.clone();
        let answer_refs = answer_refs.clone();
        let navbar_scrolled = navbar_scrolled.clone();
        let revealed = revealed.clone();
        let dispatcher = accordion.dispatcher();
        use_effect_with_deps(
            move |config: &LandingConfig| {
                let reactor = Rc::new(RefCell::new(ScrollReactor::new(
                    card_refs.len(),
                    config.navbar_threshold,
                    config.animation_offset,
                )));
                match dom::scroll_y() {
                    Ok(y) => {
                        reactor.borrow_mut().track_direction(y);
                    }
                    Err(e) => log::debug!("Could not read initial scroll position: {}", e),
                }

                let on_scroll = move || {
                    let (scroll_y, viewport_height) = match viewport() {
                        Ok(v) => v,
                        Err(e) => {
                            log::debug!("Skipping scroll tick: {}", e);
                            return;
                        }
                    };
                    let element_tops: Vec<Option<f64>> = card_refs.iter().map(dom::element_top).collect();
                    let mut reactor = reactor.borrow_mut();
                    let tick = reactor.tick(&ScrollSample {
                        scroll_y,
                        viewport_height,
                        element_tops: &element_tops,
                    });
                    if tick.navbar_changed {
                        log::debug!(
                            "Navbar {} while scrolling {}",
                            if tick.navbar_scrolled { "condensed" } else { "expanded" },
                            if tick.is_scrolling_down { "down" } else { "up" }
                        );
                        navbar_scrolled.set(tick.navbar_scrolled);
                    }
                    if !tick.newly_revealed.is_empty() {
                        log::debug!("Revealed cards {:?}", tick.newly_revealed);
                        revealed.set(reactor.revealed().to_vec());
                    }
                };

                let on_resize = move || {
                    let heights = answer_refs.iter().map(dom::scroll_height).collect();
                    dispatcher.dispatch(AccordionAction::Remeasure(heights));
                };

                let context = match PageContext::mount(config, on_scroll, on_resize) {
                    Ok(context) => {
                        log::info!("FinanceFlow initialized successfully");
                        Some(context)
                    }
                    Err(e) => {
                        log::debug!("Landing page behaviors disabled: {}", e);
                        None
                    }
                };

                move || {
                    if let Some(context) = context {
                        context.unmount();
                    }
                }
            },
            config.clone(),
        );
    }

    let reveal = RevealStyle {
        duration: config.animation_duration,
    };
    let card = |index: usize, class: &'static str, body: Html| -> Html {
        let node_ref = card_refs.get(index).cloned().unwrap_or_default();
        let shown = revealed.get(index).copied().unwrap_or(false);
        html! {
            <div class={class} ref={node_ref} style={reveal.css(shown)}>
                { body }
            </div>
        }
    };

    let stats_start = FEATURES.len();
    let testimonials_start = stats_start + STATS.len();

    let spending_tabs = vec![
        VisualTab {
            id: "chart",
            label: "Chart",
            body: html! { <div class="visual-chart" aria-hidden="true">{"▂▃▅▇▅▃▂"}</div> },
        },
        VisualTab {
            id: "table",
            label: "Table",
            body: html! {
                <table class="visual-table">
                    <tr><td>{"Groceries"}</td><td>{"$412"}</td></tr>
                    <tr><td>{"Transport"}</td><td>{"$96"}</td></tr>
                    <tr><td>{"Dining out"}</td><td>{"$158"}</td></tr>
                </table>
            },
        },
    ];
    let flow_tabs = vec![
        VisualTab {
            id: "income",
            label: "Income",
            body: html! { <p>{"Paychecks and transfers in, matched to the day they land."}</p> },
        },
        VisualTab {
            id: "expenses",
            label: "Expenses",
            body: html! { <p>{"Recurring bills detected automatically, with reminders before they hit."}</p> },
        },
    ];

    html! {
        <div class="landing">
            <Navigation scrolled={*navbar_scrolled} />

            <section class="hero">
                <h1>{"Take control of your money"}</h1>
                <p>{"FinanceFlow brings every account, bill and goal into one calm dashboard."}</p>
                <AnchorLink href="#features" class="cta-button">{"See how it works"}</AnchorLink>
            </section>

            <section id="features" class="features">
                { for FEATURES.iter().enumerate().map(|(i, (title, text))| card(i, "feature-card", html! {
                    <>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </>
                })) }
            </section>

            <section class="stats">
                { for STATS.iter().enumerate().map(|(i, (value, label))| card(stats_start + i, "stat-card", html! {
                    <>
                        <strong>{*value}</strong>
                        <span>{*label}</span>
                    </>
                })) }
            </section>

            <section id="highlights" class="highlights">
                <HighlightVisual tabs={spending_tabs} initial="chart" transition={config.tab_transition} />
                <HighlightVisual tabs={flow_tabs} initial="income" transition={config.tab_transition} />
            </section>

            <section id="testimonials" class="testimonials">
                { for TESTIMONIALS.iter().enumerate().map(|(i, (quote, author))| card(testimonials_start + i, "testimonial-card", html! {
                    <>
                        <blockquote>{*quote}</blockquote>
                        <cite>{*author}</cite>
                    </>
                })) }
            </section>

            <section id="faq" class="faq">
                <h2>{"Frequently asked questions"}</h2>
                <FaqList accordion={accordion.clone()} answer_refs={answer_refs.clone()} transition={config.faq_transition} />
            </section>

            <footer class="footer">
                <AnchorLink href="#" class="back-to-top">{"Back to top"}</AnchorLink>
                <span>{"© FinanceFlow"}</span>
            </footer>

            <style>
                {r#"
                .navigation {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    transition: background 0.3s ease;
                }
                .navigation.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }
                .visual-item {
                    display: none;
                    opacity: 0;
                }
                .visual-item.active {
                    display: block;
                    opacity: 1;
                }
                "#}
            </style>
        </div>
    }
}
