use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::accordion::{Accordion, AccordionAction};
use crate::dom;

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Is my bank data safe with FinanceFlow?",
        answer: "Connections are read-only and encrypted end to end. We never store your bank credentials, and you can revoke access from your dashboard at any time.",
    },
    Faq {
        question: "Which banks can I connect?",
        answer: "FinanceFlow works with more than 2,000 banks and credit unions. If yours is missing, you can import statements as CSV or OFX files.",
    },
    Faq {
        question: "Can I share a budget with my partner?",
        answer: "Yes. Invite anyone to a shared workspace; each person keeps their private accounts while shared categories and goals stay in sync.",
    },
    Faq {
        question: "What happens when the free trial ends?",
        answer: "You keep read access to everything you created. Pick a plan to resume syncing, or export your data in one click.",
    },
    Faq {
        question: "Do you offer refunds?",
        answer: "Annual plans are refundable within 30 days of purchase, no questions asked.",
    },
];

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub accordion: UseReducerHandle<Accordion>,
    pub answer_refs: Rc<Vec<NodeRef>>,
    pub transition: u32,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <div class="faq-list">
            { for FAQS.iter().enumerate().map(|(index, faq)| {
                let item = props.accordion.item(index);
                let answer_ref = props.answer_refs.get(index).cloned().unwrap_or_default();

                let onclick = {
                    let accordion = props.accordion.clone();
                    let answer_ref = answer_ref.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        let natural_height = dom::scroll_height(&answer_ref).unwrap_or(0);
                        accordion.dispatch(AccordionAction::Toggle { index, natural_height });
                    })
                };

                html! {
                    <div class={classes!("faq-item", item.expanded.then(|| "active"))}>
                        <button class="faq-question" {onclick}>
                            <span class="question-text">{faq.question}</span>
                            <span class="faq-toggle" style={format!("transform: {};", item.toggle_rotation())}>{"+"}</span>
                        </button>
                        <div
                            class="faq-answer"
                            ref={answer_ref}
                            style={format!(
                                "max-height: {}px; overflow: hidden; transition: max-height {}ms ease;",
                                item.max_height, props.transition
                            )}
                        >
                            <p>{faq.answer}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
