use web_sys::MouseEvent;
use yew::prelude::*;

use crate::anchor::{anchor_selector, is_in_page, scroll_destination};
use crate::config::LandingConfig;
use crate::dom::{self, DomError};

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that scrolls smoothly instead of jumping. Other hrefs navigate normally.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let scroll_offset = use_context::<LandingConfig>().unwrap_or_default().scroll_offset;

    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            if !is_in_page(&href) {
                return;
            }
            e.prevent_default();
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            if let Err(e) = scroll_to_anchor(selector, scroll_offset) {
                log::debug!("Not scrolling to {}: {}", selector, e);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

fn scroll_to_anchor(selector: &str, scroll_offset: u32) -> Result<(), DomError> {
    let top = dom::offset_top(selector)?;
    dom::smooth_scroll_to(scroll_destination(top, scroll_offset))
}
