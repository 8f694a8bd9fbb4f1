use web_sys::MouseEvent;
use yew::prelude::*;

use crate::tabs::{panel_id, TabGroup};

#[derive(Clone, PartialEq)]
pub struct VisualTab {
    pub id: &'static str,
    pub label: &'static str,
    pub body: Html,
}

#[derive(Properties, PartialEq)]
pub struct HighlightVisualProps {
    pub tabs: Vec<VisualTab>,
    pub initial: &'static str,
    pub transition: u32,
}

/// One `.highlight-visual` block: a row of tabs and the panel of the active one.
#[function_component(HighlightVisual)]
pub fn highlight_visual(props: &HighlightVisualProps) -> Html {
    let group = {
        let ids: Vec<&'static str> = props.tabs.iter().map(|tab| tab.id).collect();
        let initial = props.initial;
        use_reducer_eq(move || TabGroup::new(ids.iter().copied(), ids.iter().map(|id| panel_id(id))).with_active(initial))
    };

    let panel_style = format!("transition: opacity {}ms ease;", props.transition);

    html! {
        <div class="highlight-visual">
            <div class="visual-tabs">
                { for props.tabs.iter().map(|tab| {
                    let onclick = {
                        let group = group.clone();
                        let id = tab.id;
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            group.dispatch(id.to_string());
                        })
                    };
                    html! {
                        <button
                            class={classes!("visual-tab", group.is_tab_active(tab.id).then(|| "active"))}
                            data-tab={tab.id}
                            {onclick}
                        >
                            {tab.label}
                        </button>
                    }
                }) }
            </div>
            <div class="visual-content">
                { for props.tabs.iter().map(|tab| {
                    let id = panel_id(tab.id);
                    html! {
                        <div
                            id={id.clone()}
                            class={classes!("visual-item", group.is_panel_active(&id).then(|| "active"))}
                            style={panel_style.clone()}
                        >
                            { tab.body.clone() }
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
