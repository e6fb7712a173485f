use std::rc::Rc;
use common::PredictionView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultsPanelProps {
    pub view: Rc<PredictionView>,
}

#[function_component(ResultsPanel)]
pub fn results_panel(props: &ResultsPanelProps) -> Html {
    let view = &props.view;
    let change_style = format!("color: {}", view.change_tone.color());

    html! {
        <div id="results" class="grid grid-cols-2 md:grid-cols-5 gap-4 my-6">
            <div class="stat bg-base-100 rounded-lg shadow">
                <div class="stat-title">{"Current Price"}</div>
                <div id="currentPrice" class="stat-value text-lg">{&view.current_price}</div>
            </div>
            <div class="stat bg-base-100 rounded-lg shadow">
                <div class="stat-title">{"Predicted Price"}</div>
                <div id="predictedPrice" class="stat-value text-lg">{&view.predicted_price}</div>
            </div>
            <div class="stat bg-base-100 rounded-lg shadow">
                <div class="stat-title">{"Expected Change"}</div>
                <div id="priceChange" class="stat-value text-lg" style={change_style}>{&view.price_change}</div>
            </div>
            <div class="stat bg-base-100 rounded-lg shadow">
                <div class="stat-title">{"Decision"}</div>
                <div id="decision" class={view.decision.css_class()}>{view.decision.label()}</div>
            </div>
            <div class="stat bg-base-100 rounded-lg shadow">
                <div class="stat-title">{"Confidence"}</div>
                <div id="confidence" class="stat-value text-lg">{&view.confidence}</div>
            </div>
        </div>
    }
}
