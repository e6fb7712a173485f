use yew::prelude::*;
use crate::hooks::use_prediction;
use crate::widgets::error::ErrorPanel;
use crate::widgets::loading::Loading;
use super::chart::PriceChart;
use super::form::PredictionForm;
use super::results::ResultsPanel;

#[function_component(Predictor)]
pub fn predictor() -> Html {
    let (state, submit) = use_prediction();
    let panels = state.panels();

    html! {
        <>
            <PredictionForm loading={panels.loading} on_submit={submit} />

            if panels.loading {
                <Loading message="Training model and predicting..." />
            }

            if let Some(message) = state.error() {
                <ErrorPanel message={message.to_string()} />
            }

            if let Some(view) = state.data() {
                if panels.results {
                    <ResultsPanel view={view.clone()} />
                }
                if panels.chart {
                    <PriceChart view={view.clone()} />
                }
            }
        </>
    }
}
