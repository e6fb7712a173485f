use std::rc::Rc;
use common::{Phase, PredictionRequest, PredictionView, RequestGeneration};
use yew::prelude::*;
use crate::api_client::prediction::request_prediction;

/// State of the prediction page.
pub type PredictionState = Phase<Rc<PredictionView>>;

/// Submits predictions and tracks the page state.
///
/// Each submit supersedes the previous one: a reply that arrives after a
/// newer request was started is dropped instead of overwriting the screen.
#[hook]
pub fn use_prediction() -> (UseStateHandle<PredictionState>, Callback<PredictionRequest>) {
    let state = use_state(|| PredictionState::Idle);
    let generation = use_mut_ref(RequestGeneration::new);

    let submit = {
        let state = state.clone();
        let generation = generation.clone();

        use_callback((), move |request: PredictionRequest, _| {
            let ticket = generation.borrow_mut().begin();
            let state = state.clone();
            let generation = generation.clone();

            state.set(Phase::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = request_prediction(&request).await;

                if !generation.borrow().is_current(ticket) {
                    log::debug!("Discarding superseded prediction for {}", request.stock);
                    return;
                }

                match outcome {
                    Ok(view) => state.set(Phase::Ready(Rc::new(view))),
                    Err(err) => state.set(Phase::Failed(err.to_string())),
                }
            });
        })
    };

    (state, submit)
}
