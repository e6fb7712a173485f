use chrono::Utc;
use common::{default_date_range, PredictionRequest, DATE_FORMAT};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionFormProps {
    pub loading: bool,
    pub on_submit: Callback<PredictionRequest>,
}

/// Symbol and date-range inputs.
///
/// Values are passed on untouched; empty or malformed entries are the
/// backend's to reject.
#[function_component(PredictionForm)]
pub fn prediction_form(props: &PredictionFormProps) -> Html {
    let form_ref = use_node_ref();
    let defaults = use_memo((), |_| {
        let (start, end) = default_date_range(Utc::now().date_naive());
        (
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        )
    });

    let on_submit = {
        let form_ref = form_ref.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() else {
                log::error!("Prediction form is not mounted");
                return;
            };
            let form_data = match web_sys::FormData::new_with_form(&form) {
                Ok(form_data) => form_data,
                Err(err) => {
                    log::error!("Failed to read prediction form: {:?}", err);
                    return;
                }
            };

            let field = |name: &str| form_data.get(name).as_string().unwrap_or_default();
            let request = PredictionRequest::new(field("stock"), field("start_date"), field("end_date"));

            log::debug!("Prediction form submitted: {:?}", request);
            on_submit.emit(request);
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Next-Day Price Prediction"}</h2>
                <form ref={form_ref} onsubmit={on_submit} class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end">
                    <div class="form-control">
                        <label class="label" for="stock"><span class="label-text">{"Stock Symbol"}</span></label>
                        <input
                            type="text"
                            id="stock"
                            name="stock"
                            class="input input-bordered w-full"
                            placeholder="e.g. AAPL or RELIANCE.NS"
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="start_date"><span class="label-text">{"Start Date"}</span></label>
                        <input
                            type="date"
                            id="start_date"
                            name="start_date"
                            class="input input-bordered w-full"
                            value={defaults.0.clone()}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="end_date"><span class="label-text">{"End Date"}</span></label>
                        <input
                            type="date"
                            id="end_date"
                            name="end_date"
                            class="input input-bordered w-full"
                            value={defaults.1.clone()}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        {if props.loading {
                            html! { <><span class="loading loading-spinner loading-sm"></span>{" Predicting..."}</> }
                        } else {
                            html! { "Predict" }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
