use std::rc::Rc;
use common::{ChartModel, ChartSlot, PredictionView, SeriesSpec};
use plotly::common::{Fill, Line, Marker, Mode};
use plotly::Scatter;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

const CHART_ID: &str = "priceChart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

#[derive(Properties, PartialEq)]
pub struct PriceChartProps {
    pub view: Rc<PredictionView>,
}

/// Historical line plus the isolated predicted marker.
///
/// The plot is torn down and drawn from scratch for every new prediction;
/// the slot makes sure an old plot is purged exactly once.
#[function_component(PriceChart)]
pub fn price_chart(props: &PriceChartProps) -> Html {
    let slot = use_mut_ref(ChartSlot::<String>::new);

    use_effect_with(props.view.clone(), {
        let slot = slot.clone();
        move |view: &Rc<PredictionView>| {
            let (ticket, previous) = slot.borrow_mut().begin_rebuild();
            if let Some(div_id) = previous {
                purge(&div_id);
            }

            match draw(&view.chart) {
                Ok(()) => {
                    if let Err(stale) = slot.borrow_mut().commit(ticket, CHART_ID.to_string()) {
                        log::debug!("Chart rebuild superseded, purging {}", stale);
                        purge(&stale);
                    }
                }
                Err(err) => log::error!("Failed to draw prediction chart: {}", err),
            }

            move || {
                if let Some(div_id) = slot.borrow_mut().clear() {
                    purge(&div_id);
                }
            }
        }
    });

    html! {
        <div id="chartSection" class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Price History & Prediction"}</h3>
                <div id={CHART_ID} style="width:100%; height:420px;"></div>
            </div>
        </div>
    }
}

fn draw(chart: &ChartModel) -> Result<(), String> {
    let data = js_sys::Array::new();
    data.push(&to_js(&historical_trace(chart))?);
    data.push(&to_js(&predicted_trace(chart))?);

    newPlot(CHART_ID, data.into(), to_js(&layout(chart))?, to_js(&config())?);
    Ok(())
}

fn historical_trace(chart: &ChartModel) -> Box<Scatter<String, Option<f64>>> {
    let series = &chart.historical;
    let points = series.values.len();

    Scatter::new(chart.labels[..points].to_vec(), series.values.clone())
        .mode(Mode::Lines)
        .name(series.label)
        .line(Line::new().color(series.color).width(series.border_width))
        .fill(Fill::ToZeroY)
        .fill_color(series.fill_color)
        .text_array(hover_texts(chart, series, points))
        .hover_template("%{text}<extra></extra>")
}

fn predicted_trace(chart: &ChartModel) -> Box<Scatter<String, Option<f64>>> {
    let series = &chart.predicted;

    Scatter::new(chart.labels.clone(), series.values.clone())
        .mode(Mode::Markers)
        .name(series.label)
        .marker(Marker::new().size(series.point_radius * 2).color(series.color))
        .text_array(hover_texts(chart, series, chart.labels.len()))
        .hover_template("%{text}<extra></extra>")
}

fn hover_texts(chart: &ChartModel, series: &SeriesSpec, points: usize) -> Vec<String> {
    let mut texts = chart.hover_texts(series);
    texts.truncate(points);
    texts
}

fn layout(chart: &ChartModel) -> serde_json::Value {
    let axis_title = |text: &str| serde_json::json!({"text": text, "font": {"size": 14}});

    serde_json::json!({
        "margin": {"t": 40, "r": 20, "l": 70, "b": 50},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "hovermode": "x unified",
        "showlegend": true,
        "legend": {"orientation": "h", "y": 1.12, "font": {"size": 12}},
        "xaxis": {
            "type": "category",
            "title": axis_title(chart.x_axis.title),
            "nticks": chart.x_axis.max_ticks,
            "showgrid": false
        },
        "yaxis": {
            "title": axis_title(chart.y_axis.title),
            "tickprefix": chart.y_axis.tick_prefix,
            "tickformat": chart.y_axis.tick_decimals.map(|d| format!(".{}f", d)),
            "showgrid": true,
            "gridcolor": "#eee"
        }
    })
}

fn config() -> serde_json::Value {
    serde_json::json!({"responsive": true, "displayModeBar": false})
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}
