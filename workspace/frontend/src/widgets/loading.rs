use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Shown under the spinner while the backend trains and predicts
    pub message: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div id="loading" class="flex flex-col justify-center items-center py-12 gap-4">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <p class="text-sm text-gray-500">{&props.message}</p>
        </div>
    }
}
