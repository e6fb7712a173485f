use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: String,
}

/// The page's error panel; shows the message exactly as given.
#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div id="error" class="alert alert-error my-6">
            <i class="fas fa-exclamation-circle text-2xl"></i>
            <span>{&props.message}</span>
        </div>
    }
}
