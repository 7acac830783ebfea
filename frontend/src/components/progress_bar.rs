use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// 0.0 to 100.0
    pub percent: f64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let width = props.percent.clamp(0.0, 100.0);

    html! {
        <div class="progress-container">
            <div class="progress-bar" style={format!("width: {}%", width)}></div>
        </div>
    }
}
