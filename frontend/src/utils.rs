use web_sys::window;
use yew::NodeRef;

/// Get the base HTTP URL (e.g., "http://localhost:8000" or "https://myapp.com")
pub fn get_base_url() -> String {
    let Some(window) = window() else {
        return String::new();
    };
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:8000".to_string());

    format!("{}//{}", protocol, host)
}

/// Read the `content` of a `<meta name="...">` tag, if present and non-blank
pub fn meta_content(name: &str) -> Option<String> {
    let document = window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
        .filter(|content| !content.trim().is_empty())
}

/// Scroll a container element to its bottom edge
pub fn scroll_to_bottom(node: &NodeRef) {
    if let Some(el) = node.cast::<web_sys::Element>() {
        el.set_scroll_top(el.scroll_height());
    }
}

/// Give keyboard focus to an input element
pub fn focus(node: &NodeRef) {
    if let Some(input) = node.cast::<web_sys::HtmlElement>() {
        let _ = input.focus();
    }
}
