use web_sys as web;

// Visibility toggles for decorative overlays (the "scroll to continue" hint).

#[inline]
pub fn show(el: &web::HtmlElement) {
    _ = el.class_list().remove_1("hidden");
    // fallback for pages without the CSS class
    _ = el.style().remove_property("display");
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.class_list().add_1("hidden");
    // fallback
    _ = el.style().set_property("display", "none");
}

#[inline]
pub fn is_hidden(el: &web::HtmlElement) -> bool {
    el.class_list().contains("hidden")
}

/// Show or hide, touching the DOM only when the state actually flips.
pub fn set_visible(el: &web::HtmlElement, visible: bool) {
    match (visible, is_hidden(el)) {
        (true, true) => show(el),
        (false, false) => hide(el),
        _ => {}
    }
}
