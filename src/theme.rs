use crate::preferences::Theme;

/// Apply the theme by setting the `data-theme` attribute on `<html>`;
/// the stylesheet keys its palette off that attribute.
pub fn apply_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                let _ = html.set_attribute("data-theme", theme.as_str());
            }
        }
    }
}
