use crate::constants::{DESCRIPTION_ID, TITLE_ID};
use crate::core::PlanetConfig;
use web_sys as web;

/// Swap the fixed overlay text to the newly focused planet: big title at
/// the top, description card underneath.
pub fn update_focus(document: &web::Document, planet: &PlanetConfig) {
    if let Some(el) = document.get_element_by_id(TITLE_ID) {
        el.set_text_content(Some(planet.name));
    }
    if let Some(el) = document.get_element_by_id(DESCRIPTION_ID) {
        let html = format!("<h2>{}</h2><p>{}</p>", planet.name, planet.description);
        el.set_inner_html(&html);
    }
}
