use crate::constants::*;
use crate::core::{style, GlitchOffset, VisualState};
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Handles to every element the page writes to.
#[derive(Clone)]
pub struct PageElements {
    pub canvas: web::HtmlCanvasElement,
    pub track: web::HtmlElement,
    pub hero: web::HtmlElement,
    pub content: web::HtmlElement,
    pub hero_title: Option<web::HtmlElement>,
    pub indicator: Option<web::HtmlElement>,
}

impl PageElements {
    /// Look up the mounting surfaces. `None` if any required one is not attached yet.
    pub fn find(document: &web::Document) -> Option<Self> {
        let canvas = document
            .get_element_by_id(CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        Some(Self {
            canvas,
            track: html_by_id(document, TRACK_ID)?,
            hero: html_by_id(document, HERO_ID)?,
            content: html_by_id(document, CONTENT_ID)?,
            hero_title: html_by_id(document, HERO_TITLE_ID),
            indicator: html_by_id(document, INDICATOR_ID),
        })
    }

    /// Write hero/content styles and the pointer gate in one pass.
    pub fn apply_visual(&self, v: &VisualState) {
        let hero = self.hero.style();
        _ = hero.set_property("transform", &style::hero_transform(v.hero.translate_z));
        _ = hero.set_property("opacity", &style::opacity(v.hero.opacity));
        _ = hero.set_property("filter", &style::blur_filter(v.hero.blur_px));

        let content = self.content.style();
        _ = content.set_property("opacity", &style::opacity(v.content.opacity));
        _ = content.set_property("transform", &style::scale_transform(v.content.scale));
        _ = content.set_property("pointer-events", style::pointer_events(v.passed_portal));

        if let Some(ind) = &self.indicator {
            overlay::set_visible(ind, !v.passed_portal);
        }
    }

    pub fn apply_glitch(&self, offset: GlitchOffset) {
        if let Some(title) = &self.hero_title {
            _ = title
                .style()
                .set_property("text-shadow", &style::glitch_text_shadow(offset));
        }
    }
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Match the canvas backing store to its CSS size, with the pixel ratio capped.
/// Returns the new size in device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = ((rect.width() * dpr) as u32).max(1);
        let h_px = ((rect.height() * dpr) as u32).max(1);
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
    (canvas.width(), canvas.height())
}
