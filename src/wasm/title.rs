use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::config::{Selectors, TitleConfig};
use crate::title::{GlyphPose, TitleSchedule};

/// Title text split into per-glyph spans, animated on the frame clock.
pub struct TitleReveal {
    glyphs: Vec<HtmlElement>,
    schedule: TitleSchedule,
    done: bool,
}

impl TitleReveal {
    /// Splits every title element into glyph spans and renders the opening
    /// pose right away. `Ok(None)` when the page has no glyphs to animate.
    pub fn split(
        document: &Document,
        selectors: &Selectors,
        config: &TitleConfig,
    ) -> Result<Option<Self>, JsValue> {
        let titles = document.query_selector_all(&selectors.title)?;
        let mut glyphs = Vec::new();
        for i in 0..titles.length() {
            let Some(title) = titles.item(i) else { continue };
            let text = title.text_content().unwrap_or_default();
            title.set_text_content(None);
            for ch in text.chars() {
                if ch.is_whitespace() {
                    title.append_child(&document.create_text_node(&ch.to_string()))?;
                    continue;
                }
                let glyph = document.create_element("span")?.dyn_into::<HtmlElement>()?;
                glyph.set_class_name(&selectors.glyph_class);
                glyph.set_text_content(Some(&ch.to_string()));
                glyph.style().set_property("display", "inline-block")?;
                title.append_child(&glyph)?;
                glyphs.push(glyph);
            }
        }
        if glyphs.is_empty() {
            return Ok(None);
        }

        let schedule = TitleSchedule::new(glyphs.len(), config);
        let reveal = Self {
            glyphs,
            schedule,
            done: false,
        };
        reveal.apply(0.0)?;
        Ok(Some(reveal))
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Poses every glyph for `t` seconds after page ready. Stops touching the
    /// DOM once the last glyph has landed.
    pub fn update(&mut self, t: f64) -> Result<(), JsValue> {
        if self.done {
            return Ok(());
        }
        self.apply(t)?;
        self.done = self.schedule.is_finished(t);
        Ok(())
    }

    fn apply(&self, t: f64) -> Result<(), JsValue> {
        for (i, glyph) in self.glyphs.iter().enumerate() {
            set_pose(glyph, self.schedule.pose(i, t))?;
        }
        Ok(())
    }
}

fn set_pose(glyph: &HtmlElement, pose: GlyphPose) -> Result<(), JsValue> {
    let style = glyph.style();
    style.set_property(
        "transform",
        &format!("translate3d(0, {}px, 0) rotate({}deg)", pose.y, pose.rotation),
    )?;
    style.set_property("opacity", &pose.opacity.to_string())
}
