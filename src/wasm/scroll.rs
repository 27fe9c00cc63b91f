use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::config::Config;
use crate::session::{Session, TrackProgress};
use crate::smooth::Scrub;
use crate::timeline::{parse_speed, ParallaxLayer, Span, Timeline, TrackGeometry};

struct ParallaxNode {
    element: HtmlElement,
    parent: Element,
    speed: f64,
}

/// DOM side of the horizontal timeline: pins the wrapper, measures layout
/// and writes transforms and reveal classes.
pub struct TimelineDom {
    container: HtmlElement,
    track: HtmlElement,
    parallax: Vec<ParallaxNode>,
    blocks: Vec<Element>,
    visible_class: String,
    timeline: Timeline,
    scrub: Scrub,
}

impl TimelineDom {
    /// `Ok(None)` when the container or the track is missing; the page then
    /// runs without any scroll-linked motion.
    pub fn attach(document: &Document, config: &Config) -> Result<Option<Self>, JsValue> {
        let selectors = &config.selectors;
        let (Some(container), Some(track)) = (
            query_html(document, &selectors.container)?,
            query_html(document, &selectors.track)?,
        ) else {
            return Ok(None);
        };

        if let Some(wrapper) = query_html(document, &selectors.wrapper)? {
            let style = wrapper.style();
            style.set_property("position", "sticky")?;
            style.set_property("top", "0")?;
        }

        let mut parallax = Vec::new();
        let nodes = document.query_selector_all(&selectors.parallax)?;
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let Some(parent) = element.parent_element() else {
                continue;
            };
            let raw = element.get_attribute(&selectors.speed_attribute);
            let speed = parse_speed(raw.as_deref()).unwrap_or_else(|| {
                log::warn!("parallax element has invalid speed {raw:?}; holding it still");
                0.0
            });
            parallax.push(ParallaxNode {
                element,
                parent,
                speed,
            });
        }

        let mut blocks = Vec::new();
        let nodes = document.query_selector_all(&selectors.block)?;
        for i in 0..nodes.length() {
            if let Some(block) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                blocks.push(block);
            }
        }

        log::info!(
            "timeline attached: {} parallax layers, {} blocks",
            parallax.len(),
            blocks.len()
        );
        Ok(Some(Self {
            container,
            track,
            parallax,
            blocks,
            visible_class: selectors.visible_class.clone(),
            timeline: Timeline::new(config.track.reveal_edge),
            scrub: Scrub::new(config.track.scrub_lag),
        }))
    }

    /// Re-measures the layout; called at setup and on every resize.
    pub fn refresh(&mut self, session: &mut Session, scroll_y: f64) {
        let track_left = self.track.get_bounding_client_rect().left();
        let content_width = self.track.scroll_width() as f64;

        let mut geometry = TrackGeometry {
            viewport_width: session.viewport.width,
            viewport_height: session.viewport.height,
            content_width,
            // The rect carries the translation applied last frame.
            track_left: track_left - self.scrub.current().unwrap_or(0.0),
            ..TrackGeometry::default()
        };
        // Extend the scroll range before measuring it.
        let min_height = geometry.min_container_height();
        if let Err(err) = self
            .container
            .style()
            .set_property("min-height", &format!("{min_height}px"))
        {
            log::warn!("failed to extend timeline container: {err:?}");
        }
        let rect = self.container.get_bounding_client_rect();
        geometry.container_top = rect.top() + scroll_y;
        geometry.container_height = rect.height();

        let layers = self
            .parallax
            .iter()
            .map(|node| ParallaxLayer::new(node.speed, span_in_track(&node.parent, track_left)))
            .collect();
        let block_lefts: Vec<f64> = self
            .blocks
            .iter()
            .map(|block| span_in_track(block, track_left).left)
            .collect();

        self.timeline.relayout(geometry, layers, &block_lefts);
        session.track = TrackProgress {
            max_offset: geometry.max_offset(),
            ..session.track
        };
    }

    /// Applies the timeline for the smoothed `scroll_y`.
    pub fn update(&mut self, track: &mut TrackProgress, scroll_y: f64, dt: f64) -> Result<(), JsValue> {
        let frame = self.timeline.on_scroll(track, scroll_y);

        let x = self.scrub.step(frame.translation, dt);
        set_translate_x(&self.track, x)?;
        for (node, offset) in self.parallax.iter().zip(&frame.parallax) {
            set_translate_x(&node.element, *offset)?;
        }
        for i in frame.revealed {
            if let Some(block) = self.blocks.get(i) {
                block.class_list().add_1(&self.visible_class)?;
            }
        }
        Ok(())
    }
}

fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Horizontal span relative to the track's left edge. Both rects carry the
/// track transform, so the difference is layout-only.
fn span_in_track(element: &Element, track_left: f64) -> Span {
    let rect = element.get_bounding_client_rect();
    Span {
        left: rect.left() - track_left,
        width: rect.width(),
    }
}

fn set_translate_x(element: &HtmlElement, x: f64) -> Result<(), JsValue> {
    element
        .style()
        .set_property("transform", &format!("translate3d({x}px, 0, 0)"))
}
