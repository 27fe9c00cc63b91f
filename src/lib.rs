//! Animated mist background and a scroll-driven horizontal timeline for a
//! single landing page.
//!
//! The plain modules hold all the math and state and build on any target.
//! Browser wiring is only compiled for wasm32.

pub mod config;
pub mod ease;
pub mod field;
pub mod reveal;
pub mod session;
pub mod smooth;
pub mod timeline;
pub mod title;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Window};

    use crate::config::{Config, CONFIG_ELEMENT_ID};
    use crate::session::{Session, Viewport};
    use crate::smooth::ScrollSmoother;

    mod frame;
    mod render;
    mod scroll;
    mod shader;
    mod title;

    pub use render::Generator;
    pub use scroll::TimelineDom;
    pub use title::TitleReveal;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if document.ready_state() != "loading" {
            return boot(&window, &document);
        }
        let target = document.clone();
        let on_ready = Closure::once(move || {
            if let Err(err) = boot(&window, &document) {
                log::error!("page setup failed: {err:?}");
            }
        });
        target.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
        Ok(())
    }

    /// Everything the frame driver and the resize listener share.
    struct Page {
        window: Window,
        session: Session,
        generator: Option<Generator>,
        title: Option<TitleReveal>,
        timeline: Option<TimelineDom>,
        smoother: ScrollSmoother,
        started_at: f64,
        last_frame: Option<f64>,
    }

    impl Page {
        fn resize(&mut self) -> Result<(), JsValue> {
            let viewport = viewport(&self.window)?;
            self.session.resize(viewport.width, viewport.height);
            if let Some(generator) = &self.generator {
                generator.resize(&self.session.viewport, &self.session.render);
            }
            if let Some(timeline) = &mut self.timeline {
                let scroll_y = self.window.scroll_y()?;
                timeline.refresh(&mut self.session, scroll_y);
            }
            Ok(())
        }

        fn tick(&mut self, now: f64) -> Result<(), JsValue> {
            let dt = self.last_frame.map_or(0.0, |last| (now - last) / 1000.0);
            self.last_frame = Some(now);
            let elapsed = (now - self.started_at).max(0.0) / 1000.0;

            if let Some(timeline) = &mut self.timeline {
                let scroll_y = self.smoother.step(self.window.scroll_y()?, dt);
                timeline.update(&mut self.session.track, scroll_y, dt)?;
            }
            if let Some(title) = &mut self.title {
                title.update(elapsed)?;
            }
            if let Some(generator) = &self.generator {
                self.session.advance(elapsed);
                generator.render(&self.session.render);
            }
            Ok(())
        }
    }

    fn boot(window: &Window, document: &Document) -> Result<(), JsValue> {
        let config = load_config(document);
        let started_at = window.performance().ok_or("no performance clock")?.now();
        let session = Session::new(viewport(window)?, config.render.pixel_ratio);

        let generator = match Generator::attach(document, &config.selectors.canvas) {
            Ok(Some(generator)) => Some(generator),
            Ok(None) => None,
            Err(err) => {
                log::error!("mist background disabled: {err:?}");
                None
            }
        };
        let title = TitleReveal::split(document, &config.selectors, &config.title)?;
        let timeline = TimelineDom::attach(document, &config)?;
        log::info!(
            "page ready: background={} title glyphs={} timeline={}",
            generator.is_some(),
            title.as_ref().map_or(0, TitleReveal::glyph_count),
            timeline.is_some()
        );

        let page = Rc::new(RefCell::new(Page {
            window: window.clone(),
            session,
            generator,
            title,
            timeline,
            smoother: ScrollSmoother::new(config.scroll.lerp),
            started_at,
            last_frame: None,
        }));
        page.borrow_mut().resize()?;

        {
            let page = page.clone();
            on_layout_change(window, move || {
                if let Err(err) = page.borrow_mut().resize() {
                    log::warn!("resize failed: {err:?}");
                }
            })?;
        }

        frame::run(move |now| {
            if let Err(err) = page.borrow_mut().tick(now) {
                log::warn!("frame failed: {err:?}");
            }
        })
    }

    /// Runs `callback` whenever the layout may have changed: on resize, and
    /// once late fonts and images have loaded.
    pub fn on_layout_change<F>(window: &Window, callback: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut()>::new(callback);
        for event in LAYOUT_EVENTS {
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        }
        callback.forget();
        Ok(())
    }

    const LAYOUT_EVENTS: [&str; 2] = ["resize", "load"];

    fn load_config(document: &Document) -> Config {
        let Some(src) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Config::default();
        };
        Config::from_json(&src).unwrap_or_else(|err| {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            Config::default()
        })
    }

    fn viewport(window: &Window) -> Result<Viewport, JsValue> {
        let width = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
        let height = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
        Ok(Viewport::new(width, height))
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{on_layout_change, Generator, TimelineDom, TitleReveal};
