#![cfg(target_arch = "wasm32")]

use mistline::config::Config;
use mistline::session::{Session, Viewport};
use mistline::{on_layout_change, Generator, TimelineDom, TitleReveal};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_silent_no_op() {
    let generator = Generator::attach(&document(), "#no-such-canvas").unwrap();
    assert!(generator.is_none());
}

#[wasm_bindgen_test]
fn missing_track_skips_timeline_wiring() {
    let doc = document();
    let container = doc.create_element("section").unwrap();
    container.set_id("timeline-container");
    doc.body().unwrap().append_child(&container).unwrap();

    let timeline = TimelineDom::attach(&doc, &Config::default()).unwrap();
    assert!(timeline.is_none());

    container.remove();
}

#[wasm_bindgen_test]
fn title_is_split_into_glyphs_in_their_opening_pose() {
    let doc = document();
    let title = doc.create_element("h1").unwrap();
    title.set_class_name("split-text");
    title.set_text_content(Some("Mist over"));
    doc.body().unwrap().append_child(&title).unwrap();

    let config = Config::default();
    let reveal = TitleReveal::split(&doc, &config.selectors, &config.title)
        .unwrap()
        .expect("title glyphs");
    assert_eq!(reveal.glyph_count(), 8);
    assert_eq!(title.text_content().unwrap(), "Mist over");

    let glyphs = title.query_selector_all(".char").unwrap();
    assert_eq!(glyphs.length(), 8);
    let first = glyphs
        .item(0)
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    assert_eq!(first.style().get_property_value("opacity").unwrap(), "0");

    title.remove();
}

fn html(tag: &str, id: &str, style: &str) -> HtmlElement {
    let el = document()
        .create_element(tag)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    if !id.is_empty() {
        el.set_id(id);
    }
    el.set_attribute("style", style).unwrap();
    el
}

fn style_of(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap()
}

#[wasm_bindgen_test]
fn timeline_pins_scrubs_and_reveals_once() {
    let doc = document();
    let container = html("section", "timeline-container", "");
    let wrapper = html("div", "timeline-wrapper", "height: 600px; overflow: hidden");
    let track = html("div", "track", "display: flex; width: max-content");
    let blocks: Vec<Element> = (0..4)
        .map(|_| {
            let block = html("article", "", "flex: none; width: 800px; height: 100px");
            block.set_class_name("memory-block");
            track.append_child(&block).unwrap();
            block.into()
        })
        .collect();
    wrapper.append_child(&track).unwrap();
    container.append_child(&wrapper).unwrap();
    doc.body().unwrap().append_child(&container).unwrap();

    let mut timeline = TimelineDom::attach(&doc, &Config::default())
        .unwrap()
        .expect("timeline wiring");
    assert_eq!(style_of(&wrapper, "position"), "sticky");

    // 4 x 800px track in an 800px viewport: 2400px of horizontal travel
    let mut session = Session::new(Viewport::new(800.0, 600.0), 1.0);
    let scroll_y = web_sys::window().unwrap().scroll_y().unwrap();
    timeline.refresh(&mut session, scroll_y);
    assert_eq!(session.track.max_offset, 2400.0);
    assert_eq!(style_of(&container, "min-height"), "3000px");

    let top = container.get_bounding_client_rect().top() + scroll_y;
    timeline.update(&mut session.track, top + 1200.0, 0.0).unwrap();
    assert!(
        style_of(&track, "transform").starts_with("translate3d(-1200px"),
        "{}",
        style_of(&track, "transform")
    );
    assert_eq!(session.track.offset, 1200.0);
    let visible: Vec<bool> = blocks
        .iter()
        .map(|b| b.class_list().contains("is-visible"))
        .collect();
    assert_eq!(visible, vec![true, true, true, false]);

    // scrolling back above the container keeps what was revealed
    timeline.update(&mut session.track, top - 500.0, 0.0).unwrap();
    assert_eq!(session.track.offset, 0.0);
    for block in &blocks[..3] {
        assert!(block.class_list().contains("is-visible"));
        assert_eq!(block.class_list().length(), 2);
    }
    assert!(!blocks[3].class_list().contains("is-visible"));

    container.remove();
}

#[wasm_bindgen_test]
fn resizing_a_canvas_twice_matches_resizing_once() {
    let doc = document();
    let canvas = doc
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id("mist-resize-canvas");
    doc.body().unwrap().append_child(&canvas).unwrap();

    let generator = match Generator::attach(&doc, "#mist-resize-canvas") {
        Ok(Some(generator)) => generator,
        Ok(None) => panic!("canvas not found"),
        Err(_) => {
            // browser without WebGL2: nothing to size
            canvas.remove();
            return;
        }
    };

    let mut session = Session::new(Viewport::new(800.0, 600.0), 1.0);
    session.resize(640.0, 480.0);
    generator.resize(&session.viewport, &session.render);
    let once = (canvas.width(), canvas.height(), canvas.style().get_property_value("width").unwrap());

    session.resize(640.0, 480.0);
    generator.resize(&session.viewport, &session.render);
    let twice = (canvas.width(), canvas.height(), canvas.style().get_property_value("width").unwrap());

    assert_eq!(once, twice);
    assert_eq!((twice.0, twice.1), (640, 480));
    assert_eq!(twice.2, "640px");

    canvas.remove();
}

#[wasm_bindgen_test]
fn layout_is_remeasured_after_load_and_resize() {
    let window = web_sys::window().unwrap();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    on_layout_change(&window, move || counter.set(counter.get() + 1)).unwrap();

    window
        .dispatch_event(&web_sys::Event::new("load").unwrap())
        .unwrap();
    assert_eq!(calls.get(), 1);
    window
        .dispatch_event(&web_sys::Event::new("resize").unwrap())
        .unwrap();
    assert_eq!(calls.get(), 2);
}
