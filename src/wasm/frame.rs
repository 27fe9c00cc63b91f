use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Calls `tick` once per display refresh with the frame timestamp in
/// milliseconds, for the lifetime of the page.
pub fn run<F>(mut tick: F) -> Result<(), JsValue>
where
    F: FnMut(f64) + 'static,
{
    // The slot holds the frame closure so it can re-arm itself. The Rc cycle
    // is never broken; the loop lives until the page is torn down.
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let rearm = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        tick(now);
        if let Some(callback) = rearm.borrow().as_ref() {
            if let Err(err) = request(callback) {
                log::error!("failed to schedule frame: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let first = slot.borrow();
    request(first.as_ref().ok_or("frame callback missing")?)?;
    Ok(())
}

fn request(callback: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
