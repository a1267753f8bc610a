use app_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const GREETING_ID: &str = "greeting";
const GREETING_TEXT: &str = "Hello!";

/// Size the canvas backing store to CSS pixels * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let viewport = Viewport::from_css(rect.width(), rect.height(), w.device_pixel_ratio());
        canvas.set_width(viewport.width);
        canvas.set_height(viewport.height);
    }
}

/// Keep the backing store in sync across window resizes.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let canvas = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            sync_canvas_backing_size(&canvas);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Set the greeting text, creating the element if the page shell lacks one.
pub fn mount_greeting(document: &web::Document) -> anyhow::Result<()> {
    let el = match document.get_element_by_id(GREETING_ID) {
        Some(el) => el,
        None => {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            el.set_id(GREETING_ID);
            if let Some(body) = document.body() {
                body.append_child(&el)
                    .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            }
            el
        }
    };
    el.set_text_content(Some(GREETING_TEXT));
    Ok(())
}
