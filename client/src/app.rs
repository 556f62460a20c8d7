use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, Element, Event,
    HtmlButtonElement, HtmlCanvasElement, HtmlInputElement, HtmlSelectElement, PointerEvent,
    Window,
};

use sketchboard_core::{Board, BoardError, FontStatus, Tool, ToolChange};

use crate::dom::{
    debug_enabled, event_to_point, get_element, optional_element, read_config, set_status,
    set_visible, trigger_download, viewport_size,
};
use crate::fonts::load_font;
use crate::surface::CanvasSurface;

type SharedBoard = Rc<RefCell<Board<CanvasSurface>>>;

/// Controls that only exist on pages with the matching feature.
#[derive(Clone)]
struct AuxControls {
    text_input: Option<HtmlInputElement>,
    font_selector: Option<HtmlSelectElement>,
}

impl AuxControls {
    fn show_text_controls(&self, visible: bool) {
        if let Some(input) = &self.text_input {
            set_visible(input, visible);
        }
        if let Some(selector) = &self.font_selector {
            set_visible(selector, visible);
        }
    }
}

fn is_touch_event(event: &PointerEvent) -> bool {
    event.pointer_type() == "touch"
}

fn tool_radios(document: &Document) -> Result<Vec<HtmlInputElement>, JsValue> {
    let nodes = document.query_selector_all("input[name='tool']")?;
    let mut radios = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(radio) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        {
            radios.push(radio);
        }
    }
    Ok(radios)
}

fn apply_tool_change(result: Result<ToolChange, BoardError>, aux: &AuxControls) {
    match result {
        Ok(change) => aux.show_text_controls(change.text_controls_visible),
        Err(error) => log::warn!("Tool change rejected: {error}"),
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let level = if debug_enabled(&window) {
        log::Level::Trace
    } else {
        log::Level::Info
    };
    if let Err(error) = console_log::init_with_level(level) {
        log::warn!("Logger already initialized: {error}");
    }

    let canvas: HtmlCanvasElement = get_element(&document, "drawing-canvas")?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    let config = read_config(&canvas);
    let family = config.font_family.clone();
    log::debug!("config={config:?}");

    let board: SharedBoard = Rc::new(RefCell::new(Board::new(
        CanvasSurface::new(canvas, ctx),
        config,
    )));

    let window_cb = window.clone();
    let document_cb = document.clone();
    load_font(&document, &family, move |font| {
        if let Err(error) = start_app(&window_cb, &document_cb, board, font) {
            log::error!("Failed to start: {error:?}");
        }
    });

    Ok(())
}

fn start_app(
    window: &Window,
    document: &Document,
    board: SharedBoard,
    font: FontStatus,
) -> Result<(), JsValue> {
    let canvas = board.borrow().surface().canvas.clone();
    let features = board.borrow().config().features.clone();

    let color_input: HtmlInputElement = get_element(document, "color-picker")?;
    let width_input: HtmlInputElement = get_element(document, "line-thickness")?;
    let clear_button: HtmlButtonElement = get_element(document, "clear-button")?;
    let save_button: HtmlButtonElement = get_element(document, "save-button")?;
    let status_el: Element = get_element(document, "status")?;
    let sunset_button: Option<HtmlButtonElement> = optional_element(document, "sunset-button");
    let rotation_selector: Option<HtmlSelectElement> =
        optional_element(document, "rotation-selector");
    let aux = AuxControls {
        text_input: optional_element(document, "text-input"),
        font_selector: optional_element(document, "font-selector"),
    };
    let radios = tool_radios(document)?;

    {
        let mut board = board.borrow_mut();
        board.set_color(&color_input.value());
        board.set_width(&width_input.value());
        if let Some(selector) = &aux.font_selector {
            board.set_font_family(&selector.value());
        }
        let (width, height) = viewport_size(window);
        board.initialize(width, height, font);
        if let Some(input) = &aux.text_input {
            board.set_text(&input.value());
        }
        if let Some(selector) = &rotation_selector {
            board.set_rotation(&selector.value());
        }
    }

    aux.show_text_controls(false);
    for radio in &radios {
        if let Ok(tool) = radio.value().parse::<Tool>() {
            radio.set_disabled(!features.allows(tool));
        }
        if radio.checked() && !radio.disabled() {
            let change = board.borrow_mut().select_tool(&radio.value());
            apply_tool_change(change, &aux);
        }
    }
    if let Some(button) = &sunset_button {
        set_visible(button, features.sunset);
    }
    if let Some(selector) = &rotation_selector {
        set_visible(selector, features.rotation);
    }
    set_status(&status_el, "ready", "Ready");

    {
        let down_board = board.clone();
        let down_canvas = canvas.clone();
        let touch = features.touch;
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if is_touch_event(&event) && !touch {
                return;
            }
            event.prevent_default();
            let Some(point) = event_to_point(&down_canvas, event.client_x(), event.client_y())
            else {
                return;
            };
            let _ = down_canvas.set_pointer_capture(event.pointer_id());
            down_board.borrow_mut().pointer_down(point);
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_board = board.clone();
        let move_canvas = canvas.clone();
        let touch = features.touch;
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if is_touch_event(&event) && !touch {
                return;
            }
            let Some(point) = event_to_point(&move_canvas, event.client_x(), event.client_y())
            else {
                return;
            };
            move_board.borrow_mut().pointer_move(point);
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    for kind in ["pointerup", "pointercancel"] {
        let up_board = board.clone();
        let up_canvas = canvas.clone();
        let onup = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let _ = up_canvas.release_pointer_capture(event.pointer_id());
            up_board.borrow_mut().pointer_up();
        });
        canvas.add_event_listener_with_callback(kind, onup.as_ref().unchecked_ref())?;
        onup.forget();
    }

    {
        let oncontextmenu = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
        });
        canvas.add_event_listener_with_callback(
            "contextmenu",
            oncontextmenu.as_ref().unchecked_ref(),
        )?;
        oncontextmenu.forget();
    }

    if features.touch {
        let _ = canvas.style().set_property("touch-action", "none");
        let ontouchmove = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            ontouchmove.as_ref().unchecked_ref(),
            &options,
        )?;
        ontouchmove.forget();
    }

    {
        let color_board = board.clone();
        let color_input_cb = color_input.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            color_board.borrow_mut().set_color(&color_input_cb.value());
        });
        color_input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    {
        let width_board = board.clone();
        let width_input_cb = width_input.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            width_board.borrow_mut().set_width(&width_input_cb.value());
        });
        width_input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    for radio in &radios {
        let tool_board = board.clone();
        let radio_cb = radio.clone();
        let aux = aux.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            let change = tool_board.borrow_mut().select_tool(&radio_cb.value());
            apply_tool_change(change, &aux);
        });
        radio.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    if let Some(text_input) = &aux.text_input {
        let text_board = board.clone();
        let text_input_cb = text_input.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            text_board.borrow_mut().set_text(&text_input_cb.value());
        });
        text_input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    if let Some(font_selector) = &aux.font_selector {
        let font_board = board.clone();
        let font_selector_cb = font_selector.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            font_board
                .borrow_mut()
                .set_font_family(&font_selector_cb.value());
        });
        font_selector
            .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    if let Some(rotation_selector) = &rotation_selector {
        let rotation_board = board.clone();
        let rotation_selector_cb = rotation_selector.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            rotation_board
                .borrow_mut()
                .set_rotation(&rotation_selector_cb.value());
        });
        rotation_selector
            .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    if let Some(sunset_button) = &sunset_button {
        let sunset_board = board.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            if let Err(error) = sunset_board.borrow_mut().cycle_background() {
                log::warn!("{error}");
            }
        });
        sunset_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let clear_board = board.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            clear_board.borrow_mut().clear();
        });
        clear_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let save_board = board.clone();
        let document = document.clone();
        let status_el = status_el.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let result = save_board.borrow().export();
            match result {
                Ok(download) => {
                    if let Err(error) = trigger_download(&document, &download) {
                        log::error!("Download failed: {error:?}");
                        set_status(&status_el, "error", "Could not start the download");
                        return;
                    }
                    log::info!("Exported {}", download.filename);
                    set_status(&status_el, "ready", &format!("Saved {}", download.filename));
                }
                Err(error) => {
                    log::error!("{error}");
                    set_status(&status_el, "error", &error.to_string());
                }
            }
        });
        save_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let resize_board = board.clone();
        let window_cb = window.clone();
        let onresize = Closure::<dyn FnMut()>::new(move || {
            let (width, height) = viewport_size(&window_cb);
            resize_board.borrow_mut().resize(width, height);
        });
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }

    Ok(())
}
