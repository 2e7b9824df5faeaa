//! Browser host (feature `web`).
//!
//! [`mount`] attaches a [`SceneEngine`] to a `<canvas>` by id, sizes it to
//! the window, registers the resize and pointer listeners, fetches the
//! scene asset and drives the engine from `requestAnimationFrame`.
//! [`WebScene::unmount`] removes every listener and cancels the pending
//! frame; callbacks only hold weak references, so nothing outlives the
//! handle.

mod fetch;
mod listeners;
mod surface;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub use surface::Canvas2dSurface;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, WheelEvent, Window};
use web_time::Instant;

use self::listeners::EventListener;
use crate::engine::{FrameStatus, SceneEngine};
use crate::input::{InputEvent, InputProcessor, MouseButton};
use crate::options::Options;
use crate::scene::InteractiveAction;

/// Wheel `deltaY` units per zoom step.
const WHEEL_UNITS_PER_STEP: f32 = 100.0;

/// State shared between the handle and the DOM callbacks.
struct Host {
    engine: RefCell<SceneEngine<Canvas2dSurface>>,
    input: RefCell<InputProcessor>,
    listeners: RefCell<Vec<EventListener>>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    /// Id of the pending `requestAnimationFrame`, if any.
    pending_frame: Cell<Option<i32>>,
}

impl Host {
    fn shutdown(&self) {
        self.engine.borrow_mut().teardown();
        self.listeners.borrow_mut().clear();
        if let (Some(id), Some(window)) =
            (self.pending_frame.take(), web_sys::window())
        {
            let _ = window.cancel_animation_frame(id);
        }
        drop(self.frame.borrow_mut().take());
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Handle to a mounted scene.
#[wasm_bindgen]
pub struct WebScene {
    host: Rc<Host>,
}

#[wasm_bindgen]
impl WebScene {
    /// Stop the frame loop and remove every registered listener.
    /// Idempotent.
    pub fn unmount(&self) {
        if self.host.engine.borrow().is_alive() {
            self.host.shutdown();
            log::info!("scene unmounted");
        }
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.host.engine.borrow().fps()
    }
}

/// JS entry point: mount on `canvas_id`, optionally with a TOML options
/// document. Returns `undefined` if the canvas is missing or the options
/// are invalid.
#[wasm_bindgen(js_name = mount)]
#[must_use]
pub fn mount_js(canvas_id: &str, options_toml: Option<String>) -> Option<WebScene> {
    let options = match options_toml.as_deref().map(Options::from_toml) {
        None => Options::default(),
        Some(Ok(options)) => options,
        Some(Err(e)) => {
            init_logging();
            log::error!("invalid scene options: {e}");
            return None;
        }
    };
    mount(canvas_id, options)
}

/// Mount a scene on the canvas with id `canvas_id`.
///
/// A missing canvas (or a canvas without a 2D context) is not an error:
/// it is logged and nothing else happens.
pub fn mount(canvas_id: &str, options: Options) -> Option<WebScene> {
    init_logging();

    let window = web_sys::window()?;
    let Some(canvas) = window
        .document()
        .and_then(|doc| doc.get_element_by_id(canvas_id))
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::warn!("no canvas with id {canvas_id:?}; nothing mounted");
        return None;
    };
    let surface = match Canvas2dSurface::new(canvas.clone()) {
        Ok(surface) => surface,
        Err(e) => {
            log::warn!("canvas {canvas_id:?} has no 2d context: {e:?}");
            return None;
        }
    };

    let asset_path = options.scene.asset_path.clone();
    let mut engine = match SceneEngine::new(options, surface) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("cannot build scene: {e}");
            return None;
        }
    };
    if let Some((width, height)) = viewport_size(&window) {
        let _ = engine.resize(width, height);
    }

    let host = Rc::new(Host {
        engine: RefCell::new(engine),
        input: RefCell::new(InputProcessor::new()),
        listeners: RefCell::new(Vec::new()),
        frame: RefCell::new(None),
        pending_frame: Cell::new(None),
    });

    if let Err(e) = register_listeners(&host, &window, &canvas) {
        log::error!("failed to register listeners: {e:?}");
        host.shutdown();
        return None;
    }
    start_frame_loop(&host);
    load_asset(&host, asset_path);

    log::info!("scene mounted on {canvas_id:?}");
    Some(WebScene { host })
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

fn viewport_size(window: &Window) -> Option<(u32, u32)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as u32, height as u32))
}

// ── Input ──

fn dispatch(host: &Host, event: InputEvent) {
    let Some(command) = host.input.borrow_mut().handle_event(event) else {
        return;
    };
    let action = host.engine.borrow_mut().execute(command);
    if let Some(action) = action {
        perform(&action);
    }
}

fn perform(action: &InteractiveAction) {
    match action {
        InteractiveAction::OpenUrl(url) => {
            log::info!("opening {url}");
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(url, "_blank");
            }
        }
    }
}

fn pointer_events(event: &Event) -> Option<(MouseEvent, InputEvent)> {
    let mouse = event.dyn_ref::<MouseEvent>()?.clone();
    let shift = InputEvent::ModifiersChanged {
        shift: mouse.shift_key(),
    };
    Some((mouse, shift))
}

/// Wrap `handler` so it only runs while the host is alive.
fn with_host(
    host: &Rc<Host>,
    mut handler: impl FnMut(&Host, Event) + 'static,
) -> impl FnMut(Event) + 'static {
    let weak: Weak<Host> = Rc::downgrade(host);
    move |event| {
        if let Some(host) = weak.upgrade() {
            handler(&host, event);
        }
    }
}

fn register_listeners(
    host: &Rc<Host>,
    window: &Window,
    canvas: &HtmlCanvasElement,
) -> Result<(), wasm_bindgen::JsValue> {
    let mut listeners = Vec::with_capacity(7);

    listeners.push(EventListener::new(
        window,
        "resize",
        with_host(host, |host, _| {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some((width, height)) = viewport_size(&window) {
                dispatch(host, InputEvent::Resized { width, height });
            }
        }),
    )?);

    listeners.push(EventListener::new(
        canvas,
        "mousedown",
        with_host(host, |host, event| {
            if let Some((mouse, shift)) = pointer_events(&event) {
                dispatch(host, shift);
                dispatch(
                    host,
                    InputEvent::CursorMoved {
                        x: mouse.offset_x() as f32,
                        y: mouse.offset_y() as f32,
                    },
                );
                dispatch(
                    host,
                    InputEvent::MouseButton {
                        button: MouseButton::from_dom(mouse.button()),
                        pressed: true,
                    },
                );
            }
        }),
    )?);

    listeners.push(EventListener::new(
        canvas,
        "mousemove",
        with_host(host, |host, event| {
            if let Some((mouse, shift)) = pointer_events(&event) {
                dispatch(host, shift);
                dispatch(
                    host,
                    InputEvent::CursorMoved {
                        x: mouse.offset_x() as f32,
                        y: mouse.offset_y() as f32,
                    },
                );
            }
        }),
    )?);

    listeners.push(EventListener::new(
        canvas,
        "mouseleave",
        with_host(host, |host, _| dispatch(host, InputEvent::PointerLeft)),
    )?);

    listeners.push(EventListener::new(
        window,
        "mouseup",
        with_host(host, |host, event| {
            if let Some((mouse, _)) = pointer_events(&event) {
                dispatch(
                    host,
                    InputEvent::MouseButton {
                        button: MouseButton::from_dom(mouse.button()),
                        pressed: false,
                    },
                );
            }
        }),
    )?);

    listeners.push(EventListener::new(
        canvas,
        "click",
        with_host(host, |host, event| {
            if let Some((mouse, _)) = pointer_events(&event) {
                dispatch(
                    host,
                    InputEvent::Click {
                        x: mouse.offset_x() as f32,
                        y: mouse.offset_y() as f32,
                    },
                );
            }
        }),
    )?);

    listeners.push(EventListener::new(
        canvas,
        "wheel",
        with_host(host, |host, event| {
            if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                event.prevent_default();
                let delta = -(wheel.delta_y() as f32) / WHEEL_UNITS_PER_STEP;
                dispatch(host, InputEvent::Scroll { delta });
            }
        }),
    )?);

    host.listeners.borrow_mut().extend(listeners);
    Ok(())
}

// ── Frame loop & asset load ──

fn start_frame_loop(host: &Rc<Host>) {
    let weak = Rc::downgrade(host);
    let callback = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
        let Some(host) = weak.upgrade() else {
            return;
        };
        host.pending_frame.set(None);
        let status = host.engine.borrow_mut().tick(Instant::now());
        match status {
            FrameStatus::Continue => request_frame(&host),
            FrameStatus::Stopped => log::debug!("frame loop stopped"),
        }
    });
    *host.frame.borrow_mut() = Some(callback);
    request_frame(host);
}

fn request_frame(host: &Host) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let frame = host.frame.borrow();
    let Some(callback) = frame.as_ref() else {
        return;
    };
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => host.pending_frame.set(Some(id)),
        Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
    }
}

fn load_asset(host: &Rc<Host>, path: String) {
    log::info!("fetching scene asset {path}");
    let weak = Rc::downgrade(host);
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch::fetch_asset(&path).await;
        match weak.upgrade() {
            Some(host) => host.engine.borrow_mut().on_asset_loaded(result),
            None => log::debug!("scene unmounted before {path} arrived"),
        }
    });
}
