//! WebAssembly entry point: binds a sketchpad to host page markup.

use kurbo::{Point, Rect};
use sketchpad_core::{
    CanvasSurface, MountSelectors, SizeIndicator, SketchError, SketchEvent, SketchInstance,
    Sketchpad, SketchpadConfig,
};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event, EventTarget, HtmlCanvasElement,
    HtmlElement, HtmlInputElement, MouseEvent, Window,
};

/// [`CanvasSurface`] over a browser 2D rendering context.
pub struct ContextSurface {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface for ContextSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ctx.begin_path();
        // Only fails for a negative radius.
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_err() {
            return;
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: &str) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }
}

/// Size indicator backed by a DOM element's text.
pub struct ElementIndicator(HtmlElement);

impl SizeIndicator for ElementIndicator {
    fn set_text(&mut self, text: &str) {
        self.0.set_inner_text(text);
    }
}

type WebSketchpad = Sketchpad<ContextSurface, ElementIndicator>;

/// An event listener that is removed again when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// A sketchpad bound to page markup. Dropping it detaches every listener.
pub struct MountedSketchpad {
    sketchpad: Rc<RefCell<WebSketchpad>>,
    listeners: Vec<Listener>,
}

impl MountedSketchpad {
    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        to_event: impl Fn(&Event) -> Option<SketchEvent> + 'static,
    ) -> Result<(), SketchError> {
        let sketchpad = Rc::clone(&self.sketchpad);
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(event) = to_event(&event) {
                sketchpad.borrow_mut().handle(event);
            }
        });
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|e| SketchError::Host(format!("cannot listen for {kind}: {e:?}")))?;
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }
}

impl Drop for MountedSketchpad {
    fn drop(&mut self) {
        log::info!("Detaching {} sketchpad listeners", self.listeners.len());
    }
}

fn query(document: &Document, selector: &str) -> Result<Element, SketchError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| SketchError::MissingElement(selector.to_string()))
}

fn query_as<T: JsCast>(document: &Document, selector: &str) -> Result<T, SketchError> {
    query(document, selector)?
        .dyn_into::<T>()
        .map_err(|_| SketchError::MissingElement(selector.to_string()))
}

fn pointer_position(event: &Event) -> Option<Point> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(
        f64::from(event.offset_x()),
        f64::from(event.offset_y()),
    ))
}

/// Every host object a sketchpad binds to, resolved up front.
struct MountHandles {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size_label: HtmlElement,
    increase: Element,
    decrease: Element,
    clear: Element,
    color: HtmlInputElement,
}

impl MountHandles {
    /// Look up every element named by `selectors` and the canvas context.
    /// Fails on the first one that is missing.
    fn resolve(document: &Document, selectors: &MountSelectors) -> Result<Self, SketchError> {
        let canvas: HtmlCanvasElement = query_as(document, &selectors.canvas)?;
        let size_label = query_as(document, &selectors.size_label)?;
        let increase = query(document, &selectors.increase)?;
        let decrease = query(document, &selectors.decrease)?;
        let clear = query(document, &selectors.clear)?;
        let color = query_as(document, &selectors.color)?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(SketchError::MissingContext)?;
        let window = web_sys::window().ok_or_else(|| SketchError::Host("no window".to_string()))?;
        Ok(Self {
            window,
            canvas,
            ctx,
            size_label,
            increase,
            decrease,
            clear,
            color,
        })
    }
}

/// Bind a sketchpad to the page.
///
/// Every element named by the config's selectors must exist; if any is
/// missing, nothing is attached.
pub fn mount(
    document: &Document,
    instance: &SketchInstance,
    config: SketchpadConfig,
) -> Result<MountedSketchpad, SketchError> {
    instance.validate()?;
    let MountHandles {
        window,
        canvas,
        ctx,
        size_label,
        increase,
        decrease,
        clear,
        color,
    } = MountHandles::resolve(document, &config.selectors)?;

    canvas.set_width(instance.width);
    canvas.set_height(instance.height);

    let release_on_blur = config.release_on_blur;
    let surface = ContextSurface {
        ctx,
        width: instance.width,
        height: instance.height,
    };
    let sketchpad = Sketchpad::with_config(surface, ElementIndicator(size_label), config)?;
    let mut mounted = MountedSketchpad {
        sketchpad: Rc::new(RefCell::new(sketchpad)),
        listeners: Vec::new(),
    };

    mounted.listen(&canvas, "mousedown", |e| {
        pointer_position(e).map(SketchEvent::PointerDown)
    })?;
    mounted.listen(&canvas, "mousemove", |e| {
        pointer_position(e).map(SketchEvent::PointerMove)
    })?;
    mounted.listen(&window, "mouseup", |_| Some(SketchEvent::PointerUp))?;
    mounted.listen(&increase, "click", |_| Some(SketchEvent::SizeUp))?;
    mounted.listen(&decrease, "click", |_| Some(SketchEvent::SizeDown))?;
    mounted.listen(&clear, "click", |_| Some(SketchEvent::Clear))?;
    let input = color.clone();
    mounted.listen(&color, "change", move |_| {
        Some(SketchEvent::ColorChange(input.value()))
    })?;
    if release_on_blur {
        mounted.listen(&window, "blur", |_| Some(SketchEvent::PointerCancel))?;
    }

    log::info!(
        "Mounted sketchpad {:?} ({}x{})",
        instance.title,
        instance.width,
        instance.height
    );
    Ok(mounted)
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedSketchpad>> = const { RefCell::new(None) };
}

/// Mount the sketchpad described by the host's instance record.
///
/// `config_json` may be omitted to use the default markup selectors and brush
/// limits. Replaces any sketchpad mounted earlier.
#[wasm_bindgen(js_name = initSketchpad)]
pub fn init(instance_json: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let result = (|| {
        let instance = SketchInstance::from_json(instance_json)?;
        let config = match config_json {
            Some(json) => SketchpadConfig::from_json(&json)?,
            None => SketchpadConfig::default(),
        };
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| SketchError::Host("no document".to_string()))?;
        teardown();
        mount(&document, &instance, config)
    })();

    match result {
        Ok(mounted) => {
            MOUNTED.with(|slot| *slot.borrow_mut() = Some(mounted));
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to mount sketchpad: {}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

/// Detach the mounted sketchpad, if any.
#[wasm_bindgen(js_name = teardownSketchpad)]
pub fn teardown() {
    let mounted = MOUNTED.with(|slot| slot.borrow_mut().take());
    drop(mounted);
}

/// Module start: logging, panic hook, and teardown on page unload.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Sketchpad module loaded");

    if let Some(window) = web_sys::window() {
        let onpagehide = Closure::<dyn FnMut(Event)>::new(move |_| teardown());
        if window
            .add_event_listener_with_callback("pagehide", onpagehide.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Could not register pagehide handler");
        }
        onpagehide.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const MARKUP: &str = r#"
        <canvas class="canvas"></canvas>
        <span class="size"></span>
        <button data-action="increase">+</button>
        <button data-action="decrease">-</button>
        <button data-action="clear">Clear</button>
        <input type="color" data-action="color">
    "#;

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Attach `markup` under a fresh container and return selectors scoped to it.
    fn host_page(id: &str, markup: &str) -> (Element, MountSelectors) {
        let document = document();
        let container = document.create_element("div").unwrap();
        container.set_id(id);
        container.set_inner_html(markup);
        document.body().unwrap().append_child(&container).unwrap();

        let scoped = |selector: &str| format!("#{id} {selector}");
        let selectors = MountSelectors {
            canvas: scoped(".canvas"),
            size_label: scoped(".size"),
            increase: scoped("[data-action=\"increase\"]"),
            decrease: scoped("[data-action=\"decrease\"]"),
            clear: scoped("[data-action=\"clear\"]"),
            color: scoped("[data-action=\"color\"]"),
        };
        (container, selectors)
    }

    fn config(selectors: MountSelectors) -> SketchpadConfig {
        SketchpadConfig {
            selectors,
            ..SketchpadConfig::default()
        }
    }

    #[wasm_bindgen_test]
    fn test_missing_control_fails_before_binding() {
        let markup = MARKUP.replace(r#"<button data-action="clear">Clear</button>"#, "");
        let (container, selectors) = host_page("missing-clear", &markup);
        let clear = selectors.clear.clone();

        let resolved = MountHandles::resolve(&document(), &selectors);
        assert!(matches!(resolved, Err(SketchError::MissingElement(ref s)) if *s == clear));

        let mounted = mount(&document(), &SketchInstance::default(), config(selectors));
        assert!(matches!(mounted, Err(SketchError::MissingElement(_))));
        container.remove();
    }

    #[wasm_bindgen_test]
    fn test_mount_binds_controls_until_dropped() {
        let (container, selectors) = host_page("full-markup", MARKUP);
        let increase: HtmlElement = query_as(&document(), &selectors.increase).unwrap();
        let label: HtmlElement = query_as(&document(), &selectors.size_label).unwrap();

        let mounted = mount(&document(), &SketchInstance::default(), config(selectors)).unwrap();
        assert_eq!(mounted.listeners.len(), 7);
        assert_eq!(label.inner_text(), "5");

        increase.click();
        assert_eq!(label.inner_text(), "10");

        drop(mounted);
        increase.click();
        assert_eq!(label.inner_text(), "10");
        container.remove();
    }
}
