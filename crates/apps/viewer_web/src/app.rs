//! Wasm entry points. The host page forwards pointer events, drives the
//! animation loop with `requestAnimationFrame`, and re-reads the panel HTML
//! whenever the selection revision moves.

use std::cell::RefCell;

use console_error_panic_hook::set_once;
use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use boundaries::BoundarySet;
use foundation::math::Rotation;
use foundation::math::Vec2;
use rankings::{CountryRecord, extract_text, fallback_rankings, parse_rankings, request_body};
use render::globe::{RenderInput, base_projection, render};
use runtime::AutoSpin;
use scene::{InteractionController, SelectionBridge};

use crate::canvas;
use crate::panel;

const CANVAS_ID: &str = "globe-canvas";
const WORLD_URL: &str =
    "https://raw.githubusercontent.com/holtzy/D3-graph-gallery/master/DATA/world.geojson";

fn gemini_endpoint() -> String {
    format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
        rankings::MODEL
    )
}

struct AppState {
    controller: InteractionController,
    spin: AutoSpin,
    selection: SelectionBridge,
    records: Vec<CountryRecord>,
    boundaries: Option<BoundarySet>,
    width: f64,
    height: f64,
    device_pixel_ratio: f64,
    status: Option<String>,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState {
        controller: InteractionController::new(Rotation::new(0.0, -30.0, 0.0)),
        spin: AutoSpin::default(),
        selection: SelectionBridge::new(),
        records: Vec::new(),
        boundaries: None,
        width: 800.0,
        height: 600.0,
        device_pixel_ratio: 1.0,
        status: None,
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

/// Kicks off both datasets. Without an API key the ranking request is
/// skipped entirely and the embedded snapshot is used.
#[wasm_bindgen]
pub fn boot(api_key: Option<String>) {
    spawn_local(async move {
        load_boundaries().await;
    });
    spawn_local(async move {
        let records = match api_key {
            Some(key) if !key.is_empty() => fetch_rankings(&key).await,
            _ => {
                set_status("No API key; showing embedded GDP snapshot.");
                fallback_rankings()
            }
        };
        STATE.with(|state| {
            let mut s = state.borrow_mut();
            // Default selection: the top-ranked country.
            let top = records
                .iter()
                .min_by_key(|record| record.rank)
                .cloned();
            s.records = records;
            s.selection.select(top);
        });
        let _ = redraw();
    });
}

/// Records the canvas CSS size and backing-store scale. The page calls this
/// on load and on every resize.
#[wasm_bindgen]
pub fn set_size(width: f64, height: f64, device_pixel_ratio: f64) -> Result<(), JsValue> {
    let dpr = if device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    STATE.with(|state| {
        let mut s = state.borrow_mut();
        s.width = width;
        s.height = height;
        s.device_pixel_ratio = dpr;
    });
    let canvas = canvas_element()?;
    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);
    redraw()
}

#[wasm_bindgen]
pub fn pointer_down(x: f64, y: f64) -> Result<(), JsValue> {
    STATE.with(|state| {
        state.borrow_mut().controller.on_pointer_down(Vec2::new(x, y));
    });
    redraw()
}

#[wasm_bindgen]
pub fn pointer_move(x: f64, y: f64) -> Result<(), JsValue> {
    STATE.with(|state| {
        let mut s = state.borrow_mut();
        let projection = base_projection(s.width, s.height, s.controller.rotation());
        let AppState {
            controller,
            boundaries,
            records,
            selection,
            ..
        } = &mut *s;
        controller.on_pointer_move(
            Vec2::new(x, y),
            &projection,
            boundaries.as_ref(),
            records,
            selection,
        );
    });
    redraw()
}

#[wasm_bindgen]
pub fn pointer_up() -> Result<(), JsValue> {
    STATE.with(|state| state.borrow_mut().controller.on_pointer_up());
    redraw()
}

#[wasm_bindgen]
pub fn pointer_leave() -> Result<(), JsValue> {
    STATE.with(|state| state.borrow_mut().controller.on_pointer_leave());
    redraw()
}

/// One animation tick: advances the idle auto-rotation and redraws.
#[wasm_bindgen]
pub fn frame() -> Result<(), JsValue> {
    STATE.with(|state| {
        let mut s = state.borrow_mut();
        let pointer = s.controller.pointer();
        let spin = s.spin;
        spin.tick(s.controller.rotation_mut(), pointer.dragging, pointer.hovering);
    });
    redraw()
}

/// Monotonic counter bumped on every selection change. The page polls it
/// each frame and refreshes the panel when it moves.
#[wasm_bindgen]
pub fn selection_revision() -> f64 {
    STATE.with(|state| state.borrow().selection.revision() as f64)
}

#[wasm_bindgen]
pub fn panel_html() -> String {
    STATE.with(|state| {
        let s = state.borrow();
        let selected = s.selection.selected_code();
        panel::to_html(&panel::build(&s.records, selected.as_deref()))
    })
}

/// CSS gradient for the on-page GDP legend, sampled off the active color
/// ramp so the legend can never drift from the globe.
#[wasm_bindgen]
pub fn legend_gradient_css() -> String {
    let stops: Vec<String> = (0..=4)
        .map(|i| foundation::color::inferno(f64::from(i) / 4.0).to_css())
        .collect();
    format!("linear-gradient(to right, {})", stops.join(", "))
}

/// Panel-driven selection: the page calls this when a ranked row is
/// clicked. Unknown codes are ignored.
#[wasm_bindgen]
pub fn select_country(code: &str) -> Result<(), JsValue> {
    STATE.with(|state| {
        let s = state.borrow();
        if let Some(record) = s.records.iter().find(|record| record.iso_code == code) {
            s.selection.select(Some(record.clone()));
        }
    });
    redraw()
}

/// Last load warning, if any. Cleared once read.
#[wasm_bindgen]
pub fn take_status() -> Option<String> {
    STATE.with(|state| state.borrow_mut().status.take())
}

fn set_status(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
    STATE.with(|state| {
        state.borrow_mut().status = Some(message.to_string());
    });
}

fn canvas_element() -> Result<web_sys::HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("canvas not found"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
}

fn redraw() -> Result<(), JsValue> {
    let canvas = canvas_element()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

    STATE.with(|state| {
        let s = state.borrow();
        let dpr = s.device_pixel_ratio;
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;

        let selected = s.selection.selected();
        let input = RenderInput {
            width: s.width,
            height: s.height,
            rotation: s.controller.rotation(),
            records: &s.records,
            boundaries: s.boundaries.as_ref(),
            selected: selected.as_ref(),
            pointer: s.controller.pointer(),
        };
        canvas::replay(&ctx, &render(&input))
    })
}

async fn load_boundaries() {
    let set = match fetch_boundaries().await {
        Ok(set) => set,
        Err(message) => {
            set_status(&format!("Failed to load country boundaries: {message}"));
            return;
        }
    };
    STATE.with(|state| {
        state.borrow_mut().boundaries = Some(set);
    });
    let _ = redraw();
}

async fn fetch_boundaries() -> Result<BoundarySet, String> {
    let response = Request::get(WORLD_URL)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    let text = response.text().await.map_err(|err| err.to_string())?;
    BoundarySet::from_geojson(&text).map_err(|err| err.to_string())
}

/// Asks the model for the ranking dataset. Every failure mode degrades to
/// the embedded snapshot so the globe always has data.
async fn fetch_rankings(api_key: &str) -> Vec<CountryRecord> {
    match try_fetch_rankings(api_key).await {
        Ok(records) => records,
        Err(message) => {
            set_status(&format!(
                "Live GDP data unavailable ({message}); showing embedded snapshot."
            ));
            fallback_rankings()
        }
    }
}

async fn try_fetch_rankings(api_key: &str) -> Result<Vec<CountryRecord>, String> {
    let response = Request::post(&gemini_endpoint())
        .header("x-goog-api-key", api_key)
        .json(&request_body())
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let value: serde_json::Value = response.json().await.map_err(|err| err.to_string())?;
    let text = extract_text(&value).ok_or_else(|| "empty model response".to_string())?;
    parse_rankings(text).map_err(|err| err.to_string())
}
