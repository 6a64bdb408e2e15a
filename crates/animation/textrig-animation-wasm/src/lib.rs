use js_sys::{Function, JSON};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use textrig_animation_core::{
    parse_request_json, sample_slot, AnimationPlan, Config, GenerateError, Generator, Keyframe,
    KeyframeSink, SlotId, StyleTag,
};

#[wasm_bindgen]
pub struct TextRigAnimator {
    core: Generator,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn generate_error(e: GenerateError) -> JsError {
    JsError::new(&format!("generate error: {e}"))
}

fn plan_from_js(plan: JsValue) -> Result<AnimationPlan, JsError> {
    swb::from_value(plan).map_err(|e| JsError::new(&format!("plan parse error: {e}")))
}

struct JsSink {
    f: Function,
    accepted: u32,
    error: Option<JsValue>,
}

impl KeyframeSink for JsSink {
    fn key(&mut self, bone: &str, _slot: SlotId, key: &Keyframe) {
        // Call JS sink(bone, key) until the first failure, which is kept for the caller.
        if self.error.is_some() {
            return;
        }
        let delivered = swb::to_value(key)
            .map_err(JsValue::from)
            .and_then(|key| self.f.call2(&JsValue::UNDEFINED, &JsValue::from_str(bone), &key));
        match delivered {
            Ok(_) => self.accepted += 1,
            Err(e) => self.error = Some(e),
        }
    }
}

#[derive(Serialize)]
struct StyleInfo {
    tag: &'static str,
    label: &'static str,
    description: &'static str,
    randomized: bool,
}

#[wasm_bindgen]
impl TextRigAnimator {
    /// Create a new generator. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new TextRigAnimator({ require_seed: true })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TextRigAnimator, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(TextRigAnimator {
            core: Generator::new(cfg),
        })
    }

    /// Generate a plan from a request object `{ style, slot_count, params?, seed? }`.
    /// Returns the plan as a JS object.
    #[wasm_bindgen]
    pub fn generate(&self, request: JsValue) -> Result<JsValue, JsError> {
        if jsvalue_is_undefined_or_null(&request) {
            return Err(JsError::new("generate: request is null/undefined"));
        }
        // Stringify the JS object so we can reuse the core parser (expects &str)
        let s = JSON::stringify(&request)
            .map_err(|e| JsError::new(&format!("generate stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("generate: stringify produced non-string"))?;
        let plan = self.generate_str(&s)?;
        swb::to_value(&plan).map_err(|e| JsError::new(&format!("plan error: {e}")))
    }

    /// Same as `generate`, JSON text in and out.
    #[wasm_bindgen(js_name = generate_json)]
    pub fn generate_json(&self, request_json: String) -> Result<String, JsError> {
        let plan = self.generate_str(&request_json)?;
        serde_json::to_string(&plan).map_err(|e| JsError::new(&format!("plan error: {e}")))
    }

    /// Sample the pose of `slot` at `frame` from a previously generated plan.
    #[wasm_bindgen(js_name = sample_pose)]
    pub fn sample_pose(&self, plan: JsValue, slot: u32, frame: f32) -> Result<JsValue, JsError> {
        let plan = plan_from_js(plan)?;
        let timeline = plan
            .timeline(SlotId(slot))
            .ok_or_else(|| JsError::new(&format!("sample_pose: no slot {slot} in plan")))?;
        swb::to_value(&sample_slot(timeline, frame))
            .map_err(|e| JsError::new(&format!("pose error: {e}")))
    }

    /// Stream a plan into a JS callback `sink(bone: string, key: object)`.
    /// Returns the number of keys delivered. If the callback throws, streaming
    /// stops and the thrown value is rethrown to the caller.
    #[wasm_bindgen]
    pub fn apply(&self, plan: JsValue, sink: Function) -> Result<u32, JsValue> {
        let plan = plan_from_js(plan)?;
        let mut js_sink = JsSink {
            f: sink,
            accepted: 0,
            error: None,
        };
        plan.apply(&mut js_sink);
        match js_sink.error {
            Some(e) => Err(e),
            None => Ok(js_sink.accepted),
        }
    }
}

impl TextRigAnimator {
    fn generate_str(&self, s: &str) -> Result<AnimationPlan, JsError> {
        let req = parse_request_json(s).map_err(generate_error)?;
        self.core.generate_request(&req).map_err(generate_error)
    }
}

/// Catalog of supported styles: `[{ tag, label, description, randomized }]`.
#[wasm_bindgen]
pub fn styles() -> Result<JsValue, JsError> {
    let list: Vec<StyleInfo> = StyleTag::ALL
        .iter()
        .map(|s| StyleInfo {
            tag: s.as_str(),
            label: s.label(),
            description: s.description(),
            randomized: s.is_randomized(),
        })
        .collect();
    swb::to_value(&list).map_err(|e| JsError::new(&format!("styles error: {e}")))
}

/// Number of letter slots a text produces (whitespace is skipped).
#[wasm_bindgen(js_name = count_slots)]
pub fn count_slots(text: &str) -> u32 {
    textrig_animation_core::count_slots(text) as u32
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
