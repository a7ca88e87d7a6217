use ripple_core::{ConfigValue, RippleConfig};
use wasm_bindgen::{JsCast, JsValue};

/// Read a ripple configuration from JS.
///
/// Accepts a bare CSS color string or a record
/// `{ color, center, disabled, policy, edgePadding }`. Bad fields are logged
/// and skipped; the rest of the record still applies.
pub fn from_js(value: &JsValue) -> RippleConfig {
    if value.is_undefined() || value.is_null() {
        return RippleConfig::default();
    }
    if let Some(color) = value.as_string() {
        return if color.trim().is_empty() {
            log::warn!("[ripple] empty color, using default");
            RippleConfig::default()
        } else {
            RippleConfig::from(color)
        };
    }
    let Some(record) = value.dyn_ref::<js_sys::Object>() else {
        log::warn!("[ripple] config must be a color string or an object");
        return RippleConfig::default();
    };

    let mut config = RippleConfig::default();
    for key in js_sys::Object::keys(record).iter() {
        let Some(key) = key.as_string() else {
            continue;
        };
        let field = match js_sys::Reflect::get(record, &JsValue::from_str(&key)) {
            Ok(v) if v.is_undefined() => continue,
            Ok(v) => v,
            Err(e) => {
                log::warn!("[ripple] config field `{key}` unreadable: {:?}", e);
                continue;
            }
        };
        let text;
        let value = if let Some(s) = field.as_string() {
            text = s;
            ConfigValue::Str(&text)
        } else if let Some(b) = field.as_bool() {
            ConfigValue::Bool(b)
        } else if let Some(n) = field.as_f64() {
            ConfigValue::Number(n)
        } else {
            log::warn!("[ripple] config field `{key}` has an unsupported type");
            continue;
        };
        if let Err(e) = config.set_field(&key, value) {
            log::warn!("[ripple] {e}");
        }
    }
    config
}
