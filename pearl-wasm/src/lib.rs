//! Framework-neutral WASM <-> JavaScript bridge over the sample catalog.

use pearl_catalog::{Catalog, CaseStudyQuery, PatientQuery};
use pearl_core::{PearlConfig, PearlError, PlateletSeverity};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Defaults overlaid with whatever fields the caller supplies.
#[wasm_bindgen]
pub fn resolve_config(overrides: Option<JsValue>) -> Result<JsValue, JsValue> {
    serialize(&read_config(overrides)?)
}

#[wasm_bindgen]
pub fn list_patients() -> Result<JsValue, JsValue> {
    serialize(catalog()?.patients())
}

#[wasm_bindgen]
pub fn recent_patients(config: Option<JsValue>) -> Result<JsValue, JsValue> {
    let config = read_config(config)?;
    serialize(catalog()?.recent_patients(&config))
}

#[wasm_bindgen]
pub fn find_patient(id: &str) -> Result<JsValue, JsValue> {
    let patient = catalog()?.find_patient(id).map_err(format_pearl_error)?;
    serialize(patient)
}

/// `query` follows `PatientQuery`: `{ name, filters: { symptoms, region, ... } }`.
/// `undefined` or `null` returns the whole roster.
#[wasm_bindgen]
pub fn search_patients(query: JsValue) -> Result<JsValue, JsValue> {
    let query: PatientQuery = read_query(query)?;
    serialize(&catalog()?.search_patients(&query))
}

#[wasm_bindgen]
pub fn search_case_studies(query: JsValue) -> Result<JsValue, JsValue> {
    let query: CaseStudyQuery = read_query(query)?;
    serialize(&catalog()?.search_case_studies(&query))
}

#[wasm_bindgen]
pub fn classify_platelets(count: u32) -> String {
    PlateletSeverity::classify(count).label().to_string()
}

/// Canned prediction; the caller is expected to show it after its own delay.
#[wasm_bindgen]
pub fn predict_treatment(patient_id: &str) -> Result<JsValue, JsValue> {
    if patient_id.is_empty() {
        return Err(format_pearl_error(PearlError::NoPatientSelected));
    }
    serialize(&pearl_catalog::predict_treatment(patient_id))
}

#[wasm_bindgen]
pub fn list_trends() -> Result<JsValue, JsValue> {
    serialize(catalog()?.trend_analyses())
}

fn catalog() -> Result<&'static Catalog, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    Catalog::shared().map_err(format_pearl_error)
}

fn read_config(value: Option<JsValue>) -> Result<PearlConfig, JsValue> {
    match value {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Could not read config: {err}")))
        }
        _ => Ok(PearlConfig::default()),
    }
}

fn read_query<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    from_value(value).map_err(|err| JsValue::from_str(&format!("Could not read query: {err}")))
}

fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|err| JsValue::from_str(&format!("Could not serialize result: {err}")))
}

fn format_pearl_error(err: PearlError) -> JsValue {
    JsValue::from_str(&format!("Pearl error: {err}"))
}
