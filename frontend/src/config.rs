use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::{api::ApiService, utils::storage as storage_utils};

pub const DEFAULT_EMPLOYEE_API_BASE_URL: &str = "http://localhost:9090/api";
pub const DEFAULT_HR_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LEAVE_DAYS_AVAILABLE: u32 = 12;

const EMPLOYEE_ID_STORAGE_KEY: &str = "empId";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "EMPLOYEE_API_BASE_URL")]
    pub employee_api_base_url: Option<String>,
    #[serde(default, alias = "HR_API_BASE_URL")]
    pub hr_api_base_url: Option<String>,
    #[serde(default, alias = "EMPLOYEE_ID")]
    pub employee_id: Option<String>,
    #[serde(default, alias = "LEAVE_DAYS_AVAILABLE")]
    pub leave_days_available: Option<u32>,
}

impl RuntimeConfig {
    /// Fields missing from `self` are taken from `other`.
    pub fn merged_with(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            employee_api_base_url: self.employee_api_base_url.or(other.employee_api_base_url),
            hr_api_base_url: self.hr_api_base_url.or(other.hr_api_base_url),
            employee_id: self.employee_id.or(other.employee_id),
            leave_days_available: self.leave_days_available.or(other.leave_days_available),
        }
    }

    pub fn base_url_for(&self, service: ApiService) -> String {
        let configured = match service {
            ApiService::Employee => self.employee_api_base_url.as_deref(),
            ApiService::Hr => self.hr_api_base_url.as_deref(),
        };
        let fallback = match service {
            ApiService::Employee => DEFAULT_EMPLOYEE_API_BASE_URL,
            ApiService::Hr => DEFAULT_HR_API_BASE_URL,
        };
        configured
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn leave_days(&self) -> u32 {
        self.leave_days_available
            .unwrap_or(DEFAULT_LEAVE_DAYS_AVAILABLE)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &wasm_bindgen::JsValue::from_str(name)).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    // Keys may be upper or lower case.
    let read = |keys: &[&str]| -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&obj, &wasm_bindgen::JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string().or_else(|| v.as_f64().map(|n| n.to_string())))
        })
    };
    Some(RuntimeConfig {
        employee_api_base_url: read(&["EMPLOYEE_API_BASE_URL", "employee_api_base_url"]),
        hr_api_base_url: read(&["HR_API_BASE_URL", "hr_api_base_url"]),
        employee_id: read(&["EMPLOYEE_ID", "employee_id"]),
        leave_days_available: read(&["LEAVE_DAYS_AVAILABLE", "leave_days_available"])
            .and_then(|v| v.parse().ok()),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_name: &str) -> Option<RuntimeConfig> {
    None
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // window.__HRPORTAL_ENV (env.js) wins over window.__HRPORTAL_CONFIG.
    match (
        read_global("__HRPORTAL_ENV"),
        read_global("__HRPORTAL_CONFIG"),
    ) {
        (Some(env), Some(cfg)) => Some(env.merged_with(cfg)),
        (env, cfg) => env.or(cfg),
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = storage_utils::window().ok()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let resolved = match snapshot_from_globals() {
        Some(globals) => globals,
        None => fetch_runtime_config().await.unwrap_or_default(),
    };
    if resolved == RuntimeConfig::default() {
        log::warn!("No runtime config found; using built-in API defaults");
    }
    RUNTIME_CONFIG.get_or_init(|| resolved).clone()
}

pub async fn await_api_base_url(service: ApiService) -> String {
    await_runtime_config().await.base_url_for(service)
}

/// Identity of the signed-in employee. A value stored by the sign-in flow
/// takes precedence over the deployment default.
pub async fn await_employee_id() -> Option<String> {
    let stored = storage_utils::get_item(EMPLOYEE_ID_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|id| !id.trim().is_empty());
    if stored.is_some() {
        return stored;
    }
    await_runtime_config()
        .await
        .employee_id
        .filter(|id| !id.trim().is_empty())
}

pub async fn init() {
    let cfg = await_runtime_config().await;
    log::info!(
        "Runtime config: employee api = {}, hr api = {}",
        cfg.base_url_for(ApiService::Employee),
        cfg.base_url_for(ApiService::Hr)
    );
}
