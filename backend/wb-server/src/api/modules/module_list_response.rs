use wb_core::Module;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ModuleListResponse {
    pub message: String,
    pub modules: Vec<Module>,
}
