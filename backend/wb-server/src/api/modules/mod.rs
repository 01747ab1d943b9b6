pub mod module_list_response;
#[allow(clippy::module_inception)]
pub mod modules;
