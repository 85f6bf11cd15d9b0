pub mod paths;
#[allow(clippy::module_inception)]
pub mod routes;
