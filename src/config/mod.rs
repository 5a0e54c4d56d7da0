pub(crate) mod model;
pub(crate) mod preset;
pub(crate) mod resolve;
pub(crate) mod resolved;
