pub(crate) mod engine;
pub(crate) mod fit;
pub(crate) mod layout;
pub(crate) mod wrap;
