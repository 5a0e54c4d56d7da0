pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod glass;
pub(crate) mod gradient;
pub(crate) mod image_fit;
pub(crate) mod pattern;
pub(crate) mod shadow;
pub(crate) mod shapes;
