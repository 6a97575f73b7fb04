pub(crate) mod enumerate;
pub(crate) mod moves;
pub(crate) mod rasterize;
