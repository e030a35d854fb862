mod catalogue;
mod model;

pub use catalogue::Catalogue;
pub use model::{ModelSpec, DEFAULT_GLASS_MATERIAL};
