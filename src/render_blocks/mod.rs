pub mod plot;
pub mod scene;
