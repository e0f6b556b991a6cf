pub(crate) mod cities;
pub(crate) mod tour;

pub mod layout;
