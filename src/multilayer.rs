pub(crate) mod config;
pub(crate) mod glass;
pub(crate) mod photon;
pub(crate) mod scenes;
