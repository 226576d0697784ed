pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod listeners;
pub(crate) mod slots;
pub(crate) mod state;
pub(crate) mod surface;
