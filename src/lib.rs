pub mod app;
pub mod browser;
pub mod data;
pub mod event;
pub mod model;
pub mod theme;
pub mod view;
