//! Desktop form: state, controller and egui renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
