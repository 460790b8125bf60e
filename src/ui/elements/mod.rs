// src/ui/elements/mod.rs
pub mod form;
pub mod hatt_group;
pub mod picker_popup;
