// src/app/mod.rs
pub mod data;
pub mod input;
pub mod modals;
pub mod state;

pub use state::{
    ActiveModal, AddActivityField, ApiDispatcher, ApiEvent, App, Toast, ToastKind,
};
