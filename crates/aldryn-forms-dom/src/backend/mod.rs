//! [`Dom`](crate::Dom) implementations

mod html;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;
