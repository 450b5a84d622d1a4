pub mod content;
pub mod particles;
pub mod reveal;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
