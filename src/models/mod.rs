pub mod audio;
pub mod batch;
pub mod catalog;
pub mod chat;
pub mod common;
pub mod embedding;
pub mod image;
pub mod platform;
pub mod provider;
pub mod training;
pub mod usage;

pub use audio::*;
pub use batch::*;
pub use catalog::*;
pub use chat::*;
pub use common::*;
pub use embedding::*;
pub use image::*;
pub use platform::*;
pub use provider::*;
pub use training::*;
pub use usage::*;
