//! Sound domain module

mod library;
mod request;

pub use library::{SoundLibrary, BUILT_IN_SOUNDS, SUPPORTED_EXTENSIONS};
pub use request::SoundRequest;
