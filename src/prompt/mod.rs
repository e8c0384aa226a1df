// Declare submodules
mod classification;

pub use classification::{classification_prompt, CLASSIFICATION_KEYS};
