pub mod png;
pub mod synth;

pub use crate::png::{encode, EncodeError};
pub use crate::synth::{synthesize, IconSpec, Pixel};
