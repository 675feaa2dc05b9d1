//! User-facing display composition.

mod composer;

pub use composer::{DisplayComposer, DisplayOptions, DisplayPair};
