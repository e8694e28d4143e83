//! UI components.

pub mod particle_field;
pub mod reveal;
pub mod sections;
pub mod shell;
pub mod typewriter;
