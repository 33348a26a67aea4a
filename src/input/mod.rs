//! Input handling: event types, pointer tracking, and the processor that
//! converts raw window events into viewer commands.

/// Platform-agnostic input events.
pub mod event;
/// Pointer position tracking and screen-to-NDC conversion.
pub mod pointer;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use pointer::{screen_to_ndc, PointerTracker};
pub use processor::InputProcessor;
