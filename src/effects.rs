//! Framework-free logic behind the page's visual effects.
//!
//! Nothing in here touches the DOM. The `app` module owns the browser side
//! and drives these types from event handlers and frame callbacks.

pub mod modal;
pub mod particles;
pub mod scene;
pub mod scheduler;
pub mod surface;
pub mod theme;
pub mod tilt;
pub mod typewriter;
