//! Image Carousel Engine
//!
//! This crate provides the state machine behind a swipeable image slider:
//! - Working sequence with loop clones and seamless boundary jumps
//! - Mouse and touch swipe gestures with a width-relative threshold
//! - Click-to-zoom with clamped panning
//! - Autoplay with hover, drag and navigation pauses
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`)
//! - [`config`]: Slider configuration and validation
//! - [`sequence`]: Working sequence and position projection
//! - [`input`]: Gesture state machine
//! - [`transition`]: Transition phase and the animation surface hooks
//! - [`timer`]: Deferred tasks and the repeating autoplay timer
//! - [`zoom`]: Magnification level and pan offset
//! - [`view`]: Render snapshot
//!
//! ## Example
//!
//! ```rust
//! use carousel_core::{SliderConfig, SliderEngine};
//!
//! let images = vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()];
//! let mut engine = SliderEngine::new(images, SliderConfig::default().with_loop(true));
//! engine.init(800.0, 400.0, 0.0);
//!
//! assert!(engine.go_to_next(0.0));
//! assert_eq!(engine.real_index(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: No browser dependencies; the DOM host lives in `carousel-web`
//! 2. **Time Abstraction**: Every time-dependent call takes `now_ms`, timers are deadlines
//! 3. **Infallible Engine**: Out-of-range requests clamp or are ignored

pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod mirror;
pub mod sequence;
pub mod timer;
pub mod transition;
pub mod view;
pub mod zoom;

mod engine;

// Re-export core types for convenience
pub use config::SliderConfig;
pub use error::ConfigError;
pub use input::{DragState, InputResult, InputRouter, PointerKind};
pub use math::{Size, Vec2};
pub use mirror::{MirroredPosition, PositionMirror};
pub use sequence::SlideSequence;
pub use transition::{AnimationSurface, TransitionPhase};
pub use view::{ArrowView, SlideView, SliderView};
pub use zoom::ZoomState;

pub use engine::SliderEngine;

/// Duration of slide transitions in milliseconds
pub use transition::TRANSITION_DURATION_MS;
