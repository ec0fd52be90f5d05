//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the controller router, the renderer,
//! the frame source, and input.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod pointer;
mod render;
mod title;

pub use core::StereoApp;
