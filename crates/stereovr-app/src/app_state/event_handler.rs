//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, PhysicalKey};
use winit::window::WindowId;

use stereovr_platform::{normalize_physical_key, normalize_winit_key, KeyCombo};

use super::core::StereoApp;

impl ApplicationHandler for StereoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            tracing::error!("Startup failed: {e}");
            event_loop.exit();
            return;
        }

        self.update_window_title();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                    self.camera.set_viewport(size.width, size.height);
                    self.refresh_pointer();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.look_drag = None;
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.request_redraw();
    }
}

impl StereoApp {
    /// Resolve a key press through the keybind registry and dispatch it.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            physical_key,
            logical_key,
            state,
            repeat,
            ..
        } = event;
        if state != ElementState::Pressed || repeat {
            return;
        }

        // Keypad keys go by physical code so Numpad1 never aliases "1".
        let physical = match physical_key {
            PhysicalKey::Code(code) => normalize_physical_key(&format!("{code:?}")),
            PhysicalKey::Unidentified(_) => None,
        };
        let key_name = match (physical, &logical_key) {
            (Some(name), _) => name,
            (None, Key::Named(named)) => normalize_winit_key(&format!("{named:?}")),
            (None, Key::Character(c)) => normalize_winit_key(c),
            _ => return,
        };

        let combo = KeyCombo::from_winit(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            key_name,
        );
        if let Some(action) = self.registry.lookup(&combo).copied() {
            tracing::debug!("Key {combo:?} -> {}", action.label());
            self.dispatch(action);
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
