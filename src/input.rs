use raylib::prelude::*;
use crate::audio::AudioSink;
use crate::page::{Page, PageEvent};
use crate::photos::PhotoSet;

/// Feeds this frame's window, keyboard and mouse input to the page. Each
/// input is handled before the next one is read.
pub fn poll<S: AudioSink>(rl: &mut RaylibHandle, page: &mut Page<S>, photos: &PhotoSet) {
    if rl.is_window_resized() {
        let resize = PageEvent::Resize {
            width: rl.get_screen_width() as f32,
            height: rl.get_screen_height() as f32,
        };
        page.handle(resize, photos);
    }

    while let Some(c) = rl.get_char_pressed() {
        page.type_char(c, photos);
    }

    if rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_KP_ENTER) {
        page.activate(photos);
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        page.click(rl.get_mouse_position(), photos);
    }
}
