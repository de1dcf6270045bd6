use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use simulation::events::{PointerPressed, PointerSource};

/// Position of the touch with the lowest id, if any.
pub fn first_touch_position(touches: impl IntoIterator<Item = (u64, Vec2)>) -> Option<Vec2> {
    touches
        .into_iter()
        .min_by_key(|(id, _)| *id)
        .map(|(_, position)| position)
}

/// Emit one `PointerPressed` per left mouse press and per frame with new
/// touches. Positions and viewport size are in logical pixels.
pub fn capture_pointer_presses(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut presses: EventWriter<PointerPressed>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let viewport_size = Vec2::new(window.width(), window.height());

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(screen_pos) = window.cursor_position() {
            presses.send(PointerPressed {
                screen_pos,
                viewport_size,
                source: PointerSource::Mouse,
            });
        }
    }

    let new_touches = touches
        .iter_just_pressed()
        .map(|touch| (touch.id(), touch.position()));
    if let Some(screen_pos) = first_touch_position(new_touches) {
        presses.send(PointerPressed {
            screen_pos,
            viewport_size,
            source: PointerSource::Touch,
        });
    }
}
