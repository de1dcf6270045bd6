//! On-screen instructions telling the player what to do.
//!
//! A single centred line 15% down from the top of the screen: "Tap the
//! pickups!" on touch devices, "Click the pickups!" otherwise. Touch is
//! assumed on Android/iOS and detected at runtime from the first touch press.
//! `H` shows or hides it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::events::{PointerPressed, PointerSource};

// =============================================================================
// Constants
// =============================================================================

/// Distance of the text from the top, as a fraction of screen height.
const TOP_FRACTION: f32 = 0.15;

const FONT_SIZE: f32 = 24.0;

const SHADOW_OFFSET: egui::Vec2 = egui::vec2(2.0, 2.0);

pub const TAP_TEXT: &str = "Tap the pickups!";
pub const CLICK_TEXT: &str = "Click the pickups!";

// =============================================================================
// Resources
// =============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct InstructionText {
    visible: bool,
    touch_platform: bool,
}

impl Default for InstructionText {
    fn default() -> Self {
        Self {
            visible: true,
            touch_platform: cfg!(any(target_os = "android", target_os = "ios")),
        }
    }
}

impl InstructionText {
    pub fn text(&self) -> &'static str {
        if self.touch_platform {
            TAP_TEXT
        } else {
            CLICK_TEXT
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_touch_platform(&self) -> bool {
        self.touch_platform
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Switch to the touch wording once a touch press is seen.
pub fn detect_touch_input(
    mut presses: EventReader<PointerPressed>,
    mut text: ResMut<InstructionText>,
) {
    let touched = presses
        .read()
        .any(|press| press.source == PointerSource::Touch);
    if touched && !text.touch_platform {
        text.touch_platform = true;
        info!("Touch input detected, switching instruction text");
    }
}

pub fn toggle_instruction_text(
    keys: Res<ButtonInput<KeyCode>>,
    mut text: ResMut<InstructionText>,
) {
    if keys.just_pressed(KeyCode::KeyH) {
        text.toggle();
    }
}

/// Paint the instruction line with a drop shadow. Drawn on a foreground
/// layer without an area so it never takes pointer input.
pub fn instruction_text_ui(mut contexts: EguiContexts, text: Res<InstructionText>) {
    if !text.visible {
        return;
    }
    let ctx = contexts.ctx_mut();
    let screen = ctx.screen_rect();
    let anchor = egui::pos2(
        screen.center().x,
        screen.top() + screen.height() * TOP_FRACTION,
    );

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("pickup_instruction_text"),
    ));
    let font = egui::FontId::proportional(FONT_SIZE);
    painter.text(
        anchor + SHADOW_OFFSET,
        egui::Align2::CENTER_TOP,
        text.text(),
        font.clone(),
        egui::Color32::from_black_alpha(200),
    );
    painter.text(
        anchor,
        egui::Align2::CENTER_TOP,
        text.text(),
        font,
        egui::Color32::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> InstructionText {
        InstructionText {
            visible: true,
            touch_platform: false,
        }
    }

    #[test]
    fn test_text_follows_platform() {
        let mut text = desktop();
        assert_eq!(text.text(), CLICK_TEXT);
        text.touch_platform = true;
        assert_eq!(text.text(), TAP_TEXT);
    }

    #[test]
    fn test_show_hide_toggle() {
        let mut text = desktop();
        text.hide();
        assert!(!text.is_visible());
        text.show();
        assert!(text.is_visible());
        text.toggle();
        assert!(!text.is_visible());
        text.toggle();
        assert!(text.is_visible());
    }

    fn text_app() -> App {
        let mut app = App::new();
        app.insert_resource(desktop())
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<PointerPressed>()
            .add_systems(Update, (detect_touch_input, toggle_instruction_text));
        app
    }

    #[test]
    fn test_h_key_toggles_visibility() {
        let mut app = text_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyH);
        app.update();
        assert!(!app.world().resource::<InstructionText>().is_visible());
    }

    #[test]
    fn test_mouse_press_keeps_click_text() {
        let mut app = text_app();
        app.world_mut().send_event(PointerPressed {
            screen_pos: Vec2::new(10.0, 10.0),
            viewport_size: Vec2::new(800.0, 600.0),
            source: PointerSource::Mouse,
        });
        app.update();
        assert_eq!(app.world().resource::<InstructionText>().text(), CLICK_TEXT);
    }

    #[test]
    fn test_touch_press_switches_to_tap_text() {
        let mut app = text_app();
        app.world_mut().send_event(PointerPressed {
            screen_pos: Vec2::new(10.0, 10.0),
            viewport_size: Vec2::new(800.0, 600.0),
            source: PointerSource::Touch,
        });
        app.update();
        let text = app.world().resource::<InstructionText>();
        assert!(text.is_touch_platform());
        assert_eq!(text.text(), TAP_TEXT);
    }
}
