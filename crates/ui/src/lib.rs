use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::PickupSet;

pub mod instruction_text;

use instruction_text::InstructionText;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<InstructionText>()
            .add_systems(
                Update,
                (
                    instruction_text::detect_touch_input,
                    instruction_text::toggle_instruction_text,
                    instruction_text::instruction_text_ui,
                )
                    .chain()
                    .after(PickupSet::Input),
            );
    }
}
