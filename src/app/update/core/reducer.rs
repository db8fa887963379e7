use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use carousel_core::KeyInput;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextImage => self.handle_next_image(&mut effects),
            Message::PreviousImage => self.handle_previous_image(&mut effects),
            Message::NodePressed(node) => self.handle_node_pressed(node, &mut effects),
            Message::PrimaryLoaded { request, result } => {
                self.handle_primary_loaded(request, result, &mut effects);
            }
            Message::Preloaded { source, result } => {
                self.handle_preloaded(source, result, &mut effects);
            }
            Message::ThumbnailLoaded { source, result } => {
                self.handle_thumbnail_loaded(source, result);
            }
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::WindowMoved { x, y } => self.handle_window_moved(x, y),
            Message::KeyPressed { key, modifiers } => {
                if let Some(name) = Self::arrow_key_name(&key, modifiers) {
                    self.handle_arrow_key(KeyInput::Named(name), &mut effects);
                } else if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::SafeQuit => {
                effects.push(Effect::SaveConfig);
                effects.push(Effect::QuitSafely);
            }
            Message::Tick(now) => self.handle_tick(now, &mut effects),
        }

        self.sync_animation_clock();
        effects
    }
}
