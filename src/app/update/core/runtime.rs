use super::super::super::messages::Message;
use super::super::super::state::{App, STRIP_SCROLL_ID};
use super::super::Effect;
use crate::config::{CONFIG_PATH, save_config};
use crate::fetch::load_image;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use std::path::Path;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::FetchPrimary(request) => {
                debug!(
                    position = request.position,
                    source = %request.source,
                    "Dispatching primary image fetch"
                );
                let timeout = self.fetch_timeout();
                let source = request.source.clone();
                Task::perform(load_image(source, timeout), move |result| {
                    Message::PrimaryLoaded {
                        request: request.clone(),
                        result,
                    }
                })
            }
            Effect::Preload(sources) => {
                let timeout = self.fetch_timeout();
                Task::batch(sources.into_iter().map(|source| {
                    let label = source.clone();
                    Task::perform(load_image(source, timeout), move |result| {
                        Message::Preloaded {
                            source: label.clone(),
                            result,
                        }
                    })
                }))
            }
            Effect::FetchThumbnails(sources) => {
                if sources.is_empty() {
                    return Task::none();
                }
                info!(count = sources.len(), "Fetching remote thumbnails");
                let timeout = self.fetch_timeout();
                Task::batch(sources.into_iter().map(|source| {
                    let label = source.clone();
                    Task::perform(load_image(source, timeout), move |result| {
                        Message::ThumbnailLoaded {
                            source: label.clone(),
                            result,
                        }
                    })
                }))
            }
            Effect::SyncStrip => {
                let Some(carousel) = &self.carousel else {
                    return Task::none();
                };
                // The carousel slides content left with negative offsets; the
                // scrollable measures distance from the start instead.
                let offset = AbsoluteOffset {
                    x: -carousel.scroll_state().offset,
                    y: 0.0,
                };
                scrollable::scroll_to(STRIP_SCROLL_ID.clone(), offset)
            }
            Effect::SaveConfig => {
                save_config(Path::new(CONFIG_PATH), &self.config);
                Task::none()
            }
            Effect::QuitSafely => iced::exit(),
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(window::Event::Moved(position)) => Some(Message::WindowMoved {
            x: position.x,
            y: position.y,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status != event::Status::Captured =>
        {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
