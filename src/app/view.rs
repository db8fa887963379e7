use super::messages::Message;
use super::state::{App, COUNTER_FONT_SIZE_PX, Carousel, STRIP_PADDING_PX, STRIP_SCROLL_ID, THUMB_BORDER_PX};
use carousel_core::{PresentationTree, StripMetrics};
use iced::alignment::Vertical;
use iced::widget::image::Handle;
use iced::widget::{
    Row, button, column, container, horizontal_space, image, row, scrollable, stack, text,
};
use iced::{Border, Color, ContentFit, Element, Length, Theme};

const ACTIVE_BORDER: Color = Color::from_rgb(0.35, 0.6, 0.95);
const ERROR_BORDER: Color = Color::from_rgb(0.85, 0.25, 0.25);

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let Some(carousel) = &self.carousel else {
            let message = self
                .init_error
                .as_deref()
                .unwrap_or("The gallery could not be initialized.");
            return container(text(format!("Carousel disabled: {message}")))
                .center(Length::Fill)
                .into();
        };

        let mut layout = column![
            self.header_view(carousel),
            self.primary_view(carousel),
        ]
        .spacing(8)
        .padding(STRIP_PADDING_PX);

        if let Some(error) = &self.last_error {
            layout = layout.push(text(error.clone()).color(ERROR_BORDER));
        }

        layout.push(self.strip_view(carousel)).into()
    }

    fn header_view(&self, carousel: &Carousel) -> Element<'_, Message> {
        let current = carousel.tree().text(self.nodes.counter).unwrap_or("0");
        let counter = text(format!("{current} / {}", carousel.items().len())).size(COUNTER_FONT_SIZE_PX);
        let status = if carousel.is_loading() { "Loading…" } else { "" };

        row![counter, horizontal_space(), text(status)]
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .into()
    }

    fn primary_view(&self, carousel: &Carousel) -> Element<'_, Message> {
        let requested = carousel.tree().image_source(self.nodes.image);
        let handle = requested
            .as_deref()
            .and_then(|source| self.handle_for(source))
            .or_else(|| carousel.displayed_source().and_then(|source| self.handle_for(source)));

        let picture: Element<'_, Message> = match handle {
            Some(handle) => image(handle)
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => container(text("No preview")).center(Length::Fill).into(),
        };

        let veiled = carousel
            .tree()
            .has_class(self.nodes.veil, &carousel.config().image.loading_active_class);
        let content: Element<'_, Message> = if veiled {
            let veil = container(text("Loading…"))
                .center(Length::Fill)
                .style(|_: &Theme| container::Style {
                    background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.45).into()),
                    ..container::Style::default()
                });
            stack![picture, veil].into()
        } else {
            picture
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn strip_view(&self, carousel: &Carousel) -> Element<'_, Message> {
        let tree = carousel.tree();
        let strip = &carousel.config().strip;

        let thumbs = self
            .nodes
            .items
            .iter()
            .zip(&self.nodes.thumbs)
            .map(|(&item, &thumb)| {
                let active = tree.has_class(item, &strip.active_class);
                let errored = tree.has_class(item, &strip.error_class);
                let source = tree.image_source(thumb).unwrap_or_default();
                let framed = container(self.thumbnail_view(self.handle_for(&source)))
                    .padding(THUMB_BORDER_PX)
                    .style(move |_: &Theme| frame_style(active, errored));
                button(framed)
                    .padding(0)
                    .style(button::text)
                    .on_press(Message::NodePressed(thumb))
                    .into()
            })
            .collect::<Vec<Element<'_, Message>>>();

        let list = scrollable(Row::with_children(thumbs).spacing(self.config.thumb_spacing))
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
            ))
            .id(STRIP_SCROLL_ID.clone())
            .width(Length::Fixed(carousel.metrics().viewport_width()));

        let prev_disabled = tree.has_class(self.nodes.prev, &strip.disabled_class);
        let next_disabled = tree.has_class(self.nodes.next, &strip.disabled_class);

        row![
            self.control_view("‹", self.nodes.prev, prev_disabled),
            list,
            self.control_view("›", self.nodes.next, next_disabled),
        ]
        .spacing(0)
        .align_y(Vertical::Center)
        .height(Length::Shrink)
        .into()
    }

    fn thumbnail_view(&self, handle: Option<Handle>) -> Element<'_, Message> {
        let width = (self.config.thumb_width - 2.0 * THUMB_BORDER_PX).max(1.0);
        let height = (self.config.thumb_height - 2.0 * THUMB_BORDER_PX).max(1.0);
        match handle {
            Some(handle) => image(handle)
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .into(),
            None => container(text("…"))
                .center_x(Length::Fixed(width))
                .center_y(Length::Fixed(height))
                .into(),
        }
    }

    fn control_view(
        &self,
        label: &'static str,
        node: carousel_core::NodeId,
        disabled: bool,
    ) -> Element<'_, Message> {
        // The press always goes through the carousel, which ignores disabled
        // controls itself.
        let style = if disabled {
            button::secondary
        } else {
            button::primary
        };
        button(container(text(label)).center_x(Length::Fill))
            .width(Length::Fixed(self.config.control_width))
            .style(style)
            .on_press(Message::NodePressed(node))
            .into()
    }
}

fn frame_style(active: bool, errored: bool) -> container::Style {
    let color = if errored {
        ERROR_BORDER
    } else if active {
        ACTIVE_BORDER
    } else {
        Color::TRANSPARENT
    };
    container::Style {
        border: Border {
            color,
            width: THUMB_BORDER_PX,
            radius: 4.0.into(),
        },
        ..container::Style::default()
    }
}
