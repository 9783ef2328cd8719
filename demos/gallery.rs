// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery for the toast overlay.
//!
//! Run with `cargo run --example gallery`. Pass `--sticky` to raise toasts
//! that stay until dismissed.

use iced::widget::{button, column, container, row, stack, text};
use iced::{Element, Length, Subscription};
use iced_toasts::toast::overlay;
use iced_toasts::{Position, Status, ToastEntry, Toasts};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    let sticky = args.contains("--sticky");

    iced::application(
        move || Gallery::new(sticky),
        Gallery::update,
        Gallery::view,
    )
    .subscription(Gallery::subscription)
    .title("iced_toasts gallery")
    .run()
}

struct Gallery {
    toasts: Toasts,
    sticky: bool,
    counter: usize,
}

#[derive(Debug, Clone)]
enum Message {
    Toast(iced_toasts::Message),
    Show(Status, Position),
    Clear,
}

impl Gallery {
    fn new(sticky: bool) -> Self {
        Self {
            toasts: Toasts::new(),
            sticky,
            counter: 0,
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Toast(toast_message) => self.toasts.handle_message(toast_message),
            Message::Show(status, position) => {
                self.counter += 1;
                let mut entry = ToastEntry::new(
                    format!("demo-{}", self.counter),
                    format!("A {} toast anchored {}", status, position),
                    status,
                )
                .with_position(position);
                if self.sticky {
                    entry = entry.sticky();
                }
                self.toasts.add(entry);
            }
            Message::Clear => self.toasts.clear(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toast)
    }

    fn view(&self) -> Element<'_, Message> {
        let status_buttons = row![
            button("Success").on_press(Message::Show(Status::Success, Position::BottomCenter)),
            button("Error").on_press(Message::Show(Status::Error, Position::BottomCenter)),
            button("Warning").on_press(Message::Show(Status::Warning, Position::BottomCenter)),
            button("Info").on_press(Message::Show(Status::Info, Position::BottomCenter)),
        ]
        .spacing(8);

        let position_buttons = row![
            button("Top left").on_press(Message::Show(Status::Info, Position::TopLeft)),
            button("Top center").on_press(Message::Show(Status::Info, Position::TopCenter)),
            button("Top right").on_press(Message::Show(Status::Info, Position::TopRight)),
            button("Bottom left").on_press(Message::Show(Status::Success, Position::BottomLeft)),
            button("Bottom center")
                .on_press(Message::Show(Status::Success, Position::BottomCenter)),
            button("Bottom right").on_press(Message::Show(Status::Success, Position::BottomRight)),
        ]
        .spacing(8);

        let content = container(
            column![
                text("iced_toasts gallery").size(24),
                status_buttons,
                position_buttons,
                button("Clear all").on_press(Message::Clear),
            ]
            .spacing(16),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

        stack![
            content,
            overlay::view_overlay(&self.toasts).map(Message::Toast),
        ]
        .into()
    }
}
