// SPDX-License-Identifier: MPL-2.0
//! Overlay widget rendering every active toast.
//!
//! All toasts render into a single top layer: one anchored sub-layer per
//! occupied screen position, each stacking its toasts in insertion order.
//! The enter/exit slide is rendered as an eased inset from the anchored
//! edge, and the countdown as a thin progress track along the card bottom.

use super::entry::{Edge, Position};
use super::manager::{ActiveToast, Message, Toasts};
use crate::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::icons;
use iced::font::Weight;
use iced::widget::{button, container, stack, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Font, Length, Padding, Theme};
use std::time::Instant;

/// Renders the toast overlay with all visible toasts.
///
/// Meant to be stacked above the application content, e.g. with
/// `iced::widget::stack`. Produces an empty, zero-sized element when no
/// toast is active.
pub fn view_overlay(toasts: &Toasts) -> Element<'_, Message> {
    let now = Instant::now();

    let mut layers: Vec<Element<'_, Message>> = Vec::new();
    for position in Position::ALL {
        let cards: Vec<Element<'_, Message>> = toasts
            .iter()
            .filter(|t| t.entry().position() == position && t.instance().visible())
            .map(|t| view(t, toasts.show_progress(), now))
            .collect();
        if cards.is_empty() {
            continue;
        }

        let (horizontal, vertical) = position.alignment();
        let column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(horizontal);

        layers.push(
            Container::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(horizontal)
                .align_y(vertical)
                .padding(layer_padding(position.slide_edge()))
                .into(),
        );
    }

    if layers.is_empty() {
        // Return an empty container that takes no space
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        stack(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Renders a single toast card.
pub fn view<'a>(toast: &'a ActiveToast, show_progress: bool, now: Instant) -> Element<'a, Message> {
    let entry = toast.entry();
    let status = entry.status();
    let accent = status.close_button_color();

    let decoration = icons::sized(status.image(), sizing::BUBBLE);

    let title = Text::new(status.title())
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        })
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::WHITE),
        });
    let message = Text::new(entry.message())
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::WHITE),
        });

    let dismiss_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
        .on_press(Message::Dismiss(entry.id().to_string()))
        .padding(spacing::XXS)
        .style(move |theme: &Theme, state| dismiss_button_style(accent, theme, state));

    // Layout: [decoration] [title / message] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(decoration)
        .push(
            Column::new()
                .width(Length::Fill)
                .spacing(spacing::XXS)
                .push(title)
                .push(message),
        )
        .push(dismiss_button);

    let mut body = Column::new().spacing(spacing::XS).push(content);
    if show_progress && !entry.is_sticky() {
        body = body.push(progress_bar(toast.instance().progress()));
    }

    let card = Container::new(body)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |_theme: &Theme| card_style(status.color()));

    let eased = ease_out(toast.instance().slide_progress(now));
    Container::new(card)
        .padding(slide_padding(entry.position().slide_edge(), eased))
        .into()
}

/// Countdown track: a white fill shrinking over a translucent track.
fn progress_bar<'a>(progress: f32) -> Element<'a, Message> {
    let (filled, remaining) = progress_portions(progress);

    let mut row = Row::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_TRACK));
    if filled > 0 {
        row = row.push(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(|_theme: &Theme| bar_style(palette::WHITE)),
        );
    }
    if remaining > 0 {
        row = row.push(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::FillPortion(remaining))
                .height(Length::Fill)
                .style(|_theme: &Theme| {
                    bar_style(Color {
                        a: opacity::PROGRESS_TRACK,
                        ..palette::WHITE
                    })
                }),
        );
    }
    row.into()
}

/// Splits a 0-100 progress value into fill/track portions.
fn progress_portions(progress: f32) -> (u16, u16) {
    let filled = progress.clamp(0.0, 100.0).round() as u16;
    (filled, 100 - filled)
}

/// Cubic ease-out, mirroring the original transition curve.
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Padding of the anchored sub-layer: the usual screen-edge gap on every
/// side except the slide edge, which the per-toast inset animates.
fn layer_padding(edge: Edge) -> Padding {
    let mut padding = Padding {
        top: spacing::MD,
        right: spacing::MD,
        bottom: spacing::MD,
        left: spacing::MD,
    };
    match edge {
        Edge::Left => padding.left = 0.0,
        Edge::Right => padding.right = 0.0,
        Edge::Top => padding.top = 0.0,
        Edge::Bottom => padding.bottom = 0.0,
    }
    padding
}

/// Animated inset from the slide edge: flush with the edge when hidden,
/// fully inset when mounted.
fn slide_padding(edge: Edge, eased: f32) -> Padding {
    let inset = spacing::LG * eased.clamp(0.0, 1.0);
    let mut padding = Padding {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };
    match edge {
        Edge::Left => padding.left = inset,
        Edge::Right => padding.right = inset,
        Edge::Top => padding.top = inset,
        Edge::Bottom => padding.bottom = inset,
    }
    padding
}

/// Style function for the toast card.
fn card_style(background: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Style function for the progress bar segments.
fn bar_style(color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(color)),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style function for the round dismiss button.
fn dismiss_button_style(accent: Color, _theme: &Theme, state: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(iced::Background::Color(accent)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match state {
        button::Status::Active | button::Status::Pressed => base,
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_HOVER,
                ..accent
            })),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::PROGRESS_TRACK,
                ..accent
            })),
            ..base
        },
    }
}
