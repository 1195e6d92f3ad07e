//! Transcript rendering: message bubbles, reveal controls, previews.

use eframe::egui;

use super::markdown::render_markdown;
use super::preview::render_preview;
use super::theme::AdvisorTheme;
use crate::session::ConversationSession;
use crate::transcript::{Feedback, Role, Turn};
use crate::typewriter::RevealMode;

/// Render the scrolling transcript, the pending indicator, and the error
/// banner. Mutates reveal/feedback state in response to bubble controls.
pub fn render_transcript(
    ui: &mut egui::Ui,
    session: &mut ConversationSession,
    theme: &AdvisorTheme,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            let width = ui.available_width();
            for turn in &mut session.turns {
                match turn.role {
                    Role::User => render_user_bubble(ui, turn, width, theme),
                    Role::Assistant => render_assistant_bubble(ui, turn, width, theme),
                }
                ui.add_space(8.0);
            }

            if session.pending {
                ui.horizontal(|ui| {
                    egui::Frame::new()
                        .fill(theme.bubble_assistant)
                        .corner_radius(10.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.spinner();
                            ui.label(
                                egui::RichText::new("Thinking...").color(theme.text_muted),
                            );
                        });
                });
                ui.add_space(8.0);
            }

            if let Some(error) = &session.error {
                ui.vertical_centered(|ui| {
                    egui::Frame::new()
                        .fill(theme.card)
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(format!("\u{26a0} {}", error))
                                    .color(theme.error),
                            );
                        });
                });
            }
        });
}

fn render_user_bubble(ui: &mut egui::Ui, turn: &Turn, width: f32, theme: &AdvisorTheme) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
        ui.set_max_width(width * 0.8);
        egui::Frame::new()
            .fill(theme.bubble_user)
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(&turn.content)
                        .size(14.0)
                        .color(theme.bubble_user_text),
                );
            });
    });
}

fn render_assistant_bubble(ui: &mut egui::Ui, turn: &mut Turn, width: f32, theme: &AdvisorTheme) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
        ui.set_max_width(width * 0.8);
        egui::Frame::new()
            .fill(theme.bubble_assistant)
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                if let Some(tw) = &mut turn.typewriter {
                    // The displayed text is a derived prefix view; content
                    // itself is never mutated
                    let visible = tw.prefix(&turn.content).to_owned();
                    render_markdown(ui, &visible, theme, tw.caret_visible());

                    if !tw.is_complete() {
                        let label = match tw.mode() {
                            RevealMode::Printing => "\u{23f8}",
                            _ => "\u{25b6}",
                        };
                        if ui
                            .small_button(label)
                            .on_hover_text(match tw.mode() {
                                RevealMode::Printing => "Stop typing",
                                _ => "Continue typing",
                            })
                            .clicked()
                        {
                            tw.toggle();
                        }
                    }
                } else {
                    render_markdown(ui, &turn.content, theme, false);
                }
            });

        render_feedback_row(ui, turn, theme);

        for preview in &turn.previews {
            ui.add_space(4.0);
            render_preview(ui, preview, theme);
        }
    });
}

fn render_feedback_row(ui: &mut egui::Ui, turn: &mut Turn, theme: &AdvisorTheme) {
    ui.horizontal(|ui| {
        let up_selected = turn.feedback == Some(Feedback::ThumbsUp);
        let down_selected = turn.feedback == Some(Feedback::ThumbsDown);

        let up = egui::RichText::new("\u{1f44d}").color(if up_selected {
            theme.accent
        } else {
            theme.text_muted
        });
        if ui.small_button(up).on_hover_text("Helpful").clicked() {
            turn.feedback = Some(Feedback::ThumbsUp);
        }

        let down = egui::RichText::new("\u{1f44e}").color(if down_selected {
            theme.error
        } else {
            theme.text_muted
        });
        if ui.small_button(down).on_hover_text("Not helpful").clicked() {
            turn.feedback = Some(Feedback::ThumbsDown);
        }
    });
}
