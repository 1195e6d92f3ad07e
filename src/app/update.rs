//! Main update loop and panel rendering

use eframe::egui;
use std::time::{Duration, Instant};

use super::AdvisorApp;
use crate::typewriter::{RevealMode, TICK};
use crate::ui;

impl eframe::App for AdvisorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply backend events first so this frame renders fresh state
        self.process_events();

        // Advance every printing reveal; reveal state lives inside its turn,
        // so a removed turn takes its reveal down with it
        let now = Instant::now();
        let mut any_printing = false;
        for turn in &mut self.session.turns {
            if let Some(tw) = &mut turn.typewriter {
                tw.advance(now);
                if tw.mode() == RevealMode::Printing {
                    any_printing = true;
                }
            }
        }

        // Tick cadence while revealing, relaxed polling otherwise
        if any_printing {
            ctx.request_repaint_after(TICK);
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let theme = self.get_theme();

        self.render_header(ctx, &theme);
        self.render_composer(ctx, &theme);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.panel).inner_margin(egui::Margin::same(12)))
            .show(ctx, |ui| {
                ui::render_transcript(ui, &mut self.session, &theme);
            });

        self.render_system_log(ctx);
    }
}

impl AdvisorApp {
    fn render_header(&mut self, ctx: &egui::Context, theme: &ui::AdvisorTheme) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("Business Location Advisor")
                            .size(18.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(
                        egui::RichText::new(
                            "Ask me anything about business locations and opportunities",
                        )
                        .size(12.0)
                        .color(theme.text_muted),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = if self.theme == "light" {
                        "\u{1f319}"
                    } else {
                        "\u{1f31e}"
                    };
                    if ui
                        .button(theme_icon)
                        .on_hover_text(if self.theme == "light" {
                            "Switch to dark mode"
                        } else {
                            "Switch to light mode"
                        })
                        .clicked()
                    {
                        self.toggle_theme(ctx);
                    }

                    if ui
                        .button("New chat")
                        .on_hover_text("Start a new conversation")
                        .clicked()
                    {
                        // Anything still in flight becomes stale and will be
                        // dropped on arrival
                        self.session.clear();
                    }

                    if ui.button("Log").on_hover_text("Toggle system log").clicked() {
                        self.show_system_log = !self.show_system_log;
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn render_composer(&mut self, ctx: &egui::Context, theme: &ui::AdvisorTheme) {
        egui::TopBottomPanel::bottom("composer").show(ctx, |ui| {
            ui.add_space(6.0);
            let mut submit = false;
            ui.horizontal(|ui| {
                let input = egui::TextEdit::singleline(&mut self.message_input)
                    .hint_text("Type your message here...")
                    .desired_width(ui.available_width() - 90.0);
                let response = ui.add_enabled(!self.session.pending, input);

                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                    response.request_focus();
                }

                let can_send =
                    !self.session.pending && !self.message_input.trim().is_empty();
                let label = if self.session.pending {
                    "Sending..."
                } else {
                    "Send"
                };
                if ui
                    .add_enabled(
                        can_send,
                        egui::Button::new(egui::RichText::new(label).color(theme.bubble_user_text))
                            .fill(theme.bubble_user),
                    )
                    .clicked()
                {
                    submit = true;
                }
            });
            ui.add_space(6.0);

            if submit {
                self.submit_current_input();
            }
        });
    }

    fn render_system_log(&mut self, ctx: &egui::Context) {
        if !self.show_system_log {
            return;
        }
        let mut open = self.show_system_log;
        egui::Window::new("System Log")
            .open(&mut open)
            .default_width(420.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .stick_to_bottom(true)
                    .max_height(240.0)
                    .show(ui, |ui| {
                        for line in &self.system_log {
                            ui.label(egui::RichText::new(line).monospace().size(12.0));
                        }
                    });
            });
        self.show_system_log = open;
    }
}
