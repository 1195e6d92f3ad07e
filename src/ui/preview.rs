//! Link preview cards for listings mentioned in advisor replies.

use eframe::egui;

use super::theme::AdvisorTheme;
use crate::protocol::ListingMetadata;
use crate::transcript::{LinkPreview, PreviewState};

/// Render one preview card beneath an assistant bubble.
pub fn render_preview(ui: &mut egui::Ui, preview: &LinkPreview, theme: &AdvisorTheme) {
    egui::Frame::new()
        .fill(theme.card)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_min_width(260.0);
            match &preview.state {
                PreviewState::Loading => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(
                            egui::RichText::new("Loading property information...")
                                .color(theme.text_muted),
                        );
                    });
                }
                PreviewState::Failed(_) => {
                    // Per-link failure stays inline and lightweight
                    ui.label(
                        egui::RichText::new("Failed to load property information")
                            .color(theme.text_muted)
                            .italics(),
                    );
                }
                PreviewState::Ready(metadata) => {
                    render_metadata(ui, preview, metadata, theme);
                }
            }
        });
}

fn render_metadata(
    ui: &mut egui::Ui,
    preview: &LinkPreview,
    metadata: &ListingMetadata,
    theme: &AdvisorTheme,
) {
    let target = metadata.listing_url.as_deref().unwrap_or(&preview.url);
    ui.hyperlink_to(
        egui::RichText::new(&metadata.address)
            .size(15.0)
            .strong()
            .color(theme.accent),
        target,
    );
    if let Some(title) = &metadata.title {
        ui.label(egui::RichText::new(title).size(12.0).color(theme.text_muted));
    }
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format_price(metadata.price))
                .size(14.0)
                .strong()
                .color(theme.text_primary),
        );
        if let Some(area) = metadata.area_size {
            ui.label(
                egui::RichText::new(format!("\u{b7} {}", format_area(area)))
                    .size(13.0)
                    .color(theme.text_muted),
            );
        }
    });
    if let Some(description) = &metadata.description {
        if !description.is_empty() {
            ui.label(
                egui::RichText::new(description)
                    .size(12.0)
                    .color(theme.text_muted),
            );
        }
    }
}

/// Format a price as a currency string with digit grouping, no cents.
pub fn format_price(price: f64) -> String {
    format!("${}", group_thousands(price.round() as i64))
}

/// Format a floor area as a grouped integer with a unit suffix.
pub fn format_area(area: f64) -> String {
    format!("{} sqft", group_thousands(area.round() as i64))
}

fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
