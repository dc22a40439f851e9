//! egui overlay: the portfolio's content sections, the HUD, the gallery
//! instructions card, and the contact form.

use std::sync::Arc;

use egui::{Color32, RichText};

use crate::contact::{ContactForm, Mailer, SubmitStatus};
use crate::content;
use crate::scenes::SceneKind;

/// Logical-pixel width under which the side panel collapses, matching
/// the original site's mobile breakpoint.
pub const COMPACT_BREAKPOINT: f32 = 1024.0;

const ACCENT: Color32 = Color32::from_rgb(74, 158, 255);
const SUCCESS_GREEN: Color32 = Color32::from_rgb(110, 200, 130);
const ERROR_RED: Color32 = Color32::from_rgb(230, 110, 110);

/// Compact-layout decision from an optional size signal; no signal means
/// the desktop layout.
pub fn is_compact(logical_width: Option<f32>) -> bool {
    logical_width.map(|w| w < COMPACT_BREAKPOINT).unwrap_or(false)
}

pub struct Overlay {
    /// Scene the visitor wants active; the app diffs this against the
    /// scene it is actually running.
    pub scene: SceneKind,
    pub compact: bool,
    sections_open: bool,
}

impl Overlay {
    pub fn new(scene: SceneKind) -> Self {
        Self {
            scene,
            compact: false,
            sections_open: true,
        }
    }

    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        fps: f32,
        pointer_locked: bool,
        form: &mut ContactForm,
        mailer: &Arc<dyn Mailer>,
    ) {
        self.fps_hud(ctx, fps);
        if self.scene == SceneKind::Gallery && !pointer_locked {
            Self::instructions_card(ctx);
        }
        self.sections(ctx, form, mailer);
    }

    fn fps_hud(&self, ctx: &egui::Context, fps: f32) {
        egui::Window::new("FPS")
            .title_bar(false)
            .resizable(false)
            .fixed_pos(egui::pos2(10.0, 10.0))
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.label(RichText::new(format!("{:.0}", fps)).size(32.0).color(ACCENT));
                ui.label(RichText::new("FPS").size(10.0).color(Color32::GRAY));
            });
    }

    fn instructions_card(ctx: &egui::Context) {
        egui::Window::new("Welcome to the Gallery")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("W A S D or arrow keys to move");
                ui.label("Mouse to look around");
                ui.label(
                    RichText::new("Click the scene to start exploring, Esc to let go")
                        .color(Color32::GRAY),
                );
            });
    }

    fn sections(&mut self, ctx: &egui::Context, form: &mut ContactForm, mailer: &Arc<dyn Mailer>) {
        let profile = &content::PROFILE;

        let mut build = |overlay: &mut Overlay, ui: &mut egui::Ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new(profile.name).size(24.0));
                ui.label(RichText::new(profile.tagline).italics().color(Color32::GRAY));
                ui.add_space(4.0);
                ui.hyperlink(profile.github);
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Scene:");
                    ui.selectable_value(
                        &mut overlay.scene,
                        SceneKind::Gallery,
                        SceneKind::Gallery.label(),
                    );
                    ui.selectable_value(
                        &mut overlay.scene,
                        SceneKind::TechSphere,
                        SceneKind::TechSphere.label(),
                    );
                });
                ui.separator();

                egui::CollapsingHeader::new("About")
                    .default_open(!overlay.compact)
                    .show(ui, |ui| {
                        ui.label(profile.about);
                        ui.add_space(2.0);
                        ui.label(format!("{}  |  {}", profile.location, profile.email));
                    });

                egui::CollapsingHeader::new("Skills").show(ui, |ui| {
                    for group in content::SKILLS {
                        ui.label(RichText::new(group.area).strong());
                        ui.label(group.items.join(", "));
                        ui.add_space(2.0);
                    }
                });

                egui::CollapsingHeader::new("Projects").show(ui, |ui| {
                    for project in content::PROJECTS {
                        ui.label(RichText::new(project.title).strong());
                        ui.label(project.summary);
                        ui.label(
                            RichText::new(project.tags.join(" / "))
                                .small()
                                .color(Color32::GRAY),
                        );
                        ui.hyperlink(project.link);
                        ui.add_space(4.0);
                    }
                });

                egui::CollapsingHeader::new("Achievements").show(ui, |ui| {
                    for a in content::ACHIEVEMENTS {
                        ui.label(RichText::new(a.title).strong());
                        ui.label(
                            RichText::new(format!("{} | {}", a.category, a.date))
                                .small()
                                .color(Color32::GRAY),
                        );
                        ui.label(a.description);
                        ui.add_space(4.0);
                    }
                });

                egui::CollapsingHeader::new("Certificates").show(ui, |ui| {
                    for cert in content::CERTIFICATES {
                        ui.label(cert.title);
                        ui.label(RichText::new(cert.image_url()).small().color(Color32::GRAY));
                    }
                });

                egui::CollapsingHeader::new("Contact").show(ui, |ui| {
                    contact_form_ui(ui, form, mailer);
                });
            });
        };

        if self.compact {
            egui::TopBottomPanel::bottom("sections")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    let label = if self.sections_open { "Hide" } else { "Portfolio" };
                    if ui.button(label).clicked() {
                        self.sections_open = !self.sections_open;
                    }
                    if self.sections_open {
                        build(self, ui);
                    }
                });
        } else {
            egui::SidePanel::right("sections")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| build(self, ui));
        }
    }
}

fn contact_form_ui(ui: &mut egui::Ui, form: &mut ContactForm, mailer: &Arc<dyn Mailer>) {
    let sending = form.in_flight();

    ui.add_enabled_ui(!sending, |ui| {
        ui.add(egui::TextEdit::singleline(&mut form.fields.name).hint_text("Your name"));
        ui.add(egui::TextEdit::singleline(&mut form.fields.email).hint_text("Your email"));
        ui.add(egui::TextEdit::singleline(&mut form.fields.subject).hint_text("Subject"));
        ui.add(
            egui::TextEdit::multiline(&mut form.fields.message)
                .hint_text("Your message")
                .desired_rows(5),
        );
    });

    let label = if sending { "Sending..." } else { "Send Message" };
    if ui
        .add_enabled(form.can_submit(), egui::Button::new(label))
        .clicked()
    {
        form.submit(mailer.clone());
    }

    match form.status() {
        SubmitStatus::Sent { .. } => {
            ui.label(
                RichText::new("Your message has been sent successfully!").color(SUCCESS_GREEN),
            );
        }
        SubmitStatus::Failed { reason } => {
            ui.label(RichText::new(reason.as_str()).color(ERROR_RED));
        }
        SubmitStatus::Idle | SubmitStatus::Sending => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_splits_layouts() {
        assert!(is_compact(Some(800.0)));
        assert!(!is_compact(Some(1024.0)));
        assert!(!is_compact(Some(1600.0)));
    }

    #[test]
    fn absent_size_signal_defaults_to_desktop() {
        assert!(!is_compact(None));
    }
}
