//! Main application UI.
//! Draws the swipeable card stack, the create/edit modal and import/export dialogs.

use chrono::Local;
use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use flipcards::database::KeyValueStore;
use flipcards::export::json::{default_export_name, export_json_to_path, import_json};
use flipcards::models::{CardForm, CardImage, CardViewer, DeckStore, Face, SaveOutcome};

const FRONT_COLOR: Color32 = Color32::from_rgb(0xAD, 0xD8, 0xE6);
const BACK_COLOR: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);
const STACK_SEPARATION: f32 = 15.0;
const SWIPE_THRESHOLD: f32 = 120.0;
const CARD_ROUNDING: f32 = 12.0;

/// Resolves a stored picture tag to what gets drawn around the card.
fn image_accent(image: CardImage) -> Color32 {
    match image {
        CardImage::Flowers => Color32::from_rgb(0xF4, 0x8F, 0xB1),
    }
}

/// Main application state
pub struct FlipcardsApp<S> {
    deck: DeckStore<S>,
    viewer: CardViewer,
    form: CardForm,
    drag_offset: f32,

    show_result_dialog: bool,
    result_message: String,
}

impl<S: KeyValueStore> eframe::App for FlipcardsApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time) * 1000.0;
        self.viewer.sync_len(self.deck.len());

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Flashcards");
                ui.separator();
                if ui.button("Export").clicked() {
                    self.handle_export();
                }
                if ui.button("Import").clicked() {
                    self.handle_import();
                }
                if ui.button("+").on_hover_text("New flashcard").clicked() {
                    self.form.open_for_create();
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(Color32::BLACK).inner_margin(20.0))
            .show(ctx, |ui| self.render_stack(ui, now));

        self.render_form(ctx);

        if self.show_result_dialog {
            egui::Window::new("Import/Export Result")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_result_dialog = false;
                    }
                });
        }

        let fading = self
            .viewer
            .cursor()
            .and_then(|i| self.viewer.flip(i))
            .is_some_and(|f| f.face() == Face::Back && f.edit_opacity(now) < 1.0);
        if self.viewer.is_animating(now) || fading {
            ctx.request_repaint();
        }
    }
}

impl<S: KeyValueStore> FlipcardsApp<S> {
    /// Creates the app around an already initialized deck
    pub fn new(deck: DeckStore<S>) -> Self {
        let viewer = CardViewer::new(deck.len());
        Self {
            deck,
            viewer,
            form: CardForm::default(),
            drag_offset: 0.0,
            show_result_dialog: false,
            result_message: String::new(),
        }
    }

    /// Renders the visible stack, top card last so it is drawn above the others
    fn render_stack(&mut self, ui: &mut egui::Ui, now: f64) {
        let Some(top) = self.viewer.cursor() else {
            ui.centered_and_justified(|ui| {
                ui.colored_label(Color32::WHITE, "No cards yet. Press + to add one.");
            });
            return;
        };

        let available = ui.available_size();
        let size = Vec2::new(available.x * 0.9, available.y * 0.6);
        let (area, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        let painter = ui.painter_at(ui.max_rect());

        let stack = self.viewer.stack();
        for (depth, &index) in stack.iter().enumerate().rev().filter(|(d, _)| *d > 0) {
            let offset = Vec2::new(0.0, STACK_SEPARATION * depth as f32);
            let rect = area.translate(offset).shrink2(Vec2::new(8.0 * depth as f32, 0.0));
            painter.rect_filled(rect, CARD_ROUNDING, FRONT_COLOR.gamma_multiply(0.6));
            if let Some(card) = self.deck.get(index) {
                draw_text(&painter, rect, &card.front, Color32::WHITE.gamma_multiply(0.6));
            }
        }

        if response.dragged() {
            self.drag_offset += response.drag_delta().y;
        }
        if response.drag_stopped() {
            if self.drag_offset.abs() > SWIPE_THRESHOLD {
                self.viewer.swipe_away();
            }
            self.drag_offset = 0.0;
        } else if response.clicked() {
            self.viewer.tap(top, now);
        }

        let top = self.viewer.cursor().unwrap_or(top);
        let Some(card) = self.deck.get(top) else {
            return;
        };
        let rotation = self
            .viewer
            .flip(top)
            .map(|f| f.rotation(now))
            .unwrap_or_default();

        // Fake the Y rotation by squeezing the card horizontally.
        let squeeze = rotation.to_radians().cos().abs().max(0.02);
        let rect = Rect::from_center_size(
            area.center() + Vec2::new(0.0, self.drag_offset),
            Vec2::new(area.width() * squeeze, area.height()),
        );
        let (fill, text) = if rotation > 90.0 {
            (BACK_COLOR, &card.back)
        } else {
            (FRONT_COLOR, &card.front)
        };
        painter.rect(
            rect,
            CARD_ROUNDING,
            fill,
            Stroke::new(3.0, image_accent(card.image)),
        );
        if squeeze > 0.3 {
            draw_text(&painter, rect, text, Color32::WHITE);
        }

        let mut open_edit = false;
        if self.viewer.edit_affordance_visible(top, now) {
            let opacity = self
                .viewer
                .flip(top)
                .map(|f| f.edit_opacity(now))
                .unwrap_or(1.0);
            let button_rect =
                Rect::from_center_size(rect.center_bottom() - Vec2::new(0.0, 30.0), Vec2::new(90.0, 32.0));
            let label = egui::RichText::new("Edit").color(Color32::WHITE.gamma_multiply(opacity));
            open_edit = ui.put(button_rect, egui::Button::new(label)).clicked();
        }

        ui.add_space(STACK_SEPARATION * stack.len() as f32);
        ui.horizontal(|ui| {
            ui.colored_label(
                Color32::WHITE,
                format!("Card {} of {}", top + 1, self.deck.len()),
            );
            if ui.button("Next").clicked() {
                self.viewer.swipe_away();
            }
        });

        if open_edit {
            if let Some(card) = self.deck.get(top).cloned() {
                self.form.open_for_edit(top, &card);
            }
        }
    }

    /// Renders the create/edit modal while the form is open
    fn render_form(&mut self, ctx: &egui::Context) {
        let title = self.form.title();
        let mut action_save = false;
        let mut action_cancel = false;

        let Some(draft) = self.form.draft_mut() else {
            return;
        };
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_BOTTOM, [0.0, -20.0])
            .show(ctx, |ui| {
                ui.label("Front");
                ui.add(
                    egui::TextEdit::multiline(&mut draft.front)
                        .hint_text("Enter the front of the card")
                        .desired_rows(4),
                );
                ui.label("Back");
                ui.add(
                    egui::TextEdit::multiline(&mut draft.back)
                        .hint_text("Enter the back of the card")
                        .desired_rows(4),
                );
                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        action_save = true;
                    }
                    if ui.button("Cancel").clicked() {
                        action_cancel = true;
                    }
                });
            });

        if action_save && self.form.save(&mut self.deck) == SaveOutcome::Committed {
            self.viewer.sync_len(self.deck.len());
        }
        if action_cancel {
            self.form.cancel();
        }
    }

    /// Handles deck export to a JSON file
    fn handle_export(&mut self) {
        let file_name = default_export_name(Local::now().date_naive());
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return;
        };

        self.result_message = match export_json_to_path(self.deck.cards(), &path) {
            Ok(()) => format!("Exported {} cards.", self.deck.len()),
            Err(e) => format!("Export failed: {}", e),
        };
        self.show_result_dialog = true;
    }

    /// Handles import from a JSON file; every card goes through the normal append path
    fn handle_import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        self.result_message = match import_json(&path) {
            Ok(cards) => {
                let total = cards.len();
                let mut added = 0;
                for card in cards {
                    if self.deck.append(card) {
                        added += 1;
                    }
                }
                self.viewer.sync_len(self.deck.len());
                format!("Imported {} of {} cards.", added, total)
            }
            Err(e) => format!(
                "Import failed: {}\n\nThe file should hold a list of cards:\n[{{ \"front\": \"...\", \"back\": \"...\" }}]",
                e
            ),
        };
        self.show_result_dialog = true;
    }
}

fn draw_text(painter: &egui::Painter, rect: Rect, text: &str, color: Color32) {
    let galley = painter.layout(
        text.to_string(),
        FontId::proportional(30.0),
        color,
        rect.width() - 24.0,
    );
    let pos = Pos2::new(
        rect.center().x - galley.size().x / 2.0,
        rect.center().y - galley.size().y / 2.0,
    );
    painter.galley(pos, galley, color);
}
