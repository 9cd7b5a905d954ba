use eframe::egui;
use crate::core::{AppConfig, SwapperState, UserAction};
use crate::gui::NativePrompter;
use crate::video::{FfmpegFrameSource, PreviewFrame};

/// The navigation row, left to right.
pub const NAVIGATION_BUTTONS: [(UserAction, &str); 3] = [
    (UserAction::Previous, "Previous Video"),
    (UserAction::ImportVideo, "Select Video"),
    (UserAction::Next, "Next Video"),
];

pub const APPLY_LABEL: &str = "Apply";

pub struct MenuSwapApp {
    pub state: SwapperState,
    prompter: NativePrompter,
    frames: FfmpegFrameSource,
    preview_texture: Option<egui::TextureHandle>,
    uploaded_revision: u64,
}

impl MenuSwapApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let config = AppConfig::load()?;
        log::info!("Video library: {}", config.library_directory.display());

        let prompter = NativePrompter::new();
        let frames = FfmpegFrameSource::new(config.ffmpeg_program());
        let state = SwapperState::startup(config, &prompter, &frames)?;
        log::info!("Preferences file: {}", state.preferences.path().display());

        let mut app = Self {
            state,
            prompter,
            frames,
            preview_texture: None,
            uploaded_revision: 0,
        };
        app.sync_preview_texture(&cc.egui_ctx);
        Ok(app)
    }

    /// Uploads the preview as a texture when the state holds a newer frame.
    fn sync_preview_texture(&mut self, ctx: &egui::Context) {
        if self.uploaded_revision == self.state.preview_revision {
            return;
        }
        if let Some(ref frame) = self.state.preview {
            let image = preview_color_image(frame);
            match self.preview_texture {
                Some(ref mut texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.preview_texture = Some(ctx.load_texture("preview", image, egui::TextureOptions::LINEAR));
                }
            }
        }
        self.uploaded_revision = self.state.preview_revision;
    }

    fn show_contents(&self, ui: &mut egui::Ui) -> Option<UserAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            let title = self.state.current().map(|entry| entry.display_name()).unwrap_or_default();
            ui.label(title);
        });
        ui.add_space(4.0);

        ui.columns(NAVIGATION_BUTTONS.len(), |columns| {
            for (column, (button_action, label)) in columns.iter_mut().zip(NAVIGATION_BUTTONS) {
                if wide_button(column, label) {
                    action = Some(button_action);
                }
            }
        });
        ui.add_space(8.0);

        // Leave room for the apply button below the preview
        let preview_size = egui::vec2(
            ui.available_width(),
            (self.state.config.preview_max_height as f32).min(ui.available_height() - 32.0).max(0.0),
        );
        ui.allocate_ui(preview_size, |ui| {
            ui.centered_and_justified(|ui| {
                if let Some(ref texture) = self.preview_texture {
                    ui.image((texture.id(), texture.size_vec2()));
                } else if self.state.entries.is_empty() {
                    ui.label("No videos yet. Use \"Select Video\" to add one.");
                }
            });
        });

        ui.add_space(4.0);
        if wide_button(ui, APPLY_LABEL) {
            action = Some(UserAction::Apply);
        }

        action
    }
}

impl eframe::App for MenuSwapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| self.show_contents(ui))
            .inner;

        if let Some(action) = action {
            self.state.dispatch(action, &self.prompter, &self.frames);
            self.sync_preview_texture(ctx);
            ctx.request_repaint();
        }
    }
}

fn wide_button(ui: &mut egui::Ui, text: &str) -> bool {
    let width = ui.available_width();
    ui.add_sized([width, 24.0], egui::Button::new(text)).clicked()
}

pub fn preview_color_image(frame: &PreviewFrame) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(frame.size(), frame.image.as_raw())
}
