use eframe::egui;
use egui_extras::{Size, StripBuilder};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::config::AppConfig;
use crate::dispatch::{FormValues, OutputSink, Rendered, STATUS_ERROR, call_api};
use crate::error::TransportError;
use crate::form::{
    API_CONFIG_CONTAINER, ApiConfigForm, Control, FieldId, FormHost, InputType,
    create_api_config_ui,
};
use crate::http::sends_body;
use crate::transport::HttpTransport;

#[derive(PartialEq)]
enum RequestTab {
    Body,
    Path,
    Query,
    Headers,
}

#[derive(PartialEq, Clone)]
enum LayoutMode {
    Horizontal,
    Vertical,
}

pub struct ApiCallerApp {
    config: AppConfig,

    // Request configuration
    host: FormHost,
    form: Option<ApiConfigForm>,
    body: String,
    path_params: Vec<String>,
    query_params: Vec<String>,
    header_params: Vec<String>,

    // Output surfaces
    response_status: String,
    response_body: String,

    // UI state
    in_flight: usize,
    active_request_tab: RequestTab,
    layout_mode: LayoutMode,

    // Completed dispatches come back through here
    tx: Sender<Rendered>,
    rx: Receiver<Rendered>,
}

impl Default for ApiCallerApp {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl ApiCallerApp {
    pub fn new(config: AppConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut host = FormHost::new().with_container(API_CONFIG_CONTAINER);
        let form = create_api_config_ui(&mut host, API_CONFIG_CONTAINER, &config);

        Self {
            config,
            host,
            form,
            body: "{\n  \"message\": \"hello\"\n}".to_string(),
            path_params: Vec::new(),
            query_params: Vec::new(),
            header_params: Vec::new(),
            response_status: String::new(),
            response_body: String::new(),
            in_flight: 0,
            active_request_tab: RequestTab::Body,
            layout_mode: LayoutMode::Horizontal,
            tx,
            rx,
        }
    }

    pub fn response_status(&self) -> &str {
        &self.response_status
    }

    pub fn response_body(&self) -> &str {
        &self.response_body
    }

    fn field(&self, field: FieldId) -> String {
        self.form
            .as_ref()
            .map(|form| form.value(&self.host, field).to_string())
            .unwrap_or_default()
    }

    /// Copies the current form state for a dispatch.
    pub fn snapshot(&self) -> FormValues {
        FormValues {
            method: self.field(FieldId::Method),
            protocol: self.field(FieldId::Protocol),
            port: self.field(FieldId::Port),
            api_url: self.field(FieldId::ApiUrl),
            body: self.body.clone(),
            path_params: self.path_params.clone(),
            query_params: self.query_params.clone(),
            header_params: self.header_params.clone(),
        }
    }

    pub fn reset_form(&mut self) {
        self.form = create_api_config_ui(&mut self.host, API_CONFIG_CONTAINER, &self.config);
    }

    fn prettify_body(&mut self) {
        if let Some(pretty) = prettify_json(&self.body) {
            self.body = pretty;
        }
    }

    fn apply(&mut self, rendered: Rendered) {
        self.set_status(rendered.status);
        self.set_body(rendered.body);
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn send_request(&mut self) {
        self.in_flight += 1;
        self.response_status.clear();
        self.response_body = "Loading...".to_string();

        let form = self.snapshot();
        let tx = self.tx.clone();

        std::thread::spawn(move || {
            let mut rendered = Rendered::default();

            match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(async {
                    let transport = HttpTransport::new();
                    call_api(&form, &transport, &mut rendered).await;
                }),
                Err(e) => {
                    let e = TransportError::from(e);
                    tracing::error!(error = %e, "could not start request runtime");
                    rendered.set_status(STATUS_ERROR.to_string());
                    rendered.set_body(e.to_string());
                }
            }

            let _ = tx.send(rendered);
        });
    }

    fn render_config_row(&mut self, ui: &mut egui::Ui) {
        let Some(container) = self.host.container_mut(API_CONFIG_CONTAINER) else {
            return;
        };

        for control in container.controls_mut() {
            match control {
                Control::Label(text) => {
                    ui.label(text.as_str());
                }
                Control::Select {
                    id,
                    options,
                    selected,
                } => {
                    let current = options.get(*selected).cloned().unwrap_or_default();
                    egui::ComboBox::from_id_salt(id.as_str())
                        .selected_text(current)
                        .width(80.0)
                        .show_ui(ui, |ui| {
                            for (i, option) in options.iter().enumerate() {
                                ui.selectable_value(&mut *selected, i, option.as_str());
                            }
                        });
                }
                Control::Input {
                    input_type, value, ..
                } => {
                    let width = match input_type {
                        InputType::Number => 60.0,
                        InputType::Url => 260.0,
                    };
                    ui.add(egui::TextEdit::singleline(&mut *value).desired_width(width));
                    if *input_type == InputType::Number {
                        value.retain(|c| c.is_ascii_digit());
                    }
                }
                Control::LineBreak => {
                    ui.separator();
                }
            }
        }
    }

    fn render_request_section(&mut self, ui: &mut egui::Ui) {
        egui::Frame::NONE
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.expand_to_include_rect(ui.max_rect());
                ui.strong("Request");
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.active_request_tab, RequestTab::Body, "Body");
                    ui.selectable_value(&mut self.active_request_tab, RequestTab::Path, "Path");
                    ui.selectable_value(&mut self.active_request_tab, RequestTab::Query, "Query");
                    ui.selectable_value(
                        &mut self.active_request_tab,
                        RequestTab::Headers,
                        "Headers",
                    );
                });

                ui.separator();
                ui.add_space(4.0);

                match self.active_request_tab {
                    RequestTab::Body => {
                        let method = self.field(FieldId::Method);
                        ui.horizontal(|ui| {
                            if !sends_body(&method.to_uppercase()) {
                                ui.weak(format!("{method} requests are sent without a body."));
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("Prettify").clicked() {
                                        self.prettify_body();
                                    }
                                },
                            );
                        });
                        ui.add_space(6.0);

                        egui::ScrollArea::vertical()
                            .id_salt("body_scroll")
                            .show(ui, |ui| {
                                let line_height =
                                    ui.text_style_height(&egui::TextStyle::Monospace);
                                let rows = (ui.available_height() / line_height).max(1.0) as usize;
                                ui.expand_to_include_rect(ui.max_rect());

                                egui::TextEdit::multiline(&mut self.body)
                                    .code_editor()
                                    .desired_width(f32::INFINITY)
                                    .desired_rows(rows)
                                    .show(ui);
                            });
                    }
                    RequestTab::Path => {
                        render_entries(ui, "path_param", "segment", &mut self.path_params);
                    }
                    RequestTab::Query => {
                        render_entries(ui, "query_param", "key=value", &mut self.query_params);
                    }
                    RequestTab::Headers => {
                        render_entries(ui, "header_param", "Name=value", &mut self.header_params);
                    }
                }
            });
    }

    fn render_response_section(&mut self, ui: &mut egui::Ui) {
        egui::Frame::NONE
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.expand_to_include_rect(ui.max_rect());
                ui.horizontal(|ui| {
                    ui.strong("Response");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.in_flight > 0 {
                            ui.spinner();
                        }
                        if !self.response_status.is_empty() {
                            ui.label(&self.response_status);
                        }
                    });
                });
                ui.separator();
                ui.add_space(4.0);

                egui::ScrollArea::vertical()
                    .id_salt("response_scroll")
                    .show(ui, |ui| {
                        let line_height = ui.text_style_height(&egui::TextStyle::Monospace);
                        let rows = (ui.available_height() / line_height).max(1.0) as usize;
                        ui.expand_to_include_rect(ui.max_rect());
                        ui.add(
                            egui::TextEdit::multiline(&mut self.response_body.as_str())
                                .code_editor()
                                .desired_width(f32::INFINITY)
                                .desired_rows(rows),
                        );
                    });
            });
    }
}

impl OutputSink for ApiCallerApp {
    fn set_status(&mut self, status: String) {
        self.response_status = status;
    }

    fn set_body(&mut self, body: String) {
        self.response_body = body;
    }
}

impl eframe::App for ApiCallerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Later completions overwrite earlier ones
        while let Ok(rendered) = self.rx.try_recv() {
            self.apply(rendered);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.config.title.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.layout_mode == LayoutMode::Horizontal {
                        "Horizontal"
                    } else {
                        "Vertical"
                    };
                    if ui.button(label).on_hover_text("Toggle Layout").clicked() {
                        self.layout_mode = match self.layout_mode {
                            LayoutMode::Horizontal => LayoutMode::Vertical,
                            LayoutMode::Vertical => LayoutMode::Horizontal,
                        };
                    }
                });
            });

            ui.add_space(8.0);

            ui.group(|ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.style_mut().spacing.interact_size.y = 30.0;

                    self.render_config_row(ui);

                    if ui.button("Reset").on_hover_text("Rebuild the form").clicked() {
                        self.reset_form();
                    }
                    let send_button =
                        ui.add(egui::Button::new("Send").min_size(egui::vec2(80.0, 30.0)));
                    if send_button.clicked() {
                        self.send_request();
                    }
                });
            });

            ui.add_space(8.0);

            match self.layout_mode {
                LayoutMode::Horizontal => {
                    StripBuilder::new(ui)
                        .size(Size::remainder())
                        .size(Size::remainder())
                        .horizontal(|mut strip| {
                            strip.cell(|ui| {
                                self.render_request_section(ui);
                            });
                            strip.cell(|ui| {
                                self.render_response_section(ui);
                            });
                        });
                }
                LayoutMode::Vertical => {
                    self.render_request_section(ui);
                    ui.add_space(8.0);
                    self.render_response_section(ui);
                }
            }
        });

        // Keep repainting until every dispatch has reported back
        if self.in_flight > 0 {
            ctx.request_repaint();
        }
    }
}

/// One editable row per entry, with remove buttons and an add button.
fn render_entries(ui: &mut egui::Ui, id_salt: &str, hint: &str, entries: &mut Vec<String>) {
    egui::ScrollArea::vertical()
        .id_salt(id_salt)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            let mut to_remove = None;

            for (i, entry) in entries.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(entry)
                            .hint_text(hint)
                            .desired_width(ui.available_width() - 40.0),
                    );
                    if ui.button("❌").clicked() {
                        to_remove = Some(i);
                    }
                });
            }

            if let Some(i) = to_remove {
                entries.remove(i);
            }

            ui.add_space(6.0);

            if ui.button("➕ Add").clicked() {
                entries.push(String::new());
            }
        });
}

/// Re-indents `text` if it parses as JSON.
pub fn prettify_json(text: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(text).ok()?;
    serde_json::to_string_pretty(&json).ok()
}
