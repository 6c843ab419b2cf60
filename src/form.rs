//! The API configuration form.
//!
//! Controls live in named containers owned by a [`FormHost`]. The builder
//! fills a container with labeled controls and hands back an
//! [`ApiConfigForm`], which reads their current values by [`FieldId`].

use crate::config::AppConfig;

pub const API_CONFIG_CONTAINER: &str = "api_config";

pub const PROTOCOLS: [&str; 2] = ["http", "https"];
pub const METHODS: [&str; 4] = ["GET", "POST", "PUT", "DELETE"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Protocol,
    Port,
    ApiUrl,
    Method,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Protocol => "conn_protocol",
            FieldId::Port => "port",
            FieldId::ApiUrl => "api_url",
            FieldId::Method => "method",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Number,
    Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Label(String),
    Select {
        id: FieldId,
        options: Vec<String>,
        selected: usize,
    },
    Input {
        id: FieldId,
        input_type: InputType,
        value: String,
    },
    LineBreak,
}

impl Control {
    pub fn id(&self) -> Option<FieldId> {
        match self {
            Control::Select { id, .. } | Control::Input { id, .. } => Some(*id),
            Control::Label(_) | Control::LineBreak => None,
        }
    }

    /// The selected option of a select, or the text of an input.
    pub fn value(&self) -> Option<&str> {
        match self {
            Control::Select {
                options, selected, ..
            } => options.get(*selected).map(String::as_str),
            Control::Input { value, .. } => Some(value.as_str()),
            Control::Label(_) | Control::LineBreak => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    controls: Vec<Control>,
}

impl Container {
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut [Control] {
        &mut self.controls
    }

    pub fn clear(&mut self) {
        self.controls.clear();
    }

    pub fn push(&mut self, control: Control) {
        self.controls.push(control);
    }

    pub fn find(&self, id: FieldId) -> Option<&Control> {
        self.controls.iter().find(|c| c.id() == Some(id))
    }
}

/// Named containers that forms can be built into.
#[derive(Debug, Clone, Default)]
pub struct FormHost {
    containers: Vec<(String, Container)>,
}

impl FormHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: &str) -> Self {
        self.add_container(id);
        self
    }

    pub fn add_container(&mut self, id: &str) {
        if self.container(id).is_none() {
            self.containers.push((id.to_string(), Container::default()));
        }
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, container)| container)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers
            .iter_mut()
            .find(|(name, _)| name == id)
            .map(|(_, container)| container)
    }
}

/// Typed handle on a built configuration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfigForm {
    container_id: String,
}

impl ApiConfigForm {
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Current value of `field`, or `""` when the control is gone.
    pub fn value<'a>(&self, host: &'a FormHost, field: FieldId) -> &'a str {
        host.container(&self.container_id)
            .and_then(|container| container.find(field))
            .and_then(Control::value)
            .unwrap_or("")
    }
}

/// Fills `container_id` with the protocol, port, URL and method controls.
///
/// Existing content is replaced. Returns `None` and touches nothing when the
/// container does not exist.
pub fn create_api_config_ui(
    host: &mut FormHost,
    container_id: &str,
    config: &AppConfig,
) -> Option<ApiConfigForm> {
    let container = host.container_mut(container_id)?;
    container.clear();

    append_labeled(
        container,
        "Protocol",
        select(FieldId::Protocol, &PROTOCOLS),
    );
    append_labeled(
        container,
        "Port",
        input(FieldId::Port, InputType::Number, &config.default_port),
    );
    append_labeled(
        container,
        "API URL",
        input(FieldId::ApiUrl, InputType::Url, &config.default_api_url),
    );
    append_labeled(container, "Method", select(FieldId::Method, &METHODS));

    tracing::debug!(container = container_id, "built api config form");

    Some(ApiConfigForm {
        container_id: container_id.to_string(),
    })
}

fn select(id: FieldId, options: &[&str]) -> Control {
    Control::Select {
        id,
        options: options.iter().map(|o| o.to_string()).collect(),
        selected: 0,
    }
}

fn input(id: FieldId, input_type: InputType, value: &str) -> Control {
    Control::Input {
        id,
        input_type,
        value: value.to_string(),
    }
}

fn append_labeled(container: &mut Container, label: &str, target: Control) {
    container.push(Control::Label(format!("{label}: ")));
    container.push(target);
    container.push(Control::LineBreak);
}
