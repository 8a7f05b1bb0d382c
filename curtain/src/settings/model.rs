use std::str::FromStr;
use std::time::Duration;

use curtain_surface::{
    DEFAULT_HIDE_DELAY, DEFAULT_REVEAL_DELAY, PageElements, TransitionConfig,
    TransitionMode,
};
use serde::Deserialize;

const DEFAULT_NAV_LINKS: [&str; 3] = ["Packages", "Customers", "Start Hosting"];

/// Typed settings payload used to wire the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct SettingsData {
    transition: TransitionSettingsData,
    page: PageSettingsData,
}

/// Transition timing settings.
#[derive(Debug, Clone, PartialEq)]
struct TransitionSettingsData {
    mode: TransitionMode,
    reveal_delay_ms: u64,
    hide_delay_ms: u64,
}

impl Default for TransitionSettingsData {
    fn default() -> Self {
        Self {
            mode: TransitionMode::default(),
            reveal_delay_ms: millis(DEFAULT_REVEAL_DELAY),
            hide_delay_ms: millis(DEFAULT_HIDE_DELAY),
        }
    }
}

/// Page inventory and content settings.
#[derive(Debug, Clone, PartialEq)]
struct PageSettingsData {
    elements: PageElements,
    plans: Vec<PlanData>,
    nav_links: Vec<String>,
}

impl Default for PageSettingsData {
    fn default() -> Self {
        Self {
            elements: PageElements::default(),
            plans: default_plans(),
            nav_links: DEFAULT_NAV_LINKS.map(String::from).to_vec(),
        }
    }
}

/// One pricing plan card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct PlanData {
    pub(crate) title: String,
    pub(crate) price: String,
    #[serde(default)]
    pub(crate) features: Vec<String>,
    #[serde(default)]
    pub(crate) highlighted: bool,
}

impl PlanData {
    fn new(title: &str, price: &str, features: &[&str]) -> Self {
        Self {
            title: String::from(title),
            price: String::from(price),
            features: features.iter().map(|item| item.to_string()).collect(),
            highlighted: false,
        }
    }

    fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }
}

impl SettingsData {
    /// Page elements the panels get wired to.
    pub(crate) fn page_elements(&self) -> PageElements {
        self.page.elements
    }

    /// Transition mode and delays for the panel controller.
    pub(crate) fn transition_config(&self) -> TransitionConfig {
        TransitionConfig::new(self.transition.mode).with_delays(
            Duration::from_millis(self.transition.reveal_delay_ms),
            Duration::from_millis(self.transition.hide_delay_ms),
        )
    }

    pub(crate) fn plans(&self) -> &[PlanData] {
        &self.page.plans
    }

    pub(crate) fn nav_links(&self) -> &[String] {
        &self.page.nav_links
    }

    /// Build settings from a JSON value, keeping defaults for every field
    /// that is missing or malformed.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut settings = SettingsData::default();

        if let Some(transition) = value.get("transition") {
            if let Some(mode) = read_mode(transition) {
                settings.transition.mode = mode;
            }

            if let Some(delay) = read_u64_field(transition, "reveal_delay_ms")
            {
                settings.transition.reveal_delay_ms = delay;
            }

            if let Some(delay) = read_u64_field(transition, "hide_delay_ms") {
                settings.transition.hide_delay_ms = delay;
            }
        }

        if let Some(page) = value.get("page") {
            for (key, flag) in ELEMENT_FIELDS {
                if let Some(present) = read_bool_field(page, key) {
                    settings.page.elements.set(flag, present);
                }
            }

            if let Some(plans) = read_plans(page.get("plans")) {
                settings.page.plans = plans;
            }

            if let Some(links) = read_nav_links(page.get("nav_links")) {
                settings.page.nav_links = links;
            }
        }

        settings
    }
}

const ELEMENT_FIELDS: [(&str, PageElements); 5] = [
    ("backdrop", PageElements::BACKDROP),
    ("modal", PageElements::MODAL),
    ("nav_drawer", PageElements::NAV_DRAWER),
    ("nav_toggle", PageElements::NAV_TOGGLE),
    ("close_action", PageElements::CLOSE_ACTION),
];

fn default_plans() -> Vec<PlanData> {
    vec![
        PlanData::new("Free", "$0/month", &["1 Website", "Shared hosting"]),
        PlanData::new(
            "Plus",
            "$9.99/month",
            &["5 Websites", "Dedicated CPU", "Daily backups"],
        )
        .highlighted(),
        PlanData::new(
            "Premium",
            "$29.99/month",
            &["Unlimited Websites", "Dedicated server", "24/7 support"],
        ),
    ]
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn read_mode(value: &serde_json::Value) -> Option<TransitionMode> {
    let name = value.get("mode")?.as_str()?;
    match TransitionMode::from_str(name) {
        Ok(mode) => Some(mode),
        Err(err) => {
            log::warn!("{err}, keeping the default transition mode");
            None
        },
    }
}

fn read_u64_field(value: &serde_json::Value, key: &str) -> Option<u64> {
    value.get(key).and_then(serde_json::Value::as_u64)
}

fn read_bool_field(value: &serde_json::Value, key: &str) -> Option<bool> {
    value.get(key).and_then(serde_json::Value::as_bool)
}

fn read_plans(value: Option<&serde_json::Value>) -> Option<Vec<PlanData>> {
    let entries = value?.as_array()?;
    let plans: Vec<PlanData> = entries
        .iter()
        .filter_map(|entry| match PlanData::deserialize(entry) {
            Ok(plan) => Some(plan),
            Err(err) => {
                log::warn!("skipping malformed plan entry: {err}");
                None
            },
        })
        .collect();

    if plans.is_empty() { None } else { Some(plans) }
}

fn read_nav_links(value: Option<&serde_json::Value>) -> Option<Vec<String>> {
    let entries = value?.as_array()?;
    let links: Vec<String> = entries
        .iter()
        .filter_map(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|link| !link.is_empty())
        .map(ToString::to_string)
        .collect();

    if links.is_empty() { None } else { Some(links) }
}
