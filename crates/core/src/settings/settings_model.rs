//! Application configuration models.

use serde::{Deserialize, Serialize};

use crate::agenda::AgendaConfig;
use crate::constants::{DEFAULT_PRS_THRESHOLD_DAYS, DEFAULT_REFINANCING_LOOKAHEAD_MONTHS};

/// The resolved application configuration.
///
/// Built by layering overrides on top of [`AppConfig::default`]; callers
/// receive it by value and never reach into a global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub show_hero_section: bool,
    pub show_stats_cards: bool,
    pub debug_mode: bool,
    pub prs_threshold_days: i64,
    pub refinancing_lookahead_months: u32,
    pub customer_sheet_enabled: bool,
    pub plans_sheet_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_hero_section: true,
            show_stats_cards: true,
            debug_mode: false,
            prs_threshold_days: DEFAULT_PRS_THRESHOLD_DAYS,
            refinancing_lookahead_months: DEFAULT_REFINANCING_LOOKAHEAD_MONTHS,
            customer_sheet_enabled: true,
            plans_sheet_enabled: true,
        }
    }
}

impl AppConfig {
    /// The agenda knobs carried by this configuration.
    pub fn agenda_config(&self) -> AgendaConfig {
        AgendaConfig {
            prs_threshold_days: self.prs_threshold_days,
            refinancing_lookahead_months: self.refinancing_lookahead_months,
        }
    }
}

/// A partial configuration; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfigPatch {
    pub show_hero_section: Option<bool>,
    pub show_stats_cards: Option<bool>,
    pub debug_mode: Option<bool>,
    pub prs_threshold_days: Option<i64>,
    pub refinancing_lookahead_months: Option<u32>,
    pub customer_sheet_enabled: Option<bool>,
    pub plans_sheet_enabled: Option<bool>,
}

impl AppConfigPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(v) = self.show_hero_section {
            config.show_hero_section = v;
        }
        if let Some(v) = self.show_stats_cards {
            config.show_stats_cards = v;
        }
        if let Some(v) = self.debug_mode {
            config.debug_mode = v;
        }
        if let Some(v) = self.prs_threshold_days {
            config.prs_threshold_days = v;
        }
        if let Some(v) = self.refinancing_lookahead_months {
            config.refinancing_lookahead_months = v;
        }
        if let Some(v) = self.customer_sheet_enabled {
            config.customer_sheet_enabled = v;
        }
        if let Some(v) = self.plans_sheet_enabled {
            config.plans_sheet_enabled = v;
        }
    }

    /// Folds `other` over `self`, with `other` winning where both set a
    /// field.
    pub fn merge(&self, other: &AppConfigPatch) -> AppConfigPatch {
        AppConfigPatch {
            show_hero_section: other.show_hero_section.or(self.show_hero_section),
            show_stats_cards: other.show_stats_cards.or(self.show_stats_cards),
            debug_mode: other.debug_mode.or(self.debug_mode),
            prs_threshold_days: other.prs_threshold_days.or(self.prs_threshold_days),
            refinancing_lookahead_months: other
                .refinancing_lookahead_months
                .or(self.refinancing_lookahead_months),
            customer_sheet_enabled: other.customer_sheet_enabled.or(self.customer_sheet_enabled),
            plans_sheet_enabled: other.plans_sheet_enabled.or(self.plans_sheet_enabled),
        }
    }
}
