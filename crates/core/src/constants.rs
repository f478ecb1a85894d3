/// Backend settings row key for the shared app configuration.
pub const APP_CONFIG_SETTING_KEY: &str = "app_config";

/// Default days-ahead threshold for PRS meeting reminders.
pub const DEFAULT_PRS_THRESHOLD_DAYS: i64 = 1;

/// Default lookahead, in months, for the refinancing window.
pub const DEFAULT_REFINANCING_LOOKAHEAD_MONTHS: u32 = 1;

/// Country calling code used when normalizing local phone numbers.
pub const PHONE_COUNTRY_PREFIX: &str = "62";
