// Options resolver
// Merges host-supplied partial options with an optional injected
// default set, then fills every remaining gap with hard defaults.
// Resolution never fails: absent or inconsistent fields fall back
// silently.

use chrono::{Duration, Local, NaiveDate};

use crate::models::options::{CalendarOptions, PickMode, ResolvedOptions};

/// Formatted-result date pattern.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Month title pattern.
pub const DEFAULT_MONTH_FORMAT: &str = "%b %Y";
/// Minimum months built per page.
pub const DEFAULT_STEP: u32 = 12;
pub const DEFAULT_COLOR: &str = "primary";

fn default_weekdays() -> Vec<String> {
    ["S", "M", "T", "W", "T", "F", "S"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Resolves partial options. An injected default set sits between the
/// partial and the hard defaults: the partial wins, then the injected
/// defaults, then the hard default.
#[derive(Debug, Clone, Default)]
pub struct OptionsResolver {
    defaults: Option<CalendarOptions>,
}

impl OptionsResolver {
    pub fn new() -> Self {
        Self { defaults: None }
    }

    pub fn with_defaults(defaults: CalendarOptions) -> Self {
        Self {
            defaults: Some(defaults),
        }
    }

    /// Resolve against the current local date.
    pub fn resolve(&self, options: &CalendarOptions) -> ResolvedOptions {
        self.resolve_at(options, Local::now().date_naive())
    }

    /// Resolve with an explicit "today", so defaults are reproducible.
    pub fn resolve_at(&self, options: &CalendarOptions, today: NaiveDate) -> ResolvedOptions {
        let defaults = self.defaults.clone().unwrap_or_default();

        let mut from = options
            .from
            .or(defaults.from)
            .unwrap_or(today);
        // A default range without an explicit lower bound backdates the
        // bound one day so the range's first day stays selectable.
        if options.from.is_none() {
            if let Some(range) = &options.default_date_range {
                from = range.from - Duration::days(1);
            }
        }

        let default_scroll_to = options.default_scroll_to.unwrap_or_else(|| {
            options
                .default_date_range
                .as_ref()
                .map(|range| range.from)
                .unwrap_or(from)
        });

        let clear_resets_to_default = options
            .clear_resets_to_default
            .or(defaults.clear_resets_to_default)
            .unwrap_or(false);
        let mut clear_label = options
            .clear_label
            .clone()
            .or_else(|| defaults.clear_label.clone())
            .unwrap_or_else(|| "Clear".to_string());
        if clear_resets_to_default && options.clear_label.is_none() && defaults.clear_label.is_none()
        {
            clear_label = "Reset".to_string();
        }

        let to = options.to.or(defaults.to);
        let can_backwards_selected = options
            .can_backwards_selected
            .or(defaults.can_backwards_selected)
            .unwrap_or(false);
        if let Some(to) = to {
            if from > to && !can_backwards_selected {
                log::warn!(
                    "inverted bounds {from}..{to}; most days will evaluate as out of range"
                );
            }
        }

        let weekdays = options
            .weekdays
            .clone()
            .or_else(|| defaults.weekdays.clone())
            .filter(|labels| labels.len() == 7)
            .unwrap_or_else(default_weekdays);

        ResolvedOptions {
            from,
            to,
            pick_mode: options
                .pick_mode
                .or(defaults.pick_mode)
                .unwrap_or(PickMode::Single),
            week_start: options.week_start.or(defaults.week_start).unwrap_or(0),
            disable_weeks: options
                .disable_weeks
                .clone()
                .or_else(|| defaults.disable_weeks.clone())
                .unwrap_or_default(),
            days_config: options
                .days_config
                .clone()
                .or_else(|| defaults.days_config.clone())
                .unwrap_or_default(),
            slots: options
                .slots
                .clone()
                .or_else(|| defaults.slots.clone())
                .unwrap_or_default(),
            max_range: options.max_range.or(defaults.max_range).unwrap_or(0),
            show_adjacent_month_day: options
                .show_adjacent_month_day
                .or(defaults.show_adjacent_month_day)
                .unwrap_or(true),
            can_backwards_selected,
            default_end_date_to_start_date: options
                .default_end_date_to_start_date
                .or(defaults.default_end_date_to_start_date)
                .unwrap_or(true),
            clear_resets_to_default,
            auto_done: options.auto_done.or(defaults.auto_done).unwrap_or(false),
            default_scroll_to,
            initial_date: options.initial_date.or(options.default_date),
            initial_dates: options
                .initial_dates
                .clone()
                .or_else(|| options.default_dates.clone()),
            initial_date_range: options.initial_date_range.or(options.default_date_range),
            initial_slot: options
                .initial_slot
                .clone()
                .or_else(|| options.default_slot.clone()),
            default_date: options.default_date,
            default_dates: options.default_dates.clone(),
            default_date_range: options.default_date_range,
            default_slot: options.default_slot.clone(),
            date_format: options
                .date_format
                .clone()
                .or_else(|| defaults.date_format.clone())
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            month_format: options
                .month_format
                .clone()
                .or_else(|| defaults.month_format.clone())
                .unwrap_or_else(|| DEFAULT_MONTH_FORMAT.to_string()),
            step: options
                .step
                .or(defaults.step)
                .unwrap_or(DEFAULT_STEP)
                .max(DEFAULT_STEP),
            title: options
                .title
                .clone()
                .or_else(|| defaults.title.clone())
                .unwrap_or_else(|| "Calendar".to_string()),
            close_label: options
                .close_label
                .clone()
                .or_else(|| defaults.close_label.clone())
                .unwrap_or_else(|| "Cancel".to_string()),
            close_title: options
                .close_title
                .clone()
                .or_else(|| defaults.close_title.clone())
                .unwrap_or_default(),
            done_label: options
                .done_label
                .clone()
                .or_else(|| defaults.done_label.clone())
                .unwrap_or_else(|| "Done".to_string()),
            done_title: options
                .done_title
                .clone()
                .or_else(|| defaults.done_title.clone())
                .unwrap_or_default(),
            clear_label,
            clear_title: options
                .clear_title
                .clone()
                .or_else(|| defaults.clear_title.clone())
                .unwrap_or_default(),
            weekdays,
            default_title: options
                .default_title
                .clone()
                .or_else(|| defaults.default_title.clone())
                .unwrap_or_default(),
            default_subtitle: options
                .default_subtitle
                .clone()
                .or_else(|| defaults.default_subtitle.clone())
                .unwrap_or_default(),
            css_class: options
                .css_class
                .clone()
                .or_else(|| defaults.css_class.clone())
                .unwrap_or_default(),
            color: options
                .color
                .clone()
                .or_else(|| defaults.color.clone())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        }
    }
}
