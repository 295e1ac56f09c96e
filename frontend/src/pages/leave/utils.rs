use crate::pages::leave::repository::{DayMarker, RequestStatus, DAYS_PER_WEEK};
use chrono::{Duration, NaiveDate};

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::Approved => "APPROVED",
        }
    }

    pub fn badge_classes(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "bg-status-warning-bg text-status-warning-text border-status-warning-border",
            RequestStatus::Approved => "bg-status-success-bg text-status-success-text border-status-success-border",
        }
    }
}

impl DayMarker {
    pub fn is_away(&self) -> bool {
        matches!(self, DayMarker::Away)
    }

    pub fn classes(&self) -> &'static str {
        match self {
            DayMarker::Available => "bg-status-success-bg border-status-success-border",
            DayMarker::Away => "bg-status-error-bg border-status-error-border",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DayMarker::Available => "Available",
            DayMarker::Away => "Away",
        }
    }
}

pub fn balance_accent_classes(color: &str) -> &'static str {
    match color {
        "blue" => "bg-blue-50 text-blue-700 border-blue-100",
        "green" => "bg-green-50 text-green-700 border-green-100",
        "purple" => "bg-purple-50 text-purple-700 border-purple-100",
        _ => "bg-surface-muted text-fg border-border",
    }
}

pub fn balance_bar_classes(color: &str) -> &'static str {
    match color {
        "blue" => "bg-blue-500",
        "green" => "bg-green-500",
        "purple" => "bg-purple-500",
        _ => "bg-action-primary-bg",
    }
}

pub fn avatar_classes(color: &str) -> &'static str {
    match color {
        "blue" => "bg-blue-500 text-white",
        "purple" => "bg-purple-500 text-white",
        "pink" => "bg-pink-600 text-white",
        _ => "bg-surface-muted text-fg",
    }
}

/// "Mon 16" .. "Fri 20" for the working week starting at `week_start`.
pub fn week_day_labels(week_start: NaiveDate) -> [String; DAYS_PER_WEEK] {
    std::array::from_fn(|offset| {
        (week_start + Duration::days(offset as i64))
            .format("%a %d")
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_are_upper_case() {
        assert_eq!(RequestStatus::Pending.label(), "PENDING");
        assert_eq!(RequestStatus::Approved.label(), "APPROVED");
        assert_ne!(
            RequestStatus::Pending.badge_classes(),
            RequestStatus::Approved.badge_classes()
        );
    }

    #[test]
    fn unknown_palette_key_uses_neutral_classes() {
        assert!(balance_accent_classes("blue").contains("blue"));
        assert!(balance_bar_classes("green").contains("green"));
        assert!(avatar_classes("pink").contains("pink"));
        assert_eq!(
            balance_accent_classes("teal"),
            "bg-surface-muted text-fg border-border"
        );
        assert_eq!(balance_bar_classes("teal"), "bg-action-primary-bg");
        assert_eq!(avatar_classes("teal"), "bg-surface-muted text-fg");
    }

    #[test]
    fn day_markers_map_to_distinct_styles() {
        assert!(DayMarker::Away.is_away());
        assert!(!DayMarker::Available.is_away());
        assert_ne!(DayMarker::Away.classes(), DayMarker::Available.classes());
    }

    #[test]
    fn week_labels_cover_monday_to_friday() {
        let start = NaiveDate::from_ymd_opt(2023, 10, 16).unwrap();
        assert_eq!(
            week_day_labels(start),
            ["Mon 16", "Tue 17", "Wed 18", "Thu 19", "Fri 20"].map(String::from)
        );
    }
}
