use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 5;

pub const BALANCE_CAPTION: &str = "Days remaining";

pub const AVAILABILITY_MONTH_LABEL: &str = "October 2023";

pub const AI_INSIGHT_TEXT: &str = "Based on your team's schedule, October 24th is the best day for your team outing. \
No one has leaves planned yet!";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalanceCard {
    pub label: String,
    pub value: String,
    pub used: String,
    pub color: String,
    pub icon: String,
    pub progress_percent: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayMarker {
    Available,
    Away,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberAvailability {
    pub name: String,
    pub initials: String,
    pub avatar_color: String,
    pub day_markers: [DayMarker; DAYS_PER_WEEK],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentRequest {
    pub status: RequestStatus,
    pub submitted: String,
    pub leave_type: String,
    pub date_range: String,
}

fn card(label: &str, value: &str, used: &str, color: &str, icon: &str, progress: u8) -> LeaveBalanceCard {
    LeaveBalanceCard {
        label: label.into(),
        value: value.into(),
        used: used.into(),
        color: color.into(),
        icon: icon.into(),
        progress_percent: progress,
    }
}

pub fn leave_balances() -> Vec<LeaveBalanceCard> {
    vec![
        card("ANNUAL", "12", "Used: 8 of 20 days", "blue", "fa-clock", 60),
        card("SICK", "06", "Used: 2 of 8 days", "green", "fa-briefcase-medical", 75),
        card("CASUAL", "04", "Used: 6 of 10 days", "purple", "fa-star", 40),
    ]
}

// Monday of the week shown in the availability strip.
pub fn availability_week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 16).unwrap_or_default()
}

fn member(name: &str, initials: &str, avatar_color: &str, days: [DayMarker; DAYS_PER_WEEK]) -> TeamMemberAvailability {
    TeamMemberAvailability {
        name: name.into(),
        initials: initials.into(),
        avatar_color: avatar_color.into(),
        day_markers: days,
    }
}

pub fn team_availability() -> Vec<TeamMemberAvailability> {
    use DayMarker::{Available as A, Away as L};
    vec![
        member("Sarah Miller", "SM", "blue", [A, A, L, L, A]),
        member("Ryan K.", "RK", "purple", [A, A, A, A, A]),
        member("Amy Lee", "AL", "pink", [A, A, L, L, L]),
    ]
}

pub fn recent_requests() -> Vec<RecentRequest> {
    vec![
        RecentRequest {
            status: RequestStatus::Pending,
            submitted: "Submitted 2h ago".into(),
            leave_type: "Earned Leave".into(),
            date_range: "Oct 25 - Oct 27 (3 Days)".into(),
        },
        RecentRequest {
            status: RequestStatus::Approved,
            submitted: "2 days ago".into(),
            leave_type: "Casual Leave".into(),
            date_range: "Oct 10 (1 Day)".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn balances_have_fixed_labels_in_order() {
        let labels: Vec<String> = leave_balances().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["ANNUAL", "SICK", "CASUAL"]);
    }

    #[test]
    fn balances_carry_remaining_used_and_progress() {
        let balances = leave_balances();
        let summary: Vec<(&str, &str, u8)> = balances
            .iter()
            .map(|c| (c.value.as_str(), c.used.as_str(), c.progress_percent))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("12", "Used: 8 of 20 days", 60),
                ("06", "Used: 2 of 8 days", 75),
                ("04", "Used: 6 of 10 days", 40),
            ]
        );
    }

    #[test]
    fn team_rows_are_fixed_and_full_week() {
        let team = team_availability();
        let names: Vec<&str> = team.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Sarah Miller", "Ryan K.", "Amy Lee"]);
        let initials: Vec<&str> = team.iter().map(|m| m.initials.as_str()).collect();
        assert_eq!(initials, vec!["SM", "RK", "AL"]);
        assert!(team.iter().all(|m| m.day_markers.len() == DAYS_PER_WEEK));
    }

    #[test]
    fn away_days_match_the_week_plan() {
        let away: Vec<Vec<bool>> = team_availability()
            .iter()
            .map(|m| m.day_markers.iter().map(|d| *d == DayMarker::Away).collect())
            .collect();
        assert_eq!(
            away,
            vec![
                vec![false, false, true, true, false],
                vec![false; DAYS_PER_WEEK],
                vec![false, false, true, true, true],
            ]
        );
    }

    #[test]
    fn week_starts_on_monday_sixteenth() {
        let start = availability_week_start();
        assert_eq!(start.weekday(), Weekday::Mon);
        assert_eq!((start.year(), start.month(), start.day()), (2023, 10, 16));
    }

    #[test]
    fn one_pending_and_one_approved_request() {
        let requests = recent_requests();
        let pending: Vec<&RecentRequest> = requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .collect();
        let approved: Vec<&RecentRequest> = requests
            .iter()
            .filter(|r| r.status == RequestStatus::Approved)
            .collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].leave_type, "Earned Leave");
        assert_eq!(pending[0].date_range, "Oct 25 - Oct 27 (3 Days)");
        assert_eq!(pending[0].submitted, "Submitted 2h ago");
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].leave_type, "Casual Leave");
        assert_eq!(approved[0].date_range, "Oct 10 (1 Day)");
    }

    #[test]
    fn insight_mentions_team_outing_on_october_24th() {
        assert!(AI_INSIGHT_TEXT.starts_with(
            "Based on your team's schedule, October 24th is the best day for your team outing."
        ));
        assert!(AI_INSIGHT_TEXT.ends_with("No one has leaves planned yet!"));
    }
}
