//! Workspace bookings for the current session.
//!
//! The desktop build keeps bookings in memory: the ledger is seeded with
//! a few sample entries around today's date and new bookings are appended
//! from the booking form.

use chrono::{Days, NaiveDate, NaiveTime};

use crate::account::validate_email;

/// Bookable workspaces.
pub const WORKSPACES: &[&str] = &[
    "Meeting Room A",
    "Meeting Room B",
    "Quiet Desk 14",
    "Conference Hall",
    "Phone Booth 3",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_upcoming(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Pending)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Booking {
    pub id: u32,
    pub workspace: String,
    pub title: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub attendees: Vec<String>,
    pub status: BookingStatus,
}

impl Booking {
    /// "Mon 12 Oct · 10:00 - 11:30"
    pub fn when(&self) -> String {
        format!(
            "{} · {} - {}",
            self.date.format("%a %-d %b"),
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }

    /// Whether this booking holds `workspace` at any time in `start..end` on `date`.
    pub fn overlaps(&self, workspace: &str, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> bool {
        self.status != BookingStatus::Cancelled
            && self.workspace == workspace
            && self.date == date
            && self.start < end
            && start < self.end
    }
}

/// Booking form fields, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub workspace: String,
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start: String,
    /// `HH:MM`
    pub end: String,
    /// Comma-separated attendee emails
    pub attendees: String,
}

impl BookingDraft {
    /// Check the draft against `today` and the bookings already held.
    ///
    /// The returned booking has id 0; the ledger assigns the real one.
    pub fn validate(&self, today: NaiveDate, existing: &[Booking]) -> Result<Booking, &'static str> {
        let workspace = self.workspace.trim();
        if !WORKSPACES.contains(&workspace) {
            return Err("Please select a workspace");
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Please enter a booking title");
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Please select a future date")?;
        if date < today {
            return Err("Please select a future date");
        }
        let start = parse_time(&self.start)?;
        let end = parse_time(&self.end)?;
        if end <= start {
            return Err("End time must be after start time");
        }
        if existing
            .iter()
            .any(|b| b.overlaps(workspace, date, start, end))
        {
            return Err("This workspace is not available for the selected time");
        }

        let mut attendees: Vec<String> = Vec::new();
        for raw in self.attendees.split(',').map(str::trim).filter(|a| !a.is_empty()) {
            let email = validate_email(raw).map_err(|_| "Please enter a valid attendee email")?;
            if attendees.iter().any(|a| a.eq_ignore_ascii_case(email)) {
                return Err("This attendee is already added");
            }
            attendees.push(email.to_string());
        }

        Ok(Booking {
            id: 0,
            workspace: workspace.to_string(),
            title: title.to_string(),
            date,
            start,
            end,
            attendees,
            status: BookingStatus::Confirmed,
        })
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, &'static str> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| "Please select a start and end time")
}

/// Bookings held in this session, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
    next_id: u32,
}

impl BookingLedger {
    /// A ledger with two upcoming and two past sample bookings.
    pub fn sample(today: NaiveDate) -> Self {
        let day = |offset: i64| {
            let days = Days::new(offset.unsigned_abs());
            let shifted = if offset < 0 {
                today.checked_sub_days(days)
            } else {
                today.checked_add_days(days)
            };
            shifted.unwrap_or(today)
        };
        let hm = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);
        let sample = [
            ("Meeting Room A", "Sprint planning", day(2), hm(10, 0), hm(11, 30), BookingStatus::Confirmed),
            ("Quiet Desk 14", "Focus day", day(4), hm(9, 0), hm(17, 0), BookingStatus::Pending),
            ("Conference Hall", "All hands", day(-8), hm(14, 0), hm(16, 0), BookingStatus::Completed),
            ("Phone Booth 3", "Client call", day(-15), hm(11, 0), hm(11, 30), BookingStatus::Cancelled),
        ];

        let mut ledger = Self::default();
        for (workspace, title, date, start, end, status) in sample {
            ledger.push(Booking {
                id: 0,
                workspace: workspace.to_string(),
                title: title.to_string(),
                date,
                start,
                end,
                attendees: Vec::new(),
                status,
            });
        }
        ledger
    }

    fn push(&mut self, mut booking: Booking) -> &Booking {
        self.next_id += 1;
        booking.id = self.next_id;
        self.bookings.push(booking);
        &self.bookings[self.bookings.len() - 1]
    }

    /// Validate `draft` and append it.
    pub fn add(&mut self, draft: &BookingDraft, today: NaiveDate) -> Result<&Booking, &'static str> {
        let booking = draft.validate(today, &self.bookings)?;
        tracing::info!(workspace = %booking.workspace, date = %booking.date, "Booking added");
        Ok(self.push(booking))
    }

    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().filter(|b| b.status.is_upcoming())
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 12).unwrap()
    }

    fn draft() -> BookingDraft {
        BookingDraft {
            workspace: "Meeting Room B".into(),
            title: "Design review".into(),
            date: "2026-10-13".into(),
            start: "09:00".into(),
            end: "10:00".into(),
            attendees: String::new(),
        }
    }

    #[test]
    fn upcoming_excludes_past_and_cancelled() {
        let ledger = BookingLedger::sample(today());
        let names: Vec<_> = ledger.upcoming().map(|b| b.workspace.as_str()).collect();
        assert_eq!(names, vec!["Meeting Room A", "Quiet Desk 14"]);
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn add_appends_with_next_id() {
        let mut ledger = BookingLedger::sample(today());
        let mut d = draft();
        d.attendees = "grace@example.com, alan@example.com".into();
        let added = ledger.add(&d, today()).unwrap().clone();

        assert_eq!(added.id, 5);
        assert_eq!(added.attendees, vec!["grace@example.com", "alan@example.com"]);
        assert_eq!(ledger.all().last(), Some(&added));
        assert_eq!(ledger.upcoming().count(), 3);
    }

    #[test]
    fn booking_today_is_allowed() {
        let mut d = draft();
        d.date = "2026-10-12".into();
        assert!(d.validate(today(), &[]).is_ok());
    }

    #[test]
    fn rejects_each_invalid_field() {
        let cases: [(fn(&mut BookingDraft), &str); 7] = [
            (|d| d.workspace = "Rooftop".into(), "Please select a workspace"),
            (|d| d.title = "  ".into(), "Please enter a booking title"),
            (|d| d.date = "2026-10-11".into(), "Please select a future date"),
            (|d| d.date = "tomorrow".into(), "Please select a future date"),
            (|d| d.start = "".into(), "Please select a start and end time"),
            (|d| d.end = "09:00".into(), "End time must be after start time"),
            (|d| d.attendees = "grace".into(), "Please enter a valid attendee email"),
        ];
        for (edit, message) in cases {
            let mut d = draft();
            edit(&mut d);
            assert_eq!(d.validate(today(), &[]), Err(message));
        }
    }

    #[test]
    fn rejects_duplicate_attendee() {
        let mut d = draft();
        d.attendees = "grace@example.com, Grace@example.com".into();
        assert_eq!(d.validate(today(), &[]), Err("This attendee is already added"));
    }

    #[test]
    fn rejects_overlap_in_same_workspace() {
        let mut ledger = BookingLedger::default();
        ledger.add(&draft(), today()).unwrap();

        let mut overlapping = draft();
        overlapping.start = "09:30".into();
        overlapping.end = "10:30".into();
        assert_eq!(
            ledger.add(&overlapping, today()).unwrap_err(),
            "This workspace is not available for the selected time"
        );

        // Back-to-back and other rooms are fine.
        let mut adjacent = draft();
        adjacent.start = "10:00".into();
        adjacent.end = "11:00".into();
        assert!(ledger.add(&adjacent, today()).is_ok());

        let mut elsewhere = overlapping;
        elsewhere.workspace = "Meeting Room A".into();
        assert!(ledger.add(&elsewhere, today()).is_ok());
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn cancelled_booking_frees_the_slot() {
        let ledger = BookingLedger::sample(today());
        let cancelled = &ledger.all()[3];
        assert!(!cancelled.overlaps(&cancelled.workspace, cancelled.date, cancelled.start, cancelled.end));
    }

    #[test]
    fn when_formats_day_and_range() {
        let booking = draft().validate(today(), &[]).unwrap();
        assert_eq!(booking.when(), "Tue 13 Oct · 09:00 - 10:00");
    }
}
