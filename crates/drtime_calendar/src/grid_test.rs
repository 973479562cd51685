#[cfg(test)]
mod tests {
    use crate::availability::AvailabilitySet;
    use crate::date::CalendarDate;
    use crate::grid::{classify, compute_month_grid, grid_start, CellClass, GRID_CELLS};
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn slots(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn test_grid_has_42_cells_starting_on_sunday() {
        let availability = AvailabilitySet::new();
        let cells = compute_month_grid(&date(2026, 10, 1), &availability, &date(2026, 10, 14));

        assert_eq!(cells.len(), GRID_CELLS);
        assert_eq!(cells[0].date.weekday(), Weekday::Sun);
        // October 2026 starts on a Thursday
        assert_eq!(cells[0].date, date(2026, 9, 27));
        assert_eq!(cells[4].date, date(2026, 10, 1));
        assert_eq!(cells[41].date, date(2026, 11, 7));
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_cells() {
        // November 2026 starts on a Sunday
        assert_eq!(grid_start(&date(2026, 11, 18)), date(2026, 11, 1));
    }

    #[test]
    fn test_cells_are_consecutive_days() {
        let cells = compute_month_grid(
            &date(2027, 2, 1),
            &AvailabilitySet::new(),
            &date(2026, 10, 14),
        );
        for pair in cells.windows(2) {
            assert_eq!(pair[0].date.add_days(1), pair[1].date);
        }
    }

    #[test]
    fn test_classification_rules() {
        let today = date(2026, 10, 14);
        let availability: AvailabilitySet = vec![
            (date(2026, 10, 12), slots(&["9:00 AM"])),
            (date(2026, 10, 15), slots(&["9:00 AM", "10:00 AM"])),
            (date(2026, 10, 16), Vec::new()),
            (date(2026, 11, 2), slots(&["2:00 PM"])),
        ]
        .into_iter()
        .collect();
        let view = date(2026, 10, 1);

        assert_eq!(
            classify(&date(2026, 10, 15), &view, &availability, &today),
            CellClass::Available
        );
        // past with slots, and future without slots, share one class
        assert_eq!(
            classify(&date(2026, 10, 12), &view, &availability, &today),
            CellClass::Unavailable
        );
        assert_eq!(
            classify(&date(2026, 10, 16), &view, &availability, &today),
            CellClass::Unavailable
        );
        assert_eq!(
            classify(&date(2026, 10, 20), &view, &availability, &today),
            CellClass::Unavailable
        );
        // the next month's day has slots but is not in the displayed month
        assert_eq!(
            classify(&date(2026, 11, 2), &view, &availability, &today),
            CellClass::OtherMonth
        );
        assert_eq!(
            classify(&date(2026, 9, 28), &view, &availability, &today),
            CellClass::OtherMonth
        );
    }

    #[test]
    fn test_today_without_slots_is_unavailable() {
        let today = date(2026, 10, 14);
        let cells = compute_month_grid(&today, &AvailabilitySet::new(), &today);
        let cell = cells.iter().find(|cell| cell.date == today).unwrap();
        assert_eq!(cell.classification, CellClass::Unavailable);
        assert!(!cell.interactive);
    }

    #[test]
    fn test_only_available_cells_are_interactive() {
        let today = date(2026, 10, 14);
        let availability: AvailabilitySet = vec![(date(2026, 10, 20), slots(&["11:00 AM"]))]
            .into_iter()
            .collect();
        let cells = compute_month_grid(&date(2026, 10, 1), &availability, &today);

        let interactive: Vec<_> = cells.iter().filter(|cell| cell.interactive).collect();
        assert_eq!(interactive.len(), 1);
        assert_eq!(interactive[0].date, date(2026, 10, 20));
        assert_eq!(interactive[0].day_label, "20");
        assert!(cells.iter().all(|cell| !cell.selected));
    }

    #[test]
    fn test_past_month_is_entirely_unavailable() {
        let today = date(2026, 10, 14);
        let availability: AvailabilitySet = vec![(date(2026, 9, 15), slots(&["9:00 AM"]))]
            .into_iter()
            .collect();
        let cells = compute_month_grid(&date(2026, 9, 1), &availability, &today);
        assert!(cells
            .iter()
            .all(|cell| cell.classification != CellClass::Available));
    }
}
