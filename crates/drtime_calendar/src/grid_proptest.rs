#[cfg(test)]
mod tests {
    use crate::availability::{generate_availability, SeededRandomSource};
    use crate::date::CalendarDate;
    use crate::grid::{compute_month_grid, CellClass, GRID_CELLS};
    use chrono::Weekday;
    use drtime_config::default_slot_catalog;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_grid_shape_for_any_month(year in 1990i32..2100, month in 1u32..=12, day in 1u32..=28) {
            let view = CalendarDate::from_ymd(year, month, day).unwrap();
            let cells = compute_month_grid(&view, &Default::default(), &view);

            prop_assert_eq!(cells.len(), GRID_CELLS);
            prop_assert_eq!(cells[0].date.weekday(), Weekday::Sun);
            prop_assert!(cells[0].date <= view.first_of_month());
            let in_month = cells.iter().filter(|cell| cell.date.same_month(&view)).count();
            prop_assert_eq!(in_month, view.first_of_month().add_days(40).first_of_month()
                .add_days(-1).day() as usize);
        }

        #[test]
        fn test_available_cells_are_bookable_days(seed in any::<u64>(), offset in 0i64..400) {
            let today = CalendarDate::from_ymd(2026, 1, 1).unwrap().add_days(offset);
            let mut rng = SeededRandomSource::new(seed);
            let availability = generate_availability(30, today, &default_slot_catalog(), 0.7, &mut rng).unwrap();

            for view in [today, today.add_days(31)] {
                for cell in compute_month_grid(&view, &availability, &today) {
                    if cell.classification == CellClass::Available {
                        prop_assert!(cell.date.same_month(&view));
                        prop_assert!(cell.date > today);
                        prop_assert!(!cell.date.is_weekend());
                        prop_assert!(availability.is_available(&cell.date));
                        prop_assert!(cell.interactive);
                    } else {
                        prop_assert!(!cell.interactive);
                    }
                }
            }
        }
    }
}
