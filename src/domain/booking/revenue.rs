//! Revenue aggregation over bookings.

use serde::Serialize;

use super::{is_booking_in_month, is_completed_booking, parse_booking_amount, Booking};

/// Sum of parsed amounts over completed bookings only.
pub fn calculate_revenue_for_bookings<'a, I>(bookings: I) -> f64
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings
        .into_iter()
        .filter(|booking| is_completed_booking(booking))
        .fold(0.0, |sum, booking| sum + parse_booking_amount(booking.amount.as_ref()))
}

/// Bookings whose resolved date falls in `month` (0-based) of `year`.
pub fn get_bookings_for_month(bookings: &[Booking], month: u32, year: i32) -> Vec<&Booking> {
    bookings
        .iter()
        .filter(|booking| is_booking_in_month(booking, month, year))
        .collect()
}

/// Revenue figures for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub month: u32,
    pub year: i32,
    pub booking_count: usize,
    pub completed_count: usize,
    pub revenue: f64,
}

impl MonthlyRevenue {
    pub fn for_month(bookings: &[Booking], month: u32, year: i32) -> Self {
        let in_month = get_bookings_for_month(bookings, month, year);
        let completed_count = in_month.iter().filter(|b| is_completed_booking(b)).count();

        Self {
            month,
            year,
            booking_count: in_month.len(),
            completed_count,
            revenue: calculate_revenue_for_bookings(in_month.iter().copied()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(status: &str, amount: &str, date: &str) -> Booking {
        Booking::default()
            .with_status(status)
            .with_amount(amount)
            .with_date(date)
    }

    #[test]
    fn only_completed_bookings_count() {
        let bookings = vec![
            Booking::default().with_status("Completed").with_amount("$10"),
            Booking::default().with_status("pending").with_amount("$90"),
        ];
        assert_eq!(calculate_revenue_for_bookings(&bookings), 10.0);
    }

    #[test]
    fn empty_list_has_no_revenue() {
        assert_eq!(calculate_revenue_for_bookings(&Vec::<Booking>::new()), 0.0);
    }

    #[test]
    fn unparsable_amounts_add_nothing() {
        let bookings = vec![
            Booking::default().with_status("completed").with_amount("n/a"),
            Booking::default().with_status("completed").with_amount(25.5),
        ];
        assert_eq!(calculate_revenue_for_bookings(&bookings), 25.5);
    }

    #[test]
    fn filters_by_month() {
        let bookings = vec![
            booking("completed", "$10", "2024-01-05"),
            booking("completed", "$20", "2024-02-05"),
            booking("cancelled", "$40", "2024-01-20"),
            Booking::default().with_status("completed").with_amount("$80"),
        ];

        let january = get_bookings_for_month(&bookings, 0, 2024);
        assert_eq!(january.len(), 2);
    }

    #[test]
    fn monthly_revenue_combines_filters() {
        let bookings = vec![
            booking("completed", "$1,000.50", "2024-03-01"),
            booking("Completed ", "€250", "2024-03-31T23:00:00Z"),
            booking("pending", "$999", "2024-03-15"),
            booking("completed", "$5", "2024-04-01"),
        ];

        let report = MonthlyRevenue::for_month(&bookings, 2, 2024);
        assert_eq!(report.booking_count, 3);
        assert_eq!(report.completed_count, 2);
        assert_eq!(report.revenue, 1250.5);
    }
}
