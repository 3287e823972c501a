//! Domain models and operation parameters.
//!
//! Domain models are converted from entities at the repository boundary and into DTOs
//! at the controller boundary. `*Params` types carry validated input from controllers
//! into services.

pub mod comment;
pub mod notice;
pub mod notification;
pub mod profile;
pub mod study;
pub mod study_user;
pub mod user;

/// Computes the number of pages needed to show `total` items `per_page` at a time.
pub fn page_count(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::page_count;

    #[test]
    fn rounds_partial_pages_up() {
        assert_eq!(page_count(31, 9), 4);
        assert_eq!(page_count(31, 5), 7);
        assert_eq!(page_count(31, 100), 1);
        assert_eq!(page_count(0, 12), 0);
        assert_eq!(page_count(12, 12), 1);
    }

    #[test]
    fn exact_for_large_totals() {
        assert_eq!(page_count(u64::MAX, 1), u64::MAX);
        assert_eq!(page_count((1 << 53) + 1, 1), (1 << 53) + 1);
    }
}
