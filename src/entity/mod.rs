mod note;
mod section;
mod template;

pub use note::Note;
pub use section::{Section, SectionKind, CUSTOM_DATE_FORMAT, DATE_FORMAT_PRESETS, DEFAULT_DATE_FORMAT};
pub use template::Template;

/// Number of `card-bg-*` style presets the desktop shell ships.
pub const BACKGROUND_CLASS_COUNT: u32 = 12;

/// Smallest non-negative integer not present in `existing`.
///
/// All entity ids (templates globally, sections per template, notes
/// globally) come from here, so deleted ids get reused.
pub fn unique_id(existing: &[i32]) -> i32 {
    let taken: std::collections::HashSet<i32> = existing.iter().copied().collect();
    let mut id = 0;
    while taken.contains(&id) {
        id += 1;
    }
    id
}

/// Pick one of the background style presets at random.
pub(crate) fn random_background_class() -> String {
    use rand::Rng;
    let n = rand::thread_rng().gen_range(1..=BACKGROUND_CLASS_COUNT);
    format!("card-bg-{}", n)
}

/// Sibling-title dedup: `"New Section"` becomes `"New Section (2)"` when
/// two sibling titles already contain the base title.
pub(crate) fn dedup_title(base: &str, sibling_titles: &[&str]) -> String {
    let occurrences = sibling_titles.iter().filter(|t| t.contains(base)).count();
    if occurrences > 0 {
        format!("{} ({})", base, occurrences)
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_id_empty() {
        assert_eq!(unique_id(&[]), 0);
    }

    #[test]
    fn test_unique_id_fills_gap() {
        assert_eq!(unique_id(&[0, 1, 3]), 2);
        assert_eq!(unique_id(&[1, 2, 3]), 0);
    }

    #[test]
    fn test_unique_id_appends_when_dense() {
        assert_eq!(unique_id(&[0, 1, 2]), 3);
    }

    #[test]
    fn test_unique_id_ignores_order_and_duplicates() {
        assert_eq!(unique_id(&[3, 0, 0, 2, 1]), 4);
    }

    #[test]
    fn test_dedup_title_no_collision() {
        assert_eq!(dedup_title("New Section", &["Intro", "Date"]), "New Section");
    }

    #[test]
    fn test_dedup_title_counts_containing_siblings() {
        assert_eq!(
            dedup_title("New Section", &["New Section", "New Section (1)"]),
            "New Section (2)"
        );
    }

    #[test]
    fn test_random_background_class_in_range() {
        for _ in 0..50 {
            let class = random_background_class();
            let n: u32 = class.strip_prefix("card-bg-").unwrap().parse().unwrap();
            assert!((1..=BACKGROUND_CLASS_COUNT).contains(&n));
        }
    }
}
