pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-indexed page of at most [`QUESTIONS_PER_PAGE`] items.
/// Pages outside the collection are empty, never an error.
pub fn paginate<T>(page: i64, items: Vec<T>) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = (page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
