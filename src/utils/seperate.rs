/// Splits `it` into rows of at most `by` elements, keeping order.
/// `by == 0` puts everything in a single row.
pub fn seperate<T>(it: impl IntoIterator<Item = T>, by: usize) -> Vec<Vec<T>> {
    let mut it = it.into_iter().peekable();

    if by == 0 {
        return vec![it.collect()];
    }

    let mut r: Vec<Vec<T>> = vec![];

    while it.peek().is_some() {
        r.push(it.by_ref().take(by).collect());
    }

    r
}
