use rand::Rng;

/// Fisher-Yates (Knuth) shuffle.
/// Returns a new vector, the input slice is left untouched.
pub fn fisher_yates<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
