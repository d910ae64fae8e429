use rand::Rng;

/// Drain `snapshot` in random order, handing each element to `push`.
///
/// Every step picks uniformly among the elements still left, so one pass
/// produces a uniformly random permutation of the snapshot.
pub fn random_removal<E, R, F>(mut snapshot: Vec<E>, rng: &mut R, mut push: F)
where
    R: Rng + ?Sized,
    F: FnMut(E),
{
    while !snapshot.is_empty() {
        let index = rng.gen_range(0..snapshot.len());
        // order of the leftovers doesn't matter, only which one is picked
        push(snapshot.swap_remove(index));
    }
}

/// Convenience wrapper returning the permuted elements as a new `Vec`
pub fn shuffled<E, R: Rng + ?Sized>(snapshot: Vec<E>, rng: &mut R) -> Vec<E> {
    let mut out = Vec::with_capacity(snapshot.len());
    random_removal(snapshot, rng, |element| out.push(element));
    out
}
