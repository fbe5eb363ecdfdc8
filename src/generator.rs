use rand::Rng;

use crate::{Pancake, Stack};

/// Length of a generated stack: uniform in `1..=max_length - 1`, and a single
/// pancake when `max_length` leaves no room for more.
fn random_length<R: Rng>(rng: &mut R, max_length: usize) -> usize {
    let upper = max_length.saturating_sub(1).max(1);
    rng.gen_range(1..=upper)
}

fn random_pancake<R: Rng>(rng: &mut R) -> Pancake {
    if rng.gen_bool(0.5) { Pancake::Up } else { Pancake::Down }
}

pub fn generate_stack<R: Rng>(rng: &mut R, max_length: usize) -> Stack {
    let length = random_length(rng, max_length);
    let top = random_pancake(rng);
    let rest: Vec<Pancake> = (1..length).map(|_| random_pancake(rng)).collect();
    Stack::from_top(top, rest)
}

/// Generate `cases` random stacks bounded by `max_length`.
pub fn generate_stacks<R: Rng>(rng: &mut R, cases: usize, max_length: usize) -> Vec<Stack> {
    (0..cases).map(|_| generate_stack(rng, max_length)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_requested_number_of_cases() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_stacks(&mut rng, 42, 10).len(), 42);
    }

    #[test]
    fn lengths_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let stacks = generate_stacks(&mut rng, 500, 10);
        assert!(stacks.iter().all(|s| (1..=9).contains(&s.len())));
        // with 500 draws both ends of the range show up
        assert!(stacks.iter().any(|s| s.len() == 1));
        assert!(stacks.iter().any(|s| s.len() == 9));
    }

    #[test]
    fn tiny_bounds_yield_single_pancakes() {
        let mut rng = StdRng::seed_from_u64(3);
        for max_length in [1, 2] {
            let stacks = generate_stacks(&mut rng, 20, max_length);
            assert!(stacks.iter().all(|s| s.len() == 1));
        }
    }

    #[test]
    fn both_sides_appear() {
        let mut rng = StdRng::seed_from_u64(5);
        let stacks = generate_stacks(&mut rng, 50, 50);
        let all: Vec<Pancake> = stacks.iter().flat_map(|s| s.pancakes().to_vec()).collect();
        assert!(all.contains(&Pancake::Up));
        assert!(all.contains(&Pancake::Down));
    }

    #[test]
    fn same_seed_same_stacks() {
        let a = generate_stacks(&mut StdRng::seed_from_u64(99), 10, 20);
        let b = generate_stacks(&mut StdRng::seed_from_u64(99), 10, 20);
        assert_eq!(a, b);
    }
}
