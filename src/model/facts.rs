//! Fixed space-fact list shown in the header region
//!
//! One fact is selected uniformly at random, exactly once at application
//! start.

use rand::Rng;

/// The fixed fact list.
pub const SPACE_FACTS: &[&str] = &[
    "A day on Venus is longer than a year on Venus — it rotates very slowly.",
    "There are more trees on Earth than stars in the Milky Way galaxy (estimates vary).",
    "Neutron stars can spin up to 716 times per second.",
    "Space is not completely empty — it contains sparse gas, dust, and background radiation.",
    "A spoonful of a neutron star would weigh about a billion tons on Earth.",
    "The largest volcano in the solar system is Olympus Mons on Mars — roughly three times the height of Mount Everest.",
    "The footprints left on the Moon will likely remain for millions of years because there is no wind to erase them.",
    "Saturn could float in water because it is mostly made of gas and has a low average density.",
    "Light from the Sun takes about 8 minutes and 20 seconds to reach Earth.",
    "Harvard astronomers estimate the observable universe contains over 2 trillion galaxies.",
];

/// Pick an index uniformly from `[0, len)`.
fn pick_index(len: usize) -> usize {
    rand::thread_rng().gen_range(0..len)
}

/// Select one fact uniformly at random from the fixed list.
pub fn random_fact() -> &'static str {
    SPACE_FACTS[pick_index(SPACE_FACTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_index_stays_in_range_for_every_list_length() {
        for len in 1..=SPACE_FACTS.len() {
            for _ in 0..200 {
                let idx = pick_index(len);
                assert!(idx < len, "index {} out of range for length {}", idx, len);
            }
        }
    }

    #[test]
    fn random_fact_is_a_member_of_the_fixed_list() {
        for _ in 0..50 {
            let fact = random_fact();
            assert!(SPACE_FACTS.contains(&fact));
        }
    }
}
