//! Statistical checks on positional and per-character uniformity.

use std::collections::HashMap;

use strongpass::pass::{self, Alphabet, CharClass, Options, charset};

const ROUNDS: usize = 100_000;
const LENGTH: usize = 20;

fn class_index(class: CharClass) -> usize {
    match class {
        CharClass::Digits => 0,
        CharClass::Letters => 1,
        CharClass::Symbols => 2,
    }
}

#[test]
fn no_positional_bias() {
    let options = Options {
        length: LENGTH,
        ..Options::default()
    };
    let pools = charset::build(&options, &Alphabet::default()).unwrap();

    let mut class_of: HashMap<char, usize> = HashMap::new();
    for pool in pools.pools() {
        for &c in pool.chars() {
            class_of.insert(c, class_index(pool.class()));
        }
    }

    let mut per_position = vec![[0usize; 3]; LENGTH];
    let mut per_char: HashMap<char, usize> = HashMap::new();
    for pw in pass::batch(&options, ROUNDS).unwrap() {
        for (pos, c) in pw.as_str().chars().enumerate() {
            per_position[pos][class_of[&c]] += 1;
            *per_char.entry(c).or_default() += 1;
        }
    }

    // Each slot holds a uniformly shuffled element of: one mandatory character
    // per class plus LENGTH - 3 draws from the combined pool.
    let combined = pools.combined().len() as f64;
    let fill = (LENGTH - pools.len()) as f64;
    let mut expected = [0f64; 3];
    for pool in pools.pools() {
        let share = pool.len() as f64 / combined;
        expected[class_index(pool.class())] = (1.0 + fill * share) / LENGTH as f64;
    }

    for (pos, counts) in per_position.iter().enumerate() {
        for class in 0..3 {
            let observed = counts[class] as f64 / ROUNDS as f64;
            assert!(
                (observed - expected[class]).abs() < 0.01,
                "position {pos} class {class}: observed {observed:.4}, expected {:.4}",
                expected[class]
            );
        }
    }

    // Within a pool every character lands close to the pool mean. This catches
    // a wrong pool index or a dropped character, not subtle sampling bias.
    for pool in pools.pools() {
        let counts: Vec<usize> = pool.chars().iter().map(|c| per_char[c]).collect();
        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        for (c, count) in pool.chars().iter().zip(&counts) {
            let drift = (*count as f64 - mean).abs() / mean;
            assert!(drift < 0.05, "{c:?} drew {count}, pool mean {mean:.0}");
        }
    }
}
