//! Datasets shared by the benchmarks.

const SYLLABLES: [&str; 16] = [
    "ka", "lo", "mi", "ne", "ru", "sa", "te", "vo", "bi", "da", "fu", "go",
    "hi", "ja", "pe", "zo",
];
const SEPARATORS: [&str; 6] = [" ", " ", " ", "\t", "\n", "  \r\n"];

/// Deterministic xorshift sequence.
struct Seed(u64);

impl Seed {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

/// `size` distinct lowercase words made of two syllables or more.
pub fn vocabulary(size: usize) -> Vec<String> {
    (0..size)
        .map(|n| {
            let mut n = n + SYLLABLES.len();
            let mut word = String::new();
            while n > 0 {
                word.insert_str(0, SYLLABLES[n % SYLLABLES.len()]);
                n /= SYLLABLES.len();
            }
            word
        })
        .collect()
}

/// A text of `length` words drawn from `vocabulary`, skewed towards the
/// first ones like a natural text.
///
/// Words are randomly capitalized or upper-cased and separated by spaces,
/// tabs and line breaks. The text is the same on every run.
pub fn text(length: usize, vocabulary: &[String]) -> String {
    let size = vocabulary.len() as u64;
    let mut seed = Seed(0x2545F4914F6CDD1D);
    let mut text = String::new();

    for _ in 0..length {
        let draw = seed.next();
        let word = &vocabulary[((draw % size) * (draw % size) / size) as usize];

        match (draw >> 32) % 8 {
            0 => text.push_str(&word.to_uppercase()),
            1 | 2 => {
                text.push_str(&word[..1].to_uppercase());
                text.push_str(&word[1..]);
            },
            _ => text.push_str(word),
        }
        text.push_str(SEPARATORS[((draw >> 40) % SEPARATORS.len() as u64) as usize]);
    }

    text
}
