use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

const TOPICS: &[(&str, &[&str])] = &[
    (
        "systems",
        &["Rust", "memory safety", "ownership", "borrow checker", "lifetimes", "unsafe"],
    ),
    (
        "web",
        &["HTTP", "REST", "JSON", "latency", "caching", "load balancer"],
    ),
    (
        "data",
        &["CSV", "Parquet", "schema", "pipeline", "aggregation", "caching"],
    ),
    (
        "ml",
        &["embedding", "tokenizer", "pipeline", "JSON", "latency", "GPU"],
    ),
];

/// Seeded picker over small ranges (splitmix64), so every run writes the
/// same files.
struct Picker(u64);

impl Picker {
    fn below(&mut self, n: usize) -> usize {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        ((z ^ (z >> 31)) % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

/// Vary case and padding the way hand-edited keyword lists do.
fn scruff(word: &str, rng: &mut Picker) -> String {
    let cased = match rng.below(4) {
        0 => word.to_uppercase(),
        1 => word.to_lowercase(),
        _ => word.to_string(),
    };
    let pad = " ".repeat(rng.below(3));
    format!("{pad}{cased}{pad}")
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_keywords"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = Picker(42);
    let mut total = 0;

    for (topic, words) in TOPICS {
        let n = 20 + rng.below(20);
        let keywords: Vec<String> = (0..n)
            .map(|_| {
                let word = rng.pick(words);
                scruff(word, &mut rng)
            })
            .collect();
        // Trailing and doubled separators show up in real lists too.
        let text = format!("{},,\n", keywords.join(","));

        let path = out_dir.join(format!("{topic}.txt"));
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        total += n;
    }

    // One file in latin-1 to exercise the non-UTF-8 fallback.
    let path = out_dir.join("legacy.txt");
    fs::write(&path, b"Caf\xE9, na\xEFve, caching, Rust\n")
        .with_context(|| format!("writing {}", path.display()))?;
    total += 4;

    println!(
        "Wrote {} keyword files ({total} keywords) to {}",
        TOPICS.len() + 1,
        out_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_is_seeded_and_in_range() {
        let mut a = Picker(42);
        let mut b = Picker(42);
        let xs: Vec<usize> = (0..100).map(|_| a.below(7)).collect();
        let ys: Vec<usize> = (0..100).map(|_| b.below(7)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 7));
        assert!(xs.iter().any(|&x| x != xs[0]));
    }

    #[test]
    fn scruffed_words_normalize_back() {
        let mut rng = Picker(7);
        for _ in 0..20 {
            let word = rng.pick(&["Memory Safety", "GPU"]);
            let messy = scruff(word, &mut rng);
            assert_eq!(messy.trim().to_lowercase(), word.to_lowercase());
        }
    }
}
