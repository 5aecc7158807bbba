/// Data layer: tokenizing, aggregation and the frequency types.
///
/// Architecture:
/// ```text
///   *.txt files (sorted)
///        │
///        ▼
///   ┌───────────┐
///   │ tokenizer  │  bytes → text → trimmed, lowercased keywords
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  fold every file into one FrequencyMap
///   └───────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ FrequencyTable  │  records sorted by count, descending
///   └────────────────┘
/// ```

pub mod aggregate;
pub mod model;
pub mod tokenizer;
