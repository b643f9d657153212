/*! Implements the normalization pipeline for files of formula lines: symbols are translated
into word operators, `equivalent` calls are expanded, call-form implications are flattened
and configured stopwords are stripped.

```rust
use normalizer_pipeline::{config::Config, pipeline::Pipeline};

let pipeline = Pipeline::new(Config::default()).unwrap();
assert_eq!(
    "((p implies q) and (q implies p))",
    pipeline.normalize_line("equivalent(p, q)").unwrap(),
);
assert_eq!(
    "p and q implies r",
    pipeline.normalize_line("p & q -> r").unwrap(),
);
```
*/
pub mod config;
pub mod pipeline;
pub mod text;
pub mod trace;

#[macro_use]
extern crate tracing;
