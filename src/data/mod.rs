/// Data layer: core types, CSV loading, feature lookup, and filtering.
///
/// Architecture:
/// ```text
///  .csv upload
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset (typed columns)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ features  │  resolve well-known column names → FeatureMap
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply state selection → visible row indices
///   └──────────┘
/// ```

pub mod features;
pub mod filter;
pub mod loader;
pub mod model;
