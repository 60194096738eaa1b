//! Configuration section definitions.
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `extra`  | `[extra]`    | Theme knobs (author, colors, KaTeX, ...) |
//! | `build`  | `[build]`    | Content, static and output directories   |
//! | `render` | `[render]`   | Truncation policy for composed tags      |

mod build;
mod extra;
mod render;

pub use build::BuildConfig;
pub use extra::ExtraConfig;
pub use render::RenderConfig;
