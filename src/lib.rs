//! # Gopher Catalog
//!
//! Build-time utility for the gopher artwork repository. It lists the artwork
//! folders compiled into the binary, optionally writes 128×128 thumbnails for
//! every image, and renders the repository `README.md` from a template.
//!
//! # Architecture: Linear Pipeline
//!
//! ```text
//! 1. Locate      cwd        →  repository root   (nearest dir with .git/)
//! 2. Catalog     stores     →  folders + files   (store enumeration order)
//! 3. Thumbnails  catalog    →  thumbnails/<key>/ (opt-in, PNG, 128×128 box)
//! 4. README      catalog    →  README.md         (Handlebars template)
//! ```
//!
//! Every stage returns a `Result` and the first error ends the run; only the
//! binary turns an error into a log line and a non-zero exit. The root path
//! and the catalog are plain values passed from stage to stage.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`root`] | Walks up from the working directory to the repository root |
//! | [`store`] | [`AssetStore`](store::AssetStore) trait and the embedded implementation |
//! | [`catalog`] | Folders, their stores, and population from store listings |
//! | [`imaging`] | Decode, fit-within-box downscale, PNG encode |
//! | [`thumbnails`] | Writes one thumbnail per catalog file |
//! | [`readme`] | Renders and writes `README.md` |
//! | [`pipeline`] | Runs the stages in order and reports what was written |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## No Upscaling
//!
//! Thumbnails fit inside the box with aspect ratio preserved. Sources already
//! smaller than the box in both dimensions are written at their own size.
//!
//! ## Nearest-Neighbor Sampling
//!
//! The artwork is flat-colored and the thumbnails are small previews, so the
//! cheapest filter is good enough.
//!
//! ## Runtime Template
//!
//! The README is a Handlebars template compiled in with `include_str!`, so it
//! can be edited as Markdown and still ships inside the binary. Its one custom
//! helper, `mod`, lays thumbnails out in rows of four.

pub mod catalog;
pub(crate) mod fsutil;
pub mod imaging;
pub mod output;
pub mod pipeline;
pub mod readme;
pub mod root;
pub mod store;
pub mod thumbnails;

#[cfg(test)]
pub(crate) mod test_helpers;
