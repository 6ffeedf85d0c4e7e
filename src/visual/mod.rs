//! Visual regression pipeline.
//!
//! For each [`TestCase`] a current screenshot is captured, compared against the
//! stored baseline (created on first encounter), and classified. Baselines only
//! change on first encounter or through [`ArtifactStore::update_baselines`].

mod artifacts;
mod case;
mod diff;
mod pipeline;
mod render;
mod result;

pub use artifacts::{ArtifactStore, Role};
pub use case::{TestCase, default_suite, join_url, suite_from_config, suite_with_origins};
pub use diff::{DiffError, DiffOutcome, ImageDiffer, MagickDiffer, PixelDiffer, differ_for};
pub use pipeline::VisualPipeline;
pub use render::{
    CaptureRequest, PlaywrightRenderer, RenderError, RenderSession, Renderer,
};
pub use result::VisualResult;
