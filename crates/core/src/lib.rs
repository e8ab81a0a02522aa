//! SolCiv engine: balance → tier/estate/stats → seeded layout → SVG + share text.

// ── Derivation ──
pub mod ladder;
pub mod stats;

// ── Layout & rendering ──
pub mod empire;
pub mod layout;
pub mod render;
pub mod rng;

// ── Session & workspace ──
pub mod guest;
pub mod session;
pub mod workspace;

pub use empire::Empire;
pub use render::RenderOptions;
pub use session::Session;
pub use stats::derive_profile;
pub use workspace::init_workspace;
