//! A fully derived empire: profile + seeded layout, ready to render.

use rand::Rng;
use tracing::debug;

use solciv_common::types::WalletProfile;

use crate::layout::{self, Shape};
use crate::render::{self, RenderOptions};
use crate::rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Empire {
    pub profile: WalletProfile,
    /// Label shown on the map (`GUEST` or `abcd…wxyz`).
    pub name: String,
    pub seed: u32,
    pub density: f64,
    pub shapes: Vec<Shape>,
}

/// Pick the layout seed: an explicit one wins, then the address hash,
/// then a fresh random seed.
pub fn resolve_seed<R: Rng + ?Sized>(
    address: Option<&str>,
    explicit: Option<u32>,
    rng: &mut R,
) -> u32 {
    match (explicit, address.filter(|a| !a.is_empty())) {
        (Some(seed), _) => seed,
        (None, Some(addr)) => rng::seed_for_address(addr),
        (None, None) => rng::random_seed(rng),
    }
}

impl Empire {
    pub fn build(profile: WalletProfile, address: Option<&str>, seed: u32) -> Self {
        let density = layout::density_for_tiles(profile.estate.tiles);
        let shapes = layout::generate(seed, density);
        debug!(seed, density, shapes = shapes.len(), tier = %profile.tier, "empire built");
        Self {
            profile,
            name: render::display_name(address),
            seed,
            density,
            shapes,
        }
    }

    pub fn svg(&self, opts: &RenderOptions) -> String {
        render::render_svg(&self.profile, &self.name, &self.shapes, self.density, &opts.credit)
    }

    pub fn share(&self, opts: &RenderOptions) -> String {
        render::share_text(&self.profile, &opts.share_credit)
    }

    pub fn svg_filename(&self) -> String {
        render::svg_filename(&self.name)
    }
}
