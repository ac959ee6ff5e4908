// src/scrape/positions.rs
use crate::config::{RunOptions, consts::POSITION_LABEL};
use crate::core::net::{Fetch, PoliteFetcher};
use crate::error::Result;
use crate::file::AssetDir;
use crate::progress::Progress;
use crate::resolve::{
    IndexWalker, NameNormalizer, ProfileFieldExtractor, RecordMatcher, Resolution, ResolutionPipeline,
};
use crate::specs::positions::{self, META_CONTAINER};
use crate::store;

/// Position for every player in the bios file. Index pages and profile pages share one
/// polite session, so profile fetches are spaced like everything else.
pub fn collect_positions(
    opts: &RunOptions,
    fetch: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<Resolution> {
    let aliases = super::load_aliases(opts)?;
    let names = super::load_roster(opts)?;
    let normalizer = NameNormalizer::new(&aliases);
    let entities = store::entities(&names, &normalizer, &aliases);

    let polite = PoliteFetcher::new(fetch, opts.politeness);
    let walker = IndexWalker::new(positions::index(), &polite);
    let extractor = ProfileFieldExtractor::new(&polite, META_CONTAINER, POSITION_LABEL);
    let sink = AssetDir::new(&opts.asset_dir);

    let pipeline = ResolutionPipeline::new(&walker, RecordMatcher::new(&normalizer), &extractor, &sink);
    let resolution = pipeline.run(entities, progress);

    let path = store::save_mapping(&opts.out, &resolution)
        .inspect_err(|e| loge!("{} not written: {e}", opts.out.display()))?;
    logf!("positions written to {}", path.display());
    Ok(resolution)
}
