// src/scrape/logos.rs
use crate::config::RunOptions;
use crate::core::net::{Fetch, PoliteFetcher};
use crate::error::Result;
use crate::file::AssetDir;
use crate::progress::Progress;
use crate::resolve::{
    FallbackResolver, ImageExtractor, IndexWalker, NameNormalizer, RecordMatcher, Resolution,
    ResolutionPipeline,
};
use crate::{specs, store};

/// Logos for every school: A–Z index walk, then the registered fallback pages.
/// PNGs land in `opts.asset_dir`; the name → file mapping goes to `opts.out`.
pub fn collect_logos(
    opts: &RunOptions,
    fetch: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<Resolution> {
    let aliases = super::load_aliases(opts)?;
    let names = super::load_roster(opts)?;
    let normalizer = NameNormalizer::new(&aliases);
    let entities = store::entities(&names, &normalizer, &aliases);

    let polite = PoliteFetcher::new(fetch, opts.politeness);
    let walker = IndexWalker::new(specs::logos::index(), &polite);
    let extractor = ImageExtractor::new(&polite);
    let sink = AssetDir::new(&opts.asset_dir);
    let fallback = FallbackResolver::new(&aliases, &polite, specs::logos::parse_page);

    let pipeline = ResolutionPipeline::new(&walker, RecordMatcher::new(&normalizer), &extractor, &sink)
        .with_fallback(fallback);
    let resolution = pipeline.run(entities, progress);

    let path = store::save_mapping(&opts.out, &resolution)
        .inspect_err(|e| loge!("{} not written: {e}", opts.out.display()))?;
    logf!("logo mapping written to {}", path.display());
    Ok(resolution)
}
