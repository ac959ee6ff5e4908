// src/scrape/colors.rs
use crate::config::RunOptions;
use crate::core::net::{Fetch, PoliteFetcher};
use crate::error::Result;
use crate::progress::{NullProgress, Progress};
use crate::resolve::NameNormalizer;
use crate::specs::colors::{self, TeamColors};
use crate::store::{self, SchoolManifest};

/// Colors for every school, one page each. A page that fails or lists no codes
/// gets the default colors; nothing here aborts the run.
pub fn collect_colors(
    opts: &RunOptions,
    fetch: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<SchoolManifest> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let aliases = super::load_aliases(opts)?;
    let names = super::load_roster(opts)?;
    let normalizer = NameNormalizer::new(&aliases);
    let polite = PoliteFetcher::new(fetch, opts.politeness);

    progress.begin("colors", names.len());
    let mut manifest = SchoolManifest::default();
    for school in &names {
        let url = colors::page_url(school);
        let found = match polite.get_text(&url) {
            Ok(doc) => colors::parse_page(&doc),
            Err(e) => {
                logw!("{school}: {e}; using default colors");
                TeamColors::default()
            }
        };
        logf!("{school}: {}, {}", found.primary, found.secondary);
        progress.resolved(school, &found.primary);
        manifest.insert(school, normalizer.canonical_name(school), found)?;
        progress.step_done(school);
    }
    progress.finish();

    let path = store::save_manifest(&opts.out, &manifest)
        .inspect_err(|e| loge!("{} not written: {e}", opts.out.display()))?;
    logf!("colors written to {}", path.display());
    Ok(manifest)
}
