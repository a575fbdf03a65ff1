use std::path::{Path, PathBuf};

use models::{Aggregate, ScryfallCard, ScryfallSet};
use scryfall::{fetch_all, Category, Pacer, PageSource};
use tracing::info;

use crate::{
    transform::{add_cards, add_sets, project_basic, project_card, SeenArt, Transform},
    write_aggregate, ImportError,
};

/// Fetches every page for `category` and folds it into a fresh aggregate.
pub fn import_category<S, P>(
    source: &S,
    pacer: &mut P,
    api_base: &str,
    category: Category,
) -> Result<Aggregate, ImportError>
where
    S: PageSource + ?Sized,
    P: Pacer + ?Sized,
{
    let query = category.query(api_base);
    let mut aggregate = Aggregate::default();
    let mut seen = SeenArt::default();

    let requests = match Transform::from(category) {
        Transform::SetIndex => fetch_all(source, pacer, &query, |sets: Vec<ScryfallSet>| {
            add_sets(&mut aggregate, sets)
        })?,
        Transform::Card => fetch_all(source, pacer, &query, |cards: Vec<ScryfallCard>| {
            add_cards(&mut aggregate, &mut seen, cards, project_card)
        })?,
        Transform::Basic => fetch_all(source, pacer, &query, |cards: Vec<ScryfallCard>| {
            add_cards(&mut aggregate, &mut seen, cards, project_basic)
        })?,
    };

    info!(
        %category,
        requests,
        records = aggregate.data.len(),
        sets = aggregate.sets.len(),
        "Imported category"
    );
    Ok(aggregate)
}

/// Imports `category` and writes it under `out_dir`. Nothing is written if the import fails.
pub fn import_and_write<S, P>(
    source: &S,
    pacer: &mut P,
    api_base: &str,
    category: Category,
    out_dir: &Path,
) -> Result<PathBuf, ImportError>
where
    S: PageSource + ?Sized,
    P: Pacer + ?Sized,
{
    info!(%category, "Importing category");
    let aggregate = import_category(source, pacer, api_base, category)?;
    let path = write_aggregate(out_dir, category, &aggregate)?;
    info!(%category, path = %path.display(), "Wrote category");
    Ok(path)
}
