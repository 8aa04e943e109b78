use std::cmp::Ordering;

use crate::error::AppError;
use crate::models::file_entry::FileEntry;
use crate::models::listing::{ListingPage, ListingQuery, SortKey, SortOrder, PAGE_SIZE};
use crate::services::enumerator::DirectoryEnumerator;
use crate::services::taxonomy;

/// Lists one page of `directory`.
///
/// Stages run in a fixed order: search, tag filter, per-group sort with
/// directories first, then pagination. `total` counts what survived the
/// filters, so an out-of-range page is an empty `items` with a correct total.
pub fn list_directory<E>(
    enumerator: &E,
    directory: &str,
    query: &ListingQuery,
) -> Result<ListingPage, AppError>
where
    E: DirectoryEnumerator + ?Sized,
{
    let entries = enumerator.enumerate(directory)?;

    let (mut directories, mut files): (Vec<FileEntry>, Vec<FileEntry>) = entries
        .into_iter()
        .filter(|entry| matches_search(&entry.name, &query.search))
        .filter(|entry| taxonomy::matches_any(&entry.name, &query.filter_tags))
        .partition(|entry| entry.is_directory);

    sort_group(&mut directories, query.sort_key, query.sort_order);
    sort_group(&mut files, query.sort_key, query.sort_order);

    directories.append(&mut files);
    let total = directories.len();
    let items = paginate(directories, query.page, PAGE_SIZE);

    Ok(ListingPage {
        path: directory.to_string(),
        items,
        page: query.page,
        per_page: PAGE_SIZE,
        total,
    })
}

/// `term` is expected lower-cased already.
fn matches_search(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(term)
}

fn compare(a: &FileEntry, b: &FileEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Size => a.size.unwrap_or(0).cmp(&b.size.unwrap_or(0)),
        SortKey::Date => a
            .modified_at
            .unwrap_or(0.0)
            .total_cmp(&b.modified_at.unwrap_or(0.0)),
    }
}

/// Stable sort; ties keep enumeration order in both directions.
fn sort_group(group: &mut [FileEntry], key: SortKey, order: SortOrder) {
    group.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn paginate(entries: Vec<FileEntry>, page: usize, per_page: usize) -> Vec<FileEntry> {
    let start = page.max(1).saturating_sub(1).saturating_mul(per_page);
    entries.into_iter().skip(start).take(per_page).collect()
}
