use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

thread_local! {
    // Root collation at default (tertiary) strength, matching a browser's `localeCompare`.
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Compares display names with the root-locale collator. Names the collator considers
/// equal compare `Equal`, so a stable sort keeps their input order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
