//! Single item download: fetch, validate, store.

use crate::download::state::ItemOutcome;
use crate::download::writer::{write_if_changed, WriteOutcome};
use crate::fetch::{FetchFailure, ImageFetcher};
use crate::manifest::WorkItem;

/// Download one work item and store it on disk.
///
/// Never fails: every problem is folded into [`ItemOutcome::Failed`].
pub async fn download_item(fetcher: &ImageFetcher, item: &WorkItem) -> ItemOutcome {
    let image = match fetcher.fetch(item).await {
        Ok(image) => image,
        Err(failure) => return ItemOutcome::Failed { failure },
    };

    match write_if_changed(&image.output_path, &image.bytes).await {
        Ok(WriteOutcome::Unchanged) => ItemOutcome::Unchanged {
            path: image.output_path,
        },
        Ok(WriteOutcome::Written { bytes }) => ItemOutcome::Written {
            path: image.output_path,
            bytes,
        },
        Err(source) => ItemOutcome::Failed {
            failure: FetchFailure::Write {
                path: image.output_path,
                source,
            },
        },
    }
}
