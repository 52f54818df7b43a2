//! Image-set bookkeeping for product edits.
//!
//! An edit may upload new files and may re-submit filenames the product
//! already references. The functions here compute the resulting image list,
//! the files that are no longer referenced, and the thumbnail, without
//! touching the image store.

use super::errors::ProductError;

/// Outcome of merging a product's stored images with the files of an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReconciliation {
    /// Image list to persist: kept existing images first, then the uploads.
    pub images: Vec<String>,
    /// Stored images that are no longer referenced and must be removed from disk.
    pub to_delete: Vec<String>,
}

/// Merges the stored image list with the filenames named by an edit.
///
/// `retained` are stored filenames the client submits again to keep them,
/// `uploaded` are the files written for this edit. Stored images survive only
/// when the edit names them; retained names the product does not own are
/// ignored. Each filename appears at most once in the result. An edit that
/// names nothing leaves the stored list untouched, since an empty list cannot
/// hold a thumbnail.
pub fn reconcile_images(
    existing: &[String],
    retained: &[String],
    uploaded: &[String],
) -> ImageReconciliation {
    if retained.is_empty() && uploaded.is_empty() {
        return ImageReconciliation {
            images: existing.to_vec(),
            to_delete: Vec::new(),
        };
    }

    let mut images: Vec<String> = Vec::with_capacity(existing.len() + uploaded.len());
    let kept = existing
        .iter()
        .filter(|image| retained.contains(image) || uploaded.contains(image));
    for image in kept.chain(uploaded.iter()) {
        if !images.contains(image) {
            images.push(image.clone());
        }
    }

    let to_delete = existing
        .iter()
        .filter(|image| !images.contains(image))
        .cloned()
        .collect();

    ImageReconciliation { images, to_delete }
}

/// Picks `images[index]`, rejecting negative and out-of-range indices.
pub fn select_thumbnail(images: &[String], index: i64) -> Result<String, ProductError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| images.get(i))
        .cloned()
        .ok_or(ProductError::InvalidThumbnailIndex)
}

/// Resolves the thumbnail after an edit. Without an index the previous
/// thumbnail is kept as long as it is still part of `images`; otherwise the
/// first image takes its place.
pub fn resolve_thumbnail(
    images: &[String],
    index: Option<i64>,
    current: &str,
) -> Result<String, ProductError> {
    match index {
        Some(index) => select_thumbnail(images, index),
        None if images.iter().any(|image| image == current) => Ok(current.to_string()),
        None => images
            .first()
            .cloned()
            .ok_or(ProductError::InvalidThumbnailIndex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn should_replace_all_images_when_only_new_uploads() {
        let existing = names(&["old-1.jpg", "old-2.jpg"]);
        let uploaded = names(&["new-1.jpg"]);

        let result = reconcile_images(&existing, &[], &uploaded);

        assert_eq!(result.images, uploaded);
        assert_eq!(result.to_delete, existing);
    }

    #[test]
    fn should_keep_retained_existing_images_first() {
        let existing = names(&["old-1.jpg", "old-2.jpg", "old-3.jpg"]);
        let retained = names(&["old-3.jpg", "old-2.jpg"]);
        let uploaded = names(&["new-1.jpg"]);

        let result = reconcile_images(&existing, &retained, &uploaded);

        assert_eq!(
            result.images,
            names(&["old-2.jpg", "old-3.jpg", "new-1.jpg"])
        );
        assert_eq!(result.to_delete, names(&["old-1.jpg"]));
    }

    #[test]
    fn should_not_duplicate_existing_name_submitted_as_upload() {
        let existing = names(&["old-1.jpg", "old-2.jpg"]);
        let uploaded = names(&["new-1.jpg", "old-2.jpg"]);

        let result = reconcile_images(&existing, &[], &uploaded);

        assert_eq!(result.images, names(&["old-2.jpg", "new-1.jpg"]));
        assert_eq!(result.to_delete, names(&["old-1.jpg"]));
    }

    #[test]
    fn should_ignore_retained_names_the_product_does_not_own() {
        let existing = names(&["old-1.jpg"]);
        let retained = names(&["old-1.jpg", "foreign.jpg"]);

        let result = reconcile_images(&existing, &retained, &[]);

        assert_eq!(result.images, names(&["old-1.jpg"]));
        assert!(result.to_delete.is_empty());
    }

    #[test]
    fn should_leave_images_untouched_when_nothing_submitted() {
        let existing = names(&["old-1.jpg", "old-2.jpg"]);

        let result = reconcile_images(&existing, &[], &[]);

        assert_eq!(result.images, existing);
        assert!(result.to_delete.is_empty());
    }

    #[test]
    fn should_select_thumbnail_by_index() {
        let images = names(&["a.jpg", "b.jpg"]);

        assert_eq!(select_thumbnail(&images, 1).unwrap(), "b.jpg");
    }

    #[test]
    fn should_reject_out_of_range_thumbnail_index() {
        let images = names(&["a.jpg", "b.jpg"]);

        assert!(matches!(
            select_thumbnail(&images, 2),
            Err(ProductError::InvalidThumbnailIndex)
        ));
        assert!(matches!(
            select_thumbnail(&images, -1),
            Err(ProductError::InvalidThumbnailIndex)
        ));
    }

    #[test]
    fn should_keep_current_thumbnail_without_index() {
        let images = names(&["a.jpg", "b.jpg"]);

        assert_eq!(resolve_thumbnail(&images, None, "b.jpg").unwrap(), "b.jpg");
    }

    #[test]
    fn should_fall_back_to_first_image_when_current_thumbnail_dropped() {
        let images = names(&["new.jpg"]);

        assert_eq!(
            resolve_thumbnail(&images, None, "old.jpg").unwrap(),
            "new.jpg"
        );
    }

    proptest! {
        #[test]
        fn thumbnail_always_belongs_to_reconciled_images(
            existing in proptest::collection::vec("[a-z]{1,6}\\.jpg", 1..6),
            retained in proptest::collection::vec("[a-z]{1,6}\\.jpg", 0..3),
            uploaded in proptest::collection::vec("[a-z]{1,6}\\.png", 0..6),
            index in proptest::option::of(-2i64..8),
        ) {
            let current = existing[0].clone();
            let result = reconcile_images(&existing, &retained, &uploaded);

            if let Ok(thumbnail) = resolve_thumbnail(&result.images, index, &current) {
                prop_assert!(result.images.contains(&thumbnail));
            }
        }

        #[test]
        fn fresh_uploads_replace_and_delete_every_stored_image(
            existing in proptest::collection::vec("old-[a-z]{1,6}", 1..6),
            uploaded in proptest::collection::hash_set("new-[a-z]{1,6}", 1..6),
        ) {
            let uploaded: Vec<String> = uploaded.into_iter().collect();
            let result = reconcile_images(&existing, &[], &uploaded);

            prop_assert_eq!(&result.images, &uploaded);
            prop_assert_eq!(&result.to_delete, &existing);
        }

        #[test]
        fn deleted_images_are_never_kept(
            existing in proptest::collection::vec("[a-c]", 0..6),
            retained in proptest::collection::vec("[a-e]", 0..3),
            uploaded in proptest::collection::vec("[a-e]", 0..6),
        ) {
            let result = reconcile_images(&existing, &retained, &uploaded);

            for image in &result.to_delete {
                prop_assert!(!result.images.contains(image));
                prop_assert!(existing.contains(image));
            }
            for image in &result.images {
                prop_assert!(existing.contains(image) || uploaded.contains(image));
            }
        }
    }
}
