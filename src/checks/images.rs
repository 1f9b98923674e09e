// src/checks/images.rs
// =============================================================================
// Image checks.
//
// Rule table:
//   alt attribute missing ................... critical
//   alt="" (decorative) ..................... info
//   generic alt text ("image", "photo") ..... warning
//   alt text that is a file name ............ warning
//   alt text too long ....................... info
//   missing src ............................. warning
//   declared dimension above the limit ...... warning
//   images without width/height ............. info (one issue for all)
//
// Per-image findings use the image src as their location; images without a
// src are located by their position on the page.
// =============================================================================

use super::{char_len, snippet, Analyzer, Category, Issue};
use crate::config::{
    ALT_MAX_LENGTH, GENERIC_ALT_VALUES, IMAGE_FILE_EXTENSIONS, OVERSIZED_IMAGE_DIMENSION,
};
use crate::error::AuditError;
use crate::page::{Image, PageData};

const CATEGORY: Category = Category::Images;

pub struct ImageAnalyzer;

impl Analyzer for ImageAnalyzer {
    fn name(&self) -> &'static str {
        "images"
    }

    fn category(&self) -> Category {
        CATEGORY
    }

    fn analyze(&self, page: &PageData) -> Result<Vec<Issue>, AuditError> {
        let mut issues = Vec::new();
        let mut without_dimensions = 0;

        for (index, image) in page.images.iter().enumerate() {
            let locator = locate(image, index);

            check_alt(image, &locator, &mut issues);

            if image.src.trim().is_empty() {
                issues.push(
                    Issue::warning(CATEGORY, "missing-image-src", "Image has no src attribute")
                        .with_recommendation("Point src at the image file or remove the element")
                        .with_element(locator.clone()),
                );
            }

            let largest = image.width.max(image.height).unwrap_or(0);
            if largest > OVERSIZED_IMAGE_DIMENSION {
                issues.push(
                    Issue::warning(
                        CATEGORY,
                        "oversized-image",
                        format!("Image is declared {}px wide or tall", largest),
                    )
                    .with_recommendation(format!(
                        "Serve images no larger than {}px and use srcset for high-density screens",
                        OVERSIZED_IMAGE_DIMENSION
                    ))
                    .with_element(locator.clone()),
                );
            }

            if image.width.is_none() || image.height.is_none() {
                without_dimensions += 1;
            }
        }

        if without_dimensions > 0 {
            issues.push(
                Issue::info(
                    CATEGORY,
                    "missing-image-dimensions",
                    format!(
                        "{} of {} image(s) have no explicit width and height",
                        without_dimensions,
                        page.images.len()
                    ),
                )
                .with_recommendation("Set width and height attributes to avoid layout shifts while loading"),
            );
        }

        Ok(issues)
    }
}

fn check_alt(image: &Image, locator: &str, issues: &mut Vec<Issue>) {
    if !image.has_alt {
        issues.push(
            Issue::critical(CATEGORY, "missing-alt", "Image is missing the alt attribute")
                .with_recommendation(
                    "Add alt=\"description\" for informative images or alt=\"\" for decorative ones",
                )
                .with_element(locator.to_string()),
        );
        return;
    }

    let alt = image.alt.trim();
    if alt.is_empty() {
        issues.push(
            Issue::info(CATEGORY, "empty-alt", "Image has empty alt text")
                .with_recommendation("Fine for decorative images; describe the image if it carries content")
                .with_element(locator.to_string()),
        );
        return;
    }

    let lowered = alt.to_lowercase();
    if GENERIC_ALT_VALUES.contains(&lowered.as_str()) {
        issues.push(
            Issue::warning(
                CATEGORY,
                "generic-alt",
                format!("Image alt text \"{}\" is too generic", alt),
            )
            .with_recommendation("Describe what the image shows")
            .with_element(locator.to_string()),
        );
    } else if IMAGE_FILE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
        issues.push(
            Issue::warning(
                CATEGORY,
                "filename-alt",
                format!("Image alt text \"{}\" looks like a file name", alt),
            )
            .with_recommendation("Replace the file name with a description of the image")
            .with_element(locator.to_string()),
        );
    }

    if char_len(alt) > ALT_MAX_LENGTH {
        issues.push(
            Issue::info(
                CATEGORY,
                "alt-too-long",
                format!("Image alt text is {} characters long", char_len(alt)),
            )
            .with_recommendation(format!("Keep alt text under {} characters", ALT_MAX_LENGTH))
            .with_element(locator.to_string()),
        );
    }
}

// Human-readable location of an image: its src, or its position if it has none
fn locate(image: &Image, index: usize) -> String {
    if image.src.trim().is_empty() {
        format!("image #{}", index + 1)
    } else {
        snippet(&image.src, 80)
    }
}
