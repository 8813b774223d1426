#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn save_text_without_browser_names_file() {
    let err = save_text("surf-priorities.csv", CSV_MIME, "rank\n").unwrap_err();
    assert_eq!(err, "cannot save surf-priorities.csv: downloads need a browser");
}
