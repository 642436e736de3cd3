#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_empty_outside_browser() {
    assert_eq!(BrowserStorage.load().unwrap(), None);
}

#[test]
fn writes_are_noops_outside_browser() {
    BrowserStorage.save("tok").unwrap();
    assert_eq!(BrowserStorage.load().unwrap(), None);
    BrowserStorage.clear().unwrap();
}
