// Host-side tests for animation mode selection from the page query string.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod mode {
    include!("../src/mode.rs");
}

use app_core::AnimationMode;
use mode::mode_from_query;

#[test]
fn empty_query_defaults_to_seek() {
    assert_eq!(mode_from_query(""), AnimationMode::Seek);
    assert_eq!(mode_from_query("?"), AnimationMode::Seek);
}

#[test]
fn spin_is_selected_by_query_parameter() {
    assert_eq!(mode_from_query("?mode=spin"), AnimationMode::Spin);
}

#[test]
fn seek_is_selected_by_query_parameter() {
    assert_eq!(mode_from_query("?mode=seek"), AnimationMode::Seek);
}

#[test]
fn mode_names_are_case_insensitive() {
    assert_eq!(mode_from_query("?mode=SPIN"), AnimationMode::Spin);
    assert_eq!(mode_from_query("?mode=Spin"), AnimationMode::Spin);
}

#[test]
fn mode_is_found_among_other_parameters() {
    assert_eq!(mode_from_query("?foo=1&mode=spin"), AnimationMode::Spin);
    assert_eq!(mode_from_query("?mode=spin&foo=1"), AnimationMode::Spin);
}

#[test]
fn unknown_mode_names_fall_back_to_seek() {
    assert_eq!(mode_from_query("?mode=wobble"), AnimationMode::Seek);
    assert_eq!(mode_from_query("?mode="), AnimationMode::Seek);
}

#[test]
fn query_without_leading_question_mark_still_parses() {
    assert_eq!(mode_from_query("mode=spin"), AnimationMode::Spin);
}
