//! Tests for fetch category classification.

mod test_utils;

use courier_core::{FetchCategory, FileAttribute, PixelDimensions};
use courier_fetch::{fetch_category_for_file, fetch_category_for_image};
use test_utils::*;

fn round_video() -> FileAttribute {
    FileAttribute::Video {
        duration: 10,
        dimensions: PixelDimensions::new(384, 384),
        is_round: true,
    }
}

#[test]
fn test_voice_and_instant_video_are_voice() {
    assert_eq!(fetch_category_for_file(&voice_file("v")), FetchCategory::Voice);
    assert_eq!(
        fetch_category_for_file(&file_with("rv", vec![round_video()])),
        FetchCategory::Voice
    );
}

#[test]
fn test_voice_wins_over_animated() {
    let file = file_with(
        "odd",
        vec![
            FileAttribute::Animated,
            FileAttribute::Audio {
                is_voice: true,
                duration: 1,
                title: None,
                performer: None,
            },
        ],
    );
    assert_eq!(fetch_category_for_file(&file), FetchCategory::Voice);

    let file = file_with("odd_video", vec![FileAttribute::Animated, round_video()]);
    assert_eq!(fetch_category_for_file(&file), FetchCategory::Voice);
}

#[test]
fn test_animated_is_animation() {
    let file = file_with("gif", vec![FileAttribute::Animated]);
    assert_eq!(fetch_category_for_file(&file), FetchCategory::Animation);
}

#[test]
fn test_everything_else_is_file() {
    let music = file_with(
        "song",
        vec![FileAttribute::Audio {
            is_voice: false,
            duration: 180,
            title: Some("Song".to_string()),
            performer: None,
        }],
    );
    let video = file_with(
        "clip",
        vec![FileAttribute::Video {
            duration: 10,
            dimensions: PixelDimensions::new(1280, 720),
            is_round: false,
        }],
    );
    let named = file_with("report", vec![FileAttribute::FileName("report.pdf".to_string())]);

    assert_eq!(fetch_category_for_file(&plain_file("doc")), FetchCategory::File);
    assert_eq!(fetch_category_for_file(&music), FetchCategory::File);
    assert_eq!(fetch_category_for_file(&video), FetchCategory::File);
    assert_eq!(fetch_category_for_file(&named), FetchCategory::File);
}

#[test]
fn test_photos_are_always_image() {
    assert_eq!(fetch_category_for_image(&photo(Vec::new())), FetchCategory::Image);
    assert_eq!(
        fetch_category_for_image(&photo(vec![representation(800, 600, "m")])),
        FetchCategory::Image
    );
}
