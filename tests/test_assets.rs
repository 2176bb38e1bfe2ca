use std::fs;
use std::path::Path;

use space_garbage::assets::*;

fn write(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

#[test]
fn frames_come_back_in_numeric_order() {
    let dir = tempfile::tempdir().unwrap();
    for n in [10, 2, 1, 3, 4, 5, 6, 7, 8, 9] {
        write(dir.path(), &format!("rocket_frame_{n}.txt"), &format!("frame {n}"));
    }
    let frames = load_frames(dir.path(), "rocket").unwrap();
    let texts: Vec<&str> = frames.iter().map(|f| &**f).collect();
    assert_eq!(texts.len(), 10);
    assert_eq!(texts[0], "frame 1");
    assert_eq!(texts[1], "frame 2");
    assert_eq!(texts[9], "frame 10");
}

#[test]
fn other_animations_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "rocket_frame_1.txt", "^");
    write(dir.path(), "explosion_frame_1.txt", "*");
    write(dir.path(), "notes.md", "hello");
    assert_eq!(load_frames(dir.path(), "rocket").unwrap().len(), 1);
}

#[test]
fn missing_frames_are_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_frames(dir.path(), "rocket").unwrap_err();
    assert!(matches!(err, AssetError::NoFrames { .. }));
}

#[test]
fn gap_in_numbering_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "rocket_frame_1.txt", "a");
    write(dir.path(), "rocket_frame_3.txt", "c");
    let err = load_frames(dir.path(), "rocket").unwrap_err();
    assert!(matches!(err, AssetError::Misnumbered { expected: 2, found: 3, .. }));
}

#[test]
fn empty_frame_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "rocket_frame_1.txt", "  \n");
    let err = load_frames(dir.path(), "rocket").unwrap_err();
    assert!(matches!(err, AssetError::EmptyFrame { .. }));
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_frames(&dir.path().join("nope"), "rocket").unwrap_err();
    assert!(matches!(err, AssetError::Io { .. }));
}

#[test]
fn sprites_are_keyed_by_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "duck.txt", ">(.)__");
    write(dir.path(), "lamp.txt", "|\\./|");
    write(dir.path(), "README", "skip me");
    let sprites = load_sprites(dir.path()).unwrap();
    assert_eq!(sprites.keys().collect::<Vec<_>>(), ["duck", "lamp"]);
    assert_eq!(&*sprites["duck"], ">(.)__");
}

#[test]
fn empty_sprite_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(load_sprites(dir.path()), Err(AssetError::NoSprites { .. })));
}

#[test]
fn shipped_assets_load() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    let assets = Assets::load(&root).unwrap();
    assert_eq!(assets.rocket.len(), 2);
    assert_eq!(assets.explosion.len(), 4);
    assert!(!assets.game_over.is_empty());
    assert!(!assets.garbage.is_empty());
}

#[test]
fn frame_numbers_must_be_plain_digits() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "rocket_frame_+1.txt", "a");
    write(dir.path(), "rocket_frame_.txt", "b");
    let err = load_frames(dir.path(), "rocket").unwrap_err();
    assert!(matches!(err, AssetError::NoFrames { .. }));
}
