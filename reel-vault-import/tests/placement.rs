use reel_vault_core::PlacementMode;
use reel_vault_import::decision::DownloadSource;
use reel_vault_import::placement::resolve_placement;

fn source() -> DownloadSource {
    DownloadSource::new("Oblivion.2013.720p.BluRay.x264-EVOLVE", "/downloads/done")
}

#[test]
fn new_download_defaults_to_move() {
    let plan = resolve_placement(true, Some(&source()), None);
    assert!(plan.requires_placement);
    assert_eq!(plan.mode, PlacementMode::Move);
}

#[test]
fn no_source_defaults_to_move() {
    let plan = resolve_placement(true, None, None);
    assert_eq!(plan.mode, PlacementMode::Move);
}

#[test]
fn copies_when_the_source_cannot_release_files() {
    let seeding = source().can_relocate(false);
    let plan = resolve_placement(true, Some(&seeding), None);
    assert_eq!(plan.mode, PlacementMode::Copy);
}

#[test]
fn source_override_beats_the_default_policy() {
    let hardlinking = source().with_mode_override(PlacementMode::HardLink);
    let plan = resolve_placement(true, Some(&hardlinking), None);
    assert_eq!(plan.mode, PlacementMode::HardLink);
}

#[test]
fn caller_override_beats_the_source() {
    let seeding = source()
        .can_relocate(false)
        .with_mode_override(PlacementMode::HardLink);
    let plan = resolve_placement(true, Some(&seeding), Some(PlacementMode::Move));
    assert_eq!(plan.mode, PlacementMode::Move);
}

#[test]
fn resident_files_require_no_placement() {
    let plan = resolve_placement(false, None, None);
    assert!(!plan.requires_placement);

    let plan = resolve_placement(false, Some(&source()), Some(PlacementMode::Copy));
    assert!(!plan.requires_placement);
    assert_eq!(plan.mode, PlacementMode::Copy);
}
