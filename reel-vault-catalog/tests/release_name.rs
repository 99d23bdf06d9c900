use reel_vault_catalog::release_name::{is_release_name, remove_media_extension};

#[test]
fn dotted_release_with_group_qualifies() {
    assert!(is_release_name("Transformers.2007.720p.BluRay.x264-EVOLVE"));
}

#[test]
fn spaced_release_with_group_qualifies() {
    assert!(is_release_name("Spaced Out 2010 720p BluRay-GRP"));
}

#[test]
fn web_dl_release_qualifies() {
    assert!(is_release_name("Movie.Title.2018.1080p.WEB-DL.DD5.1.x264-GRP"));
}

#[test]
fn plain_word_does_not_qualify() {
    assert!(!is_release_name("transformers"));
}

#[test]
fn dashes_without_word_separators_do_not_qualify() {
    assert!(!is_release_name("rdr-transformers-720p"));
}

#[test]
fn words_without_group_separator_do_not_qualify() {
    assert!(!is_release_name("Movie Title 2007"));
    assert!(!is_release_name("movie.title.2007"));
}

#[test]
fn separators_need_alphanumerics_on_both_sides() {
    assert!(!is_release_name("movie.- title"));
    assert!(!is_release_name("a -b c- d"));
}

#[test]
fn empty_and_tiny_names_do_not_qualify() {
    assert!(!is_release_name(""));
    assert!(!is_release_name("a"));
    assert!(!is_release_name("a-b"));
}

#[test]
fn strips_known_extension() {
    assert_eq!(remove_media_extension("movie.mkv"), "movie");
    assert_eq!(remove_media_extension("movie.MKV"), "movie");
    assert_eq!(remove_media_extension("release.par2"), "release");
    assert_eq!(remove_media_extension("queued.nzb"), "queued");
}

#[test]
fn keeps_unknown_extension() {
    assert_eq!(remove_media_extension("Movie.2008.x264"), "Movie.2008.x264");
    assert_eq!(remove_media_extension("notes.txt"), "notes.txt");
}

#[test]
fn strips_only_one_layer() {
    assert_eq!(remove_media_extension("show.mkv.nzb"), "show.mkv");
}

#[test]
fn keeps_bare_dot_names() {
    assert_eq!(remove_media_extension(".mkv"), ".mkv");
    assert_eq!(remove_media_extension("mkv"), "mkv");
}
