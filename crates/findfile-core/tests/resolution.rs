//! Resolution behavior through the public API.

mod common;
#[path = "../src/test_utils/warnings.rs"]
mod warnings;

use std::fs;
use std::path::PathBuf;

use common::{UNSET_VAR, bare_config, finder_over};
use findfile_core::{FileFinder, FinderConfig};
use warnings::capture_warnings;

#[test]
fn newer_location_without_file_falls_back_to_older() {
    let finder = finder_over(bare_config(), &["/a/config.xml"]);
    finder.push_location("/a");
    finder.push_location("/b");

    assert_eq!(
        finder.find_file("gdal", "config.xml"),
        Some(PathBuf::from("/a/config.xml"))
    );
}

#[test]
fn total_miss_returns_none_and_warns_once() {
    let finder = finder_over(bare_config(), &[]);
    finder.push_location("/a");
    finder.push_location("/b");

    let (found, warnings) = capture_warnings(|| finder.find_file("gdal", "config.xml"));

    assert_eq!(found, None);
    assert_eq!(warnings.count(), 1);
    assert_eq!(
        warnings.messages()[0],
        format!("Cannot find config.xml ({UNSET_VAR} is not defined)")
    );
}

#[test]
fn warning_fires_per_failed_lookup() {
    let finder = finder_over(bare_config(), &[]);

    let ((), warnings) = capture_warnings(|| {
        assert_eq!(finder.find_file("gdal", "a.csv"), None);
        assert_eq!(finder.find_file("gdal", "b.csv"), None);
    });

    assert_eq!(warnings.count(), 2);
}

#[test]
fn pushing_same_location_repeatedly_keeps_one_entry() {
    let finder = finder_over(bare_config(), &[]);
    for _ in 0..4 {
        finder.push_location("/data");
    }
    finder.push_location("/other");
    finder.push_location("/data");

    let locations = finder.locations();
    assert_eq!(locations.iter().filter(|l| *l == "/data").count(), 1);
    assert_eq!(locations, vec![".", "/data", "/other"]);
}

#[test]
fn pop_location_is_lifo_across_interleavings() {
    let finder = finder_over(bare_config(), &[]);
    finder.push_location("/one");
    finder.push_location("/two");
    assert_eq!(finder.pop_location().as_deref(), Some("/two"));

    finder.push_location("/three");
    finder.push_location("/one");
    assert_eq!(finder.pop_location().as_deref(), Some("/three"));
    assert_eq!(finder.pop_location().as_deref(), Some("/one"));
    assert_eq!(finder.pop_location().as_deref(), Some("."));
    assert_eq!(finder.pop_location(), None);
}

#[test]
fn fixed_strategy_wins_regardless_of_locations() {
    let finder = finder_over(bare_config(), &["/a/x.csv", "./x.csv"]);
    finder.push_location("/a");
    finder.push_strategy(|_: &str, _: &str| Some(PathBuf::from("/fixed")));

    for (class, name) in [("gdal", "x.csv"), ("proj", "proj.db"), ("", "")] {
        assert_eq!(finder.find_file(class, name), Some(PathBuf::from("/fixed")));
    }
}

#[test]
fn popping_override_restores_directory_search() {
    let finder = finder_over(bare_config(), &["/a/x.csv", "/b/x.csv"]);
    finder.push_location("/a");
    finder.push_strategy(|_: &str, _: &str| Some(PathBuf::from("/fixed")));
    finder.push_location("/b");

    assert!(finder.pop_strategy().is_some());
    assert_eq!(
        finder.find_file("gdal", "x.csv"),
        Some(PathBuf::from("/b/x.csv"))
    );

    finder.pop_location();
    assert_eq!(
        finder.find_file("gdal", "x.csv"),
        Some(PathBuf::from("/a/x.csv"))
    );
}

#[test]
fn teardown_forgets_earlier_pushes() {
    let config = FinderConfig {
        install_locations: vec!["/usr/local/share/gdal".to_string()],
        ..bare_config()
    };
    let finder = finder_over(config, &["/pushed/x.csv"]);
    finder.push_location("/pushed");
    finder.push_strategy(|_: &str, _: &str| None::<PathBuf>);
    assert_eq!(
        finder.find_file("proj", "x.csv"),
        Some(PathBuf::from("/pushed/x.csv"))
    );

    finder.teardown();

    assert_eq!(finder.find_file("proj", "x.csv"), None);
    assert_eq!(finder.locations(), vec![".", "/usr/local/share/gdal"]);
    assert_eq!(finder.strategy_count(), 1);
}

#[test]
fn default_strategy_on_real_directories() {
    let temp = tempfile::tempdir().unwrap();
    let app = temp.path().join("app");
    let site = temp.path().join("site");
    fs::create_dir_all(&app).unwrap();
    fs::create_dir_all(&site).unwrap();
    fs::write(app.join("stateplane.csv"), b"zone").unwrap();
    fs::write(site.join("stateplane.csv"), b"zone").unwrap();

    let finder = FileFinder::new(bare_config());
    finder.push_location(&app.to_string_lossy());
    assert_eq!(
        finder.find_file("gdal", "stateplane.csv"),
        Some(app.join("stateplane.csv"))
    );

    finder.push_location(&site.to_string_lossy());
    assert_eq!(
        finder.find_file("gdal", "stateplane.csv"),
        Some(site.join("stateplane.csv"))
    );
}

#[test]
fn snapshot_reflects_thread_state() {
    let finder = finder_over(bare_config(), &[]);
    let before = finder.snapshot();
    assert!(!before.initialized);
    assert!(before.locations.is_empty());

    finder.push_location("/x");
    let after = finder.snapshot();
    assert!(after.initialized);
    assert_eq!(after.locations, vec![".", "/x"]);
    assert_eq!(after.strategy_count, 1);
    assert_eq!(after.data_dir_var, UNSET_VAR);
}
