use lines_core::Language;
use lines_engine::{
    ConfigBuilder, LanguageTable, NameFilters, NamePatterns, TrailingFlush, TraversalOrder, count_lines, run,
    run_with_table,
};
use lines_shared_kernel::LinesError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const C_SOURCE: &str = "#include <stdio.h>\n\n/* entry */\nint main(void) {\n    return 0; // ok\n}\n";
const C_HEADER: &str = "/*\n * api\n */\nint api(void);\n";

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "main.c", C_SOURCE);
    write(root, "include/api.h", C_HEADER);
    write(root, "cmd/tool/main.go", "package main\n\n// main runs\nfunc main() {}\n");
    write(root, "cmd/tool/main_test.go", "package main\n");
    write(root, "testdata/fixture.go", "package fixture\n");
    write(root, "scripts/build.sh", "#!/bin/sh\n# build\nmake\n");
    write(root, "README", "no extension\n");
    write(root, "notes.txt", "unknown extension\n");
    dir
}

fn filtered(root: &Path, patterns: NamePatterns<'_>) -> lines_engine::Config {
    ConfigBuilder::default()
        .root(root)
        .filters(NameFilters::compile(&patterns).unwrap())
        .finish()
        .unwrap()
}

#[test]
fn headers_and_sources_merge_under_c() {
    let dir = project();
    let languages = count_lines(dir.path()).unwrap();

    let c = languages["C"];
    assert_eq!(c.files(), 2);
    assert_eq!(c.total(), 10);
    assert_eq!(c.code(), 4);
    assert_eq!(c.block_comment(), 4);
    assert_eq!(c.mixed(), 1);
    assert_eq!(c.empty(), 1);
    assert!(c.is_balanced());
}

#[test]
fn report_accounts_for_every_dispatched_file() {
    let dir = project();
    let report = run(&lines_engine::Config::for_root(dir.path()).unwrap()).unwrap();

    assert_eq!(report.files_dispatched, 8);
    assert_eq!(report.files_counted, 6);
    assert_eq!(report.files_unrecognized, 2);
    assert_eq!(report.files_failed, 0);
    assert_eq!(report.totals().files(), report.files_counted);
    assert_eq!(report.languages.len(), 3);
}

#[test]
fn exclude_skips_matching_files_and_directories() {
    let dir = project();
    let config = filtered(dir.path(), NamePatterns {
        exclude: Some("test"),
        ..NamePatterns::default()
    });
    let report = run(&config).unwrap();

    // main_test.go and everything under testdata/ are gone.
    assert_eq!(report.languages["Go"].files(), 1);
    assert_eq!(report.files_dispatched, 6);
}

#[test]
fn directory_filters_only_prune_directories() {
    let dir = project();
    let config = filtered(dir.path(), NamePatterns {
        filter_dir: Some("^(cmd|tool)$"),
        exclude_dir: Some("tool"),
        ..NamePatterns::default()
    });
    let report = run(&config).unwrap();

    assert!(!report.languages.contains_key("Go"));
    assert!(!report.languages.contains_key("Shell"));
    assert_eq!(report.languages["C"].files(), 1);
}

#[test]
fn rescanning_gives_identical_results() {
    let dir = project();
    let first = count_lines(dir.path()).unwrap();
    let second = count_lines(dir.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn traversal_order_does_not_change_counts() {
    let dir = project();
    let scan = |order: TraversalOrder| {
        let config = ConfigBuilder::default().root(dir.path()).order(order).finish().unwrap();
        run(&config).unwrap().languages
    };
    assert_eq!(scan(TraversalOrder::DepthFirst), scan(TraversalOrder::BreadthFirst));
}

#[test]
fn single_worker_and_single_slot_queue_still_finish() {
    let dir = project();
    let config = ConfigBuilder::default()
        .root(dir.path())
        .threads(1usize)
        .queue_capacity(1usize)
        .finish()
        .unwrap();
    let report = run(&config).unwrap();
    assert_eq!(report.languages, count_lines(dir.path()).unwrap());
}

#[test]
fn legacy_trailing_line_adds_one_empty_line_per_file() {
    let dir = project();
    let config = ConfigBuilder::default()
        .root(dir.path())
        .trailing(TrailingFlush::Legacy)
        .finish()
        .unwrap();
    let legacy = run(&config).unwrap().languages;
    let fixed = count_lines(dir.path()).unwrap();

    for (name, tally) in &fixed {
        assert_eq!(legacy[name].total(), tally.total() + tally.files(), "{name}");
        assert_eq!(legacy[name].empty(), tally.empty() + tally.files(), "{name}");
    }
}

#[test]
fn missing_root_is_a_traversal_error() {
    let dir = TempDir::new().unwrap();
    let err = count_lines(dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, LinesError::Traversal { .. }));
    assert!(err.is_fatal());
}

#[test]
fn single_file_root_is_counted() {
    let dir = project();
    let languages = count_lines(dir.path().join("main.c")).unwrap();
    assert_eq!(languages.len(), 1);
    assert_eq!(languages["C"].files(), 1);
    assert_eq!(languages["C"].total(), 6);
}

#[test]
fn broken_language_only_skips_its_own_files() {
    const LANGUAGES: &[Language] = &[
        Language {
            name: "Broken",
            extensions: &[".brk"],
            line_comment: Some("(unclosed"),
            block_start: None,
            block_end: None,
        },
        Language {
            name: "Shell",
            extensions: &[".sh"],
            line_comment: Some("#"),
            block_start: None,
            block_end: None,
        },
    ];
    let table = LanguageTable::from_languages(LANGUAGES);

    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.brk", "x\n");
    write(dir.path(), "b.brk", "y\n");
    write(dir.path(), "run.sh", "# hi\necho hi\n");

    let config = lines_engine::Config::for_root(dir.path()).unwrap();
    let report = run_with_table(&config, &table).unwrap();

    assert_eq!(report.files_failed, 2);
    assert_eq!(report.files_counted, 1);
    assert!(!report.languages.contains_key("Broken"));
    assert_eq!(report.languages["Shell"].line_comment(), 1);
}

#[test]
fn empty_tree_yields_no_languages() {
    let dir = TempDir::new().unwrap();
    let report = run(&lines_engine::Config::for_root(dir.path()).unwrap()).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.files_dispatched, 0);
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_aborts_the_scan() {
    use std::os::unix::fs::PermissionsExt;

    let dir = project();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can still list the directory.
    let listable = fs::read_dir(&locked).is_ok();
    let result = count_lines(dir.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if !listable {
        assert!(matches!(result, Err(LinesError::Traversal { ref path, .. }) if path == &locked));
    }
}
