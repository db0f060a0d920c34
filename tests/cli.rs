use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn zrzut() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("zrzut"));
    cmd.env_remove("ZRZUT_ROOT").env_remove("ZRZUT_OUTPUT");
    cmd
}

#[test]
fn dump_contains_only_selected_files_in_walk_order() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.kt"), "fun main() {}");
    write_file(&temp.path().join("b.txt"), "do not dump");
    write_file(&temp.path().join("sub/c.kts"), "val x = 1");
    let output = temp.path().join("report.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicates::str::contains("report written to"));

    let report = fs::read_to_string(&output).unwrap();
    assert_eq!(report.matches("nazwa pliku:").count(), 2);
    assert!(!report.contains("b.txt"));
    assert!(!report.contains("do not dump"));
    assert!(!report.contains("===="));

    let a_at = report.find("a.kt").unwrap();
    let c_at = report.find("c.kts").unwrap();
    assert!(a_at < c_at);
    assert!(report.contains("treść:\nfun main() {}\n"));
}

#[test]
fn dump_names_files_by_absolute_path() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.kt"), "x");
    let output = temp.path().join("report.txt");

    zrzut().arg(temp.path()).arg("-o").arg(&output).assert().success();

    let report = fs::read_to_string(&output).unwrap();
    let canonical = fs::canonicalize(temp.path()).unwrap();
    let expected = format!("nazwa pliku: {}", canonical.join("a.kt").display());
    assert!(report.contains(&expected));
}

#[test]
fn tree_section_lists_files_the_dump_skipped() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.kt"), "fun main() {}");
    write_file(&temp.path().join("b.txt"), "tree only");
    let output = temp.path().join("report.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .arg("--tree")
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("STRUKTURA FOLDERÓW I PLIKÓW PROJEKTU"));
    assert!(report.contains("\n    b.txt\n"));
    // listed in the tree, but its content is still not dumped
    assert!(!report.contains("tree only"));
}

#[test]
fn git_subtree_is_invisible_everywhere() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("widoczny.kt"), "visible");
    write_file(&temp.path().join(".git/ukryty.kt"), "hidden");
    write_file(&temp.path().join("sub/.git/gleboki.kt"), "deep hidden");
    let output = temp.path().join("report.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .arg("--tree")
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("widoczny.kt"));
    assert!(!report.contains(".git"));
    assert!(!report.contains("ukryty.kt"));
    assert!(!report.contains("gleboki.kt"));
}

#[test]
fn custom_skip_set_replaces_the_default() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("build/generated.kt"), "generated");
    write_file(&temp.path().join("src/main.kt"), "handwritten");
    let output = temp.path().join("report.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .arg("--skip")
        .arg("build")
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    assert!(!report.contains("generated"));
    assert!(report.contains("handwritten"));
}

#[test]
fn excerpt_flag_limits_lines_and_labels_the_block() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("app/src/main/assets/dane.json"),
        "linia 1\nlinia 2\nlinia 3\nlinia 4\nlinia 5\n",
    );
    let output = temp.path().join("report.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .arg("--excerpt")
        .arg("dane.json:2")
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("ZAWARTOŚĆ WYBRANYCH PLIKÓW JSON Z FOLDERU ASSETS"));
    assert!(report.contains("ZAWARTOŚĆ POZOSTAŁYCH PLIKÓW PROJEKTU"));
    assert!(report.contains("--- Zawartość pliku: dane.json (pierwsze 2 linii) ---"));
    assert!(report.contains("linia 2"));
    assert!(!report.contains("linia 3"));
}

#[test]
fn missing_excerpt_is_reported_in_band_and_the_run_continues() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.kt"), "fun main() {}");
    let output = temp.path().join("report.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .arg("--excerpt")
        .arg("brak.json")
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("BŁĄD: Nie znaleziono pliku brak.json"));
    // the content section still follows
    assert!(report.contains("nazwa pliku:"));
    assert!(report.contains("fun main() {}"));
}

#[test]
fn default_manifest_names_the_liturgical_assets() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("app/src/main/assets/piesni.json"),
        "{\"piesni\": []}\n",
    );
    let output = temp.path().join("report.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .arg("--assets")
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("--- Zawartość pliku: piesni.json (pierwsze 100 linii) ---"));
    assert!(report.contains("BŁĄD: Nie znaleziono pliku Wigilia Paschalna.json"));
    assert!(report
        .contains("--- Zawartość pliku: 11 czerwca - św. Barnaby Apostoła.json (cały plik) ---"));
}

#[test]
fn reruns_over_an_unchanged_tree_are_byte_identical() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.kt"), "fun main() {}");
    write_file(&temp.path().join("sub/b.kts"), "val b = 2");
    // the report lives inside the walked tree, as in everyday use
    let output = temp.path().join("wynikowy.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .arg("--tree")
        .assert()
        .success();
    let first = fs::read(&output).unwrap();

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .arg("--tree")
        .assert()
        .success();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn unwritable_output_diagnoses_but_exits_normally() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.kt"), "x");
    let output = temp.path().join("no-such-dir/report.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicates::str::contains("Error:"))
        .stderr(predicates::str::contains("Failed to create report file"));

    assert!(!output.exists());
}

#[test]
fn default_output_lands_in_the_working_directory() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.kt"), "x");

    zrzut().current_dir(temp.path()).assert().success();

    assert!(temp.path().join("wynikowy.txt").exists());
}

#[test]
fn output_path_can_come_from_the_environment() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.kt"), "x");
    let output = temp.path().join("z-env.txt");

    zrzut()
        .arg(temp.path())
        .env("ZRZUT_OUTPUT", &output)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn ext_override_replaces_the_default_suffixes() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("main.rs"), "fn main() {}");
    write_file(&temp.path().join("stary.kt"), "fun main() {}");
    let output = temp.path().join("report.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .arg("--ext")
        .arg("rs")
        .assert()
        .success();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("main.rs"));
    assert!(!report.contains("stary.kt"));
}

#[test]
fn quiet_mode_silences_the_completion_message() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.kt"), "x");
    let output = temp.path().join("report.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}

#[test]
fn stats_flag_reports_dump_counts_on_stderr() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.kt"), "x");
    write_file(&temp.path().join("b.kts"), "y");
    let output = temp.path().join("report.txt");

    zrzut()
        .arg(temp.path())
        .arg("-o")
        .arg(&output)
        .arg("--stats")
        .assert()
        .success()
        .stderr(predicates::str::contains("Files dumped: 2"));
}

#[test]
fn zero_line_excerpt_limit_is_a_usage_error() {
    let temp = tempdir().unwrap();

    zrzut()
        .arg(temp.path())
        .arg("--excerpt")
        .arg("dane.json:0")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Line limit must be at least 1"));
}
