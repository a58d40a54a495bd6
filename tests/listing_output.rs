// tests/listing_output.rs — Integration test: run the rcls binary against
// fixture directories and verify ordering, layout, and exit codes.
//
// Output is captured with stdout redirected, so color is disabled and the
// terminal width falls back to the 80-column default — every expectation
// below is computed against that width.

use std::path::Path;
use std::process::Command;
use std::time::{Duration, SystemTime};

use tempfile::TempDir;





////////////////////////////////////////////////////////////////////////////////
//
//  run_rcls
//
//  Run the built rcls binary with the given arguments and capture output.
//  Returns (stdout, stderr, exit code).
//
////////////////////////////////////////////////////////////////////////////////

fn run_rcls(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_rcls"))
        .args(args)
        .output()
        .expect("Failed to run rcls");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}





////////////////////////////////////////////////////////////////////////////////
//
//  make_files
//
//  Create empty files with the given names inside a directory.
//
////////////////////////////////////////////////////////////////////////////////

fn make_files(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"").unwrap();
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  set_mtime
//
//  Pin a file's modification time to epoch + secs.
//
////////////////////////////////////////////////////////////////////////////////

fn set_mtime(path: &Path, secs: u64) {
    let file = std::fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}





////////////////////////////////////////////////////////////////////////////////
//
//  sorted_case_insensitive
//
//  Verifies {"b.txt","A.txt"} lists A.txt first, one per line with -1.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn sorted_case_insensitive() {
    let dir = TempDir::new().unwrap();
    make_files(dir.path(), &["b.txt", "A.txt"]);

    let (stdout, _, code) = run_rcls(&["-1", dir.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "A.txt\nb.txt\n");
}





////////////////////////////////////////////////////////////////////////////////
//
//  reverse_flag
//
//  Verifies -r reverses the final order.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn reverse_flag() {
    let dir = TempDir::new().unwrap();
    make_files(dir.path(), &["b.txt", "A.txt"]);

    let (stdout, _, code) = run_rcls(&["-1r", dir.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "b.txt\nA.txt\n");
}





////////////////////////////////////////////////////////////////////////////////
//
//  default_mode_is_columnar
//
//  Verifies the default display is down-then-across columns, alphabetical
//  within the grid.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn default_mode_is_columnar() {
    let dir = TempDir::new().unwrap();
    make_files(dir.path(), &["b.txt", "A.txt"]);

    let (stdout, _, code) = run_rcls(&[dir.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    // Two entries fit one row at width 80: A.txt padded to 5 + 2 separators
    assert_eq!(stdout, "A.txt  b.txt\n");
}





////////////////////////////////////////////////////////////////////////////////
//
//  columnar_grid_uses_widening_rule
//
//  Verifies 4 short names rebalance into a 2x2 grid instead of one row.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn columnar_grid_uses_widening_rule() {
    let dir = TempDir::new().unwrap();
    make_files(dir.path(), &["a", "b", "c", "d"]);

    let (stdout, _, code) = run_rcls(&["-C", dir.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    // Column-major 2x2: a/b fill column 0, c/d column 1
    assert_eq!(stdout, "a  c\nb  d\n");
}





////////////////////////////////////////////////////////////////////////////////
//
//  horizontal_mode_fills_across
//
//  Verifies -x places entries left to right before wrapping.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn horizontal_mode_fills_across() {
    let dir = TempDir::new().unwrap();
    make_files(dir.path(), &["a", "b", "c", "d"]);

    let (stdout, _, code) = run_rcls(&["-x", dir.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    // Same 2x2 geometry as -C, row-major fill
    assert_eq!(stdout, "a  b\nc  d\n");
}





////////////////////////////////////////////////////////////////////////////////
//
//  hidden_entries_never_listed
//
//  Verifies dotfiles are absent from every display mode.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn hidden_entries_never_listed() {
    let dir = TempDir::new().unwrap();
    make_files(dir.path(), &["visible.txt", ".hidden", ".config"]);

    let path = dir.path().to_str().unwrap();
    for mode in ["-1", "-C", "-x", "-l"] {
        let (stdout, _, code) = run_rcls(&[mode, path]);
        assert_eq!(code, 0);
        assert!(stdout.contains("visible.txt"), "mode {:?}", mode);
        assert!(!stdout.contains("hidden"), "mode {:?}", mode);
        assert!(!stdout.contains(".config"), "mode {:?}", mode);
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  hidden_only_directory_is_silent_success
//
//  Verifies a directory holding only dotfiles lists nothing, exit 0.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn hidden_only_directory_is_silent_success() {
    let dir = TempDir::new().unwrap();
    make_files(dir.path(), &[".a", ".b"]);

    let path = dir.path().to_str().unwrap();
    for mode in ["-1", "-C", "-x", "-l"] {
        let (stdout, _, code) = run_rcls(&[mode, path]);
        assert_eq!(code, 0, "mode {:?}", mode);
        assert_eq!(stdout, "", "mode {:?}", mode);
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  time_sort_newest_first
//
//  Verifies -t orders by modification time, newest first, and composes
//  with -r.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn time_sort_newest_first() {
    let dir = TempDir::new().unwrap();
    make_files(dir.path(), &["old.txt", "new.txt", "mid.txt"]);
    set_mtime(&dir.path().join("old.txt"), 1_000_000);
    set_mtime(&dir.path().join("mid.txt"), 2_000_000);
    set_mtime(&dir.path().join("new.txt"), 3_000_000);

    let (stdout, _, _) = run_rcls(&["-1t", dir.path().to_str().unwrap()]);
    assert_eq!(stdout, "new.txt\nmid.txt\nold.txt\n");

    let (stdout, _, _) = run_rcls(&["-1tr", dir.path().to_str().unwrap()]);
    assert_eq!(stdout, "old.txt\nmid.txt\nnew.txt\n");
}





////////////////////////////////////////////////////////////////////////////////
//
//  equal_mtimes_fall_back_to_name_order
//
//  Verifies deterministic name order among entries sharing a timestamp.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn equal_mtimes_fall_back_to_name_order() {
    let dir = TempDir::new().unwrap();
    make_files(dir.path(), &["zeta", "alpha", "mu"]);
    for name in ["zeta", "alpha", "mu"] {
        set_mtime(&dir.path().join(name), 5_000_000);
    }

    let (stdout, _, _) = run_rcls(&["-1t", dir.path().to_str().unwrap()]);
    assert_eq!(stdout, "alpha\nmu\nzeta\n");
}





////////////////////////////////////////////////////////////////////////////////
//
//  long_format_record_shape
//
//  Verifies the -l record: permissions, link count, size, and name in the
//  fixed field order.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn long_format_record_shape() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("data.bin");
    std::fs::write(&file_path, b"123456").unwrap();
    std::fs::set_permissions(&file_path, std::fs::Permissions::from_mode(0o644)).unwrap();

    let (stdout, _, code) = run_rcls(&["-l", dir.path().to_str().unwrap()]);
    assert_eq!(code, 0);

    let line = stdout.lines().next().expect("one record");
    assert!(line.starts_with("-rw-r--r-- "), "line: {:?}", line);
    assert!(line.ends_with(" data.bin"), "line: {:?}", line);

    // nlink field: right-aligned width 2 after the mode field
    assert_eq!(&line[10..14], "  1 ");

    // size column right-aligned to 8
    assert!(line.contains("        6 "), "line: {:?}", line);
}





////////////////////////////////////////////////////////////////////////////////
//
//  long_format_directory_entry
//
//  Verifies directories carry the 'd' type indicator.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn long_format_directory_entry() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let (stdout, _, _) = run_rcls(&["-l", dir.path().to_str().unwrap()]);
    assert!(stdout.starts_with('d'), "stdout: {:?}", stdout);
    assert!(stdout.contains("sub"));
}





////////////////////////////////////////////////////////////////////////////////
//
//  missing_directory_is_fatal
//
//  Verifies a directory that cannot be opened exits 1 with a diagnostic.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn missing_directory_is_fatal() {
    let (stdout, stderr, code) = run_rcls(&["/no/such/rcls/dir"]);
    assert_eq!(code, 1);
    assert_eq!(stdout, "");
    assert!(stderr.contains("cannot open directory"), "stderr: {:?}", stderr);
}





////////////////////////////////////////////////////////////////////////////////
//
//  invalid_switch_shows_usage
//
//  Verifies an unknown switch exits 1 and prints the usage screen.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn invalid_switch_shows_usage() {
    let (_, stderr, code) = run_rcls(&["-z"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid option -- 'z'"), "stderr: {:?}", stderr);
    assert!(stderr.contains("Usage: rcls"), "stderr: {:?}", stderr);
}





////////////////////////////////////////////////////////////////////////////////
//
//  piped_output_carries_no_escape_sequences
//
//  Verifies color is disabled when stdout is redirected.
//
////////////////////////////////////////////////////////////////////////////////

#[test]
fn piped_output_carries_no_escape_sequences() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("colored-dir")).unwrap();
    make_files(dir.path(), &["archive.tar"]);

    let (stdout, _, _) = run_rcls(&["-1", dir.path().to_str().unwrap()]);
    assert!(!stdout.contains('\x1b'), "stdout: {:?}", stdout);
    assert_eq!(stdout, "archive.tar\ncolored-dir\n");
}
