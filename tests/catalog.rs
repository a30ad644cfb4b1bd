use std::fs;
use std::path::{Path, PathBuf};

use launcher::config::parse_config;
use launcher::sources::desktop::DesktopSource;
use launcher::{build_catalog, filter, ApplicationEntry, CatalogBuilder};
use tempfile::tempdir;

fn write_entry(dir: &Path, file: &str, body: &str) {
    fs::write(dir.join(file), body).unwrap();
}

fn app(name: &str, exec: &str) -> String {
    format!("[Desktop Entry]\nType=Application\nName={}\nExec={}\n", name, exec)
}

fn names(catalog: &[ApplicationEntry]) -> Vec<&str> {
    catalog.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn hidden_entry_is_left_out() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), "a.desktop", "Name=Alpha\nExec=alpha-bin\n");
    write_entry(dir.path(), "b.desktop", "Name=beta\nExec=beta-bin %f\nNoDisplay=true\n");

    let catalog = build_catalog(&[dir.path().to_path_buf()]);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].name, "Alpha");
    assert_eq!(catalog[0].command, "alpha-bin");
    assert_eq!(catalog[0].source.as_deref(), Some(dir.path().join("a.desktop").as_path()));
}

#[test]
fn field_codes_are_stripped() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), "firefox.desktop", &app("Firefox", "firefox %u"));
    write_entry(dir.path(), "vlc.desktop", &app("VLC", "vlc %U --fullscreen"));

    let catalog = build_catalog(&[dir.path().to_path_buf()]);
    let commands: Vec<&str> = catalog.iter().map(|e| e.command.as_str()).collect();
    assert_eq!(commands, vec!["firefox", "vlc"]);
}

#[test]
fn entries_without_name_or_exec_are_left_out() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), "ok.desktop", &app("Ok", "ok"));
    write_entry(dir.path(), "noname.desktop", "Exec=nameless\n");
    write_entry(dir.path(), "noexec.desktop", "Name=Execless\n");
    write_entry(dir.path(), "codes.desktop", &app("Codes", "%U"));

    let catalog = build_catalog(&[dir.path().to_path_buf()]);
    assert_eq!(names(&catalog), vec!["Ok"]);
}

#[test]
fn corrupted_file_does_not_abort_the_scan() {
    let dir = tempdir().unwrap();
    for (i, name) in ["Alpha", "Beta", "Gamma"].iter().enumerate() {
        write_entry(dir.path(), &format!("{}.desktop", i), &app(name, "run"));
    }
    fs::write(dir.path().join("broken.desktop"), [0x4e, 0x61, 0xff, 0xfe, 0x0a]).unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("ghost.desktop")).unwrap();

    let catalog = build_catalog(&[dir.path().to_path_buf()]);
    assert_eq!(names(&catalog), vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn only_desktop_files_are_read() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), "real.desktop", &app("Real", "real"));
    write_entry(dir.path(), "notes.txt", &app("Notes", "notes"));
    write_entry(dir.path(), "other.desktop.bak", &app("Backup", "backup"));
    fs::create_dir(dir.path().join("folder.desktop")).unwrap();

    let catalog = build_catalog(&[dir.path().to_path_buf()]);
    assert_eq!(names(&catalog), vec!["Real"]);
}

#[test]
fn missing_directories_are_skipped() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), "a.desktop", &app("Alpha", "alpha"));

    let dirs = vec![dir.path().join("does-not-exist"), dir.path().to_path_buf(), PathBuf::from("/nonexistent/applications")];
    assert_eq!(names(&build_catalog(&dirs)), vec!["Alpha"]);
}

#[test]
fn catalog_is_sorted_ignoring_case() {
    let dir = tempdir().unwrap();
    for (file, name) in [("1", "zed"), ("2", "Alpha"), ("3", "beta"), ("4", "Calculator"), ("5", "LibreOffice")] {
        write_entry(dir.path(), &format!("{}.desktop", file), &app(name, "x"));
    }

    let catalog = build_catalog(&[dir.path().to_path_buf()]);
    assert_eq!(names(&catalog), vec!["Alpha", "beta", "Calculator", "LibreOffice", "zed"]);
    for pair in catalog.windows(2) {
        assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
    }
}

#[test]
fn equal_names_keep_directory_order() {
    let system = tempdir().unwrap();
    let user = tempdir().unwrap();
    write_entry(system.path(), "files.desktop", &app("Files", "system-files"));
    write_entry(user.path(), "files.desktop", &app("files", "user-files"));
    write_entry(user.path(), "archive.desktop", &app("Archive", "archive"));

    let catalog = build_catalog(&[system.path().to_path_buf(), user.path().to_path_buf()]);
    let commands: Vec<&str> = catalog.iter().map(|e| e.command.as_str()).collect();
    assert_eq!(commands, vec!["archive", "system-files", "user-files"]);
}

#[test]
fn query_scenarios() {
    let dir = tempdir().unwrap();
    for name in ["Alpha", "Calculator", "LibreOffice"] {
        write_entry(dir.path(), &format!("{}.desktop", name), &app(name, "x"));
    }

    let catalog = build_catalog(&[dir.path().to_path_buf()]);
    assert!(filter(&catalog, "lp").is_empty());
    let calc: Vec<&str> = filter(&catalog, "calc").iter().map(|e| e.name.as_str()).collect();
    assert_eq!(calc, vec!["Calculator"]);
    assert_eq!(filter(&catalog, "").len(), 3);
}

#[test]
fn depth_controls_subdirectory_scanning() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), "top.desktop", &app("Top", "top"));
    let nested = dir.path().join("kde4");
    fs::create_dir(&nested).unwrap();
    write_entry(&nested, "nested.desktop", &app("Nested", "nested"));

    let shallow = CatalogBuilder::new().source(DesktopSource::new(dir.path())).build();
    assert_eq!(names(&shallow), vec!["Top"]);

    let deep = CatalogBuilder::new().source(DesktopSource::new(dir.path()).max_depth(2)).build();
    assert_eq!(names(&deep), vec!["Nested", "Top"]);
}

#[test]
fn config_adds_items_and_excludes_patterns() {
    let dir = tempdir().unwrap();
    write_entry(dir.path(), "avahi-discover.desktop", &app("Avahi Zeroconf Browser", "avahi-discover"));
    write_entry(dir.path(), "bssh.desktop", &app("Avahi SSH Server Browser", "bssh"));
    write_entry(dir.path(), "org.gnome.Calculator.desktop", &app("Calculator", "gnome-calculator"));
    write_entry(dir.path(), "lstopo.desktop", &app("Hardware Locality", "lstopo"));

    let config = parse_config(&format!(
        r#"
        [sources]
        dirs = [{:?}]
        exclude = ["^Avahi Zero", "^lstopo\\.desktop$", "("]

        [[items]]
        name = "Htop"
        command = "xterm -e htop"

        [[items]]
        name = ""
        command = "ignored"
        "#,
        dir.path().to_string_lossy()
    ))
    .unwrap();

    let catalog = CatalogBuilder::from_config(&config).build();
    assert_eq!(names(&catalog), vec!["Avahi SSH Server Browser", "Calculator", "Htop"]);
    let htop = &catalog[2];
    assert_eq!(htop.command, "xterm -e htop");
    assert_eq!(htop.source, None);
}
