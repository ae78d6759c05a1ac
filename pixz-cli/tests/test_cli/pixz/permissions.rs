#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;

use crate::add_test;
use crate::common::{Fixture, SAMPLE_TEXT};

fn set_mode(fixture: &Fixture, name: &str, mode: u32) {
    let path = fixture.root_dir_path().join(name);
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

fn mode_of(fixture: &Fixture, name: &str) -> u32 {
    let path = fixture.root_dir_path().join(name);
    fs::metadata(path).unwrap().permissions().mode() & 0o7777
}

// An auto-derived output takes the permission bits of its source.
add_test!(auto_output_copies_0644, async {
    let mut fixture = Fixture::with_file("readme", SAMPLE_TEXT.as_bytes());
    set_mode(&fixture, "readme", 0o644);

    let output = fixture.run_pixz(&["readme"]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(mode_of(&fixture, "readme.xz"), 0o644);
});

// Modes survive a full compress/decompress round trip.
add_test!(modes_survive_roundtrip, async {
    for mode in [0o600, 0o640, 0o755] {
        let mut fixture = Fixture::with_file("script", SAMPLE_TEXT.as_bytes());
        set_mode(&fixture, "script", mode);

        let output = fixture.run_pixz(&["script"]).await;
        assert!(output.status.success(), "{}", output.stderr);
        assert_eq!(mode_of(&fixture, "script.xz"), mode, "{mode:o}");

        let output = fixture.run_pixz(&["-d", "script.xz"]).await;
        assert!(output.status.success(), "{}", output.stderr);
        assert_eq!(mode_of(&fixture, "script"), mode, "{mode:o}");
    }
});

// An explicit output path also copies the source mode.
add_test!(explicit_output_copies_mode, async {
    let mut fixture = Fixture::with_file("data", SAMPLE_TEXT.as_bytes());
    set_mode(&fixture, "data", 0o640);

    let output = fixture.run_pixz(&["data", "packed"]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(mode_of(&fixture, "packed"), 0o640);
});
