use crate::add_test;
use crate::common::{build_tar, generate_random_data, Fixture, BINARY_DATA, SAMPLE_TEXT};
use crate::KB;

// Compressing a plain file derives `<name>.xz` and removes the original.
add_test!(compress_removes_input, async {
    let data = SAMPLE_TEXT.as_bytes();
    let mut fixture = Fixture::with_file("readme", data);

    let output = fixture.run_pixz(&[&fixture.path("readme")]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(!fixture.file_exists("readme"));
    assert!(fixture.file_exists("readme.xz"));

    let output = fixture.run_pixz(&["-d", &fixture.path("readme.xz")]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(!fixture.file_exists("readme.xz"));
    assert_eq!(fixture.read_file("readme"), data);
});

// `-k` keeps the input next to the derived output.
add_test!(compress_keep_original, async {
    let mut fixture = Fixture::with_file("notes.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture.run_pixz(&["-k", &fixture.path("notes.txt")]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(fixture.file_exists("notes.txt"));
    assert!(fixture.file_exists("notes.txt.xz"));
});

// A `.tar` input becomes `.tpxz`, and decompresses back to `.tar`.
add_test!(tar_suffix_roundtrip, async {
    let tarball = build_tar(&[("a.txt", SAMPLE_TEXT.as_bytes()), ("b.bin", BINARY_DATA)]);
    let mut fixture = Fixture::with_file("project.tar", &tarball);

    let output = fixture.run_pixz(&[&fixture.path("project.tar")]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(fixture.file_exists("project.tpxz"));
    assert!(!fixture.file_exists("project.tar"));

    let output = fixture.run_pixz(&["-d", &fixture.path("project.tpxz")]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(fixture.read_file("project.tar"), tarball);
});

// `.tar.xz` decompresses to `.tar`.
add_test!(tar_xz_suffix_decompresses_to_tar, async {
    let tarball = build_tar(&[("a.txt", SAMPLE_TEXT.as_bytes())]);
    let mut fixture = Fixture::new();

    let compressed = fixture.run_pixz_with_stdin(&[], &tarball).await;
    assert!(compressed.status.success(), "{}", compressed.stderr);
    fixture.write_file("backup.tar.xz", &compressed.stdout_raw);

    let output = fixture.run_pixz(&["-d", &fixture.path("backup.tar.xz")]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(fixture.read_file("backup.tar"), tarball);
});

// Standard streams are used when no path is given.
add_test!(stdin_to_stdout_roundtrip, async {
    let data = generate_random_data(64 * KB);
    let mut fixture = Fixture::new();

    let compressed = fixture.run_pixz_with_stdin(&["-t"], &data).await;
    assert!(compressed.status.success(), "{}", compressed.stderr);
    assert!(compressed.stdout_raw.starts_with(b"\xFD7zXZ\x00"));

    let restored = fixture
        .run_pixz_with_stdin(&["-d", "-t"], &compressed.stdout_raw)
        .await;
    assert!(restored.status.success(), "{}", restored.stderr);
    assert_eq!(restored.stdout_raw, data);
});

// Two positionals name input and output; the input is kept.
add_test!(explicit_output_keeps_input, async {
    let mut fixture = Fixture::with_file("data", BINARY_DATA);

    let output = fixture
        .run_pixz(&[&fixture.path("data"), &fixture.path("packed.bin")])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(fixture.file_exists("data"));
    assert!(fixture.file_exists("packed.bin"));
    assert!(!fixture.file_exists("data.xz"));
});

// `-o` with one positional input uses the given output and keeps the input.
add_test!(flag_output_with_positional_input, async {
    let mut fixture = Fixture::with_file("data", BINARY_DATA);

    let output = fixture
        .run_pixz(&["-o", &fixture.path("chosen.xz"), &fixture.path("data")])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(fixture.file_exists("data"));
    assert!(fixture.file_exists("chosen.xz"));
    assert!(!fixture.file_exists("data.xz"));
});

// `-i`/`-o` never remove the input.
add_test!(flag_paths_keep_input, async {
    let data = generate_random_data(16 * KB);
    let mut fixture = Fixture::with_file("in.bin", &data);

    let output = fixture
        .run_pixz(&["-t", "-i", &fixture.path("in.bin"), "-o", &fixture.path("out.xz")])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(fixture.file_exists("in.bin"));

    let output = fixture
        .run_pixz(&["-d", "-i", &fixture.path("out.xz"), "-o", &fixture.path("back.bin")])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(fixture.read_file("back.bin"), data);
});

// An existing output file is truncated, not appended to.
add_test!(existing_output_is_truncated, async {
    let data = SAMPLE_TEXT.as_bytes();
    let mut fixture = Fixture::with_file("small", data);
    fixture.write_file("small.xz", &generate_random_data(32 * KB));

    let output = fixture.run_pixz(&[&fixture.path("small")]).await;
    assert!(output.status.success(), "{}", output.stderr);

    let output = fixture.run_pixz(&["-d", &fixture.path("small.xz")]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(fixture.read_file("small"), data);
});

// Tuning flags and levels are accepted and produce valid output.
add_test!(tuning_flags_roundtrip, async {
    let data = generate_random_data(256 * KB);
    let mut fixture = Fixture::new();

    for args in [
        &["-0", "-t"][..],
        &["-9e", "-t"][..],
        &["-t", "-p", "2", "-q", "1", "-f", "0.5"][..],
        &["-t", "-p", "0"][..],
    ] {
        let compressed = fixture.run_pixz_with_stdin(args, &data).await;
        assert!(compressed.status.success(), "{args:?}: {}", compressed.stderr);

        let restored = fixture
            .run_pixz_with_stdin(&["-d"], &compressed.stdout_raw)
            .await;
        assert!(restored.status.success(), "{args:?}: {}", restored.stderr);
        assert_eq!(restored.stdout_raw, data, "{args:?}");
    }
});

// A failed decompression leaves the input in place.
add_test!(corrupt_input_is_kept, async {
    let mut fixture = Fixture::with_file("bad.xz", b"definitely not xz data");

    let output = fixture.run_pixz(&["-d", &fixture.path("bad.xz")]).await;
    assert_eq!(output.code(), Some(1));
    assert!(output.stderr.starts_with("pixz: "), "{}", output.stderr);
    assert!(fixture.file_exists("bad.xz"));
});
