use crate::add_test;
use crate::common::{generate_random_data, Fixture, SAMPLE_TEXT};
use crate::KB;

// pixz output -> system xz -d.
add_test!(pixz_to_system_xz, async {
    let data = generate_random_data(128 * KB);
    let mut fixture = Fixture::with_file("payload.bin", &data);

    let output = fixture.run_pixz(&["-t", "payload.bin"]).await;
    assert!(output.status.success(), "{}", output.stderr);

    let Some(system_out) = fixture.run_system("xz", &["-d", "payload.bin.xz"]).await else {
        return;
    };
    assert!(
        system_out.status.success(),
        "system xz -d failed: {}",
        system_out.stderr
    );
    assert_eq!(fixture.read_file("payload.bin"), data);
});

// System xz output -> pixz -d.
add_test!(system_xz_to_pixz, async {
    let data = SAMPLE_TEXT.as_bytes();
    let mut fixture = Fixture::with_file("text", data);

    let Some(system_out) = fixture.run_system("xz", &["text"]).await else {
        return;
    };
    assert!(system_out.status.success(), "{}", system_out.stderr);
    assert!(!fixture.file_exists("text"));

    let output = fixture.run_pixz(&["-d", "text.xz"]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(fixture.read_file("text"), data);
});

// Concatenated system xz streams decompress as one payload.
add_test!(concatenated_streams, async {
    let mut fixture = Fixture::new();
    fixture.write_file("one", b"first ");
    fixture.write_file("two", b"second");

    let Some(first) = fixture.run_system("xz", &["-k", "one"]).await else {
        return;
    };
    assert!(first.status.success(), "{}", first.stderr);
    let Some(second) = fixture.run_system("xz", &["-k", "two"]).await else {
        return;
    };
    assert!(second.status.success(), "{}", second.stderr);

    let mut joined = fixture.read_file("one.xz");
    joined.extend(fixture.read_file("two.xz"));

    let output = fixture.run_pixz_with_stdin(&["-d"], &joined).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.stdout_raw, b"first second");
});
