// build.rs
use std::{env, fs, path::Path};

const FIXTURE_PATTERN: &str = "tests/fixtures/*.html";

/// One `#[test]` per captured page, included by tests/fixture_regression.rs.
fn generate_fixture_tests() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let destination = Path::new(&out_dir).join("generated_fixture_tests.rs");

    let mut test_code = String::new();
    let pages = glob::glob(FIXTURE_PATTERN).expect("Failed to read glob pattern");

    for entry in pages.filter_map(Result::ok) {
        let path = entry.to_str().unwrap();
        let stem = entry.file_stem().unwrap().to_str().unwrap();
        let name = stem
            .replace("-", "_")
            .replace(".", "_")
            .replace(" ", "_")
            .to_ascii_lowercase();

        test_code.push_str(&format!(
            "#[test] fn fixture_{}() {{ run_test(r#\"{}\"#); }}\n",
            name, path
        ));
    }

    fs::write(destination, test_code).unwrap();
}

fn main() {
    generate_fixture_tests();
    println!("cargo:rerun-if-changed=tests/fixtures");
    println!("cargo:rerun-if-changed=build.rs");
}
