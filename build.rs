use std::{env, fs, path::PathBuf};

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

fn main() {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    let package_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap());
    let asset_dir = package_dir.join("./src/assets");

    for dir_entry in fs::read_dir(&asset_dir).unwrap().flatten() {
        let path = dir_entry.path();

        if path.extension().is_some_and(|extension| extension == "css") {
            let filename = path.file_name().unwrap().to_str().unwrap();
            let file_contents = fs::read_to_string(&path).unwrap();
            let stylesheet = StyleSheet::parse(
                file_contents.as_str(),
                ParserOptions {
                    error_recovery: false,
                    filename: filename.to_string(),
                    ..ParserOptions::default()
                },
            )
            .unwrap();
            let minified_stylesheet = stylesheet
                .to_css(PrinterOptions {
                    minify: true,
                    ..Default::default()
                })
                .unwrap();

            fs::write(out_dir.join(filename), minified_stylesheet.code).unwrap();
        }
    }

    println!(
        "cargo:rerun-if-changed={}",
        asset_dir.as_os_str().to_str().unwrap()
    );
}
