fn main() {
    // Stamp the build date into the binary for `deskplan --version` output
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=DESKPLAN_BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-changed=build.rs");
}
