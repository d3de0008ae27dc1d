fn main() {
    println!("cargo:rerun-if-env-changed=BACKEND_URL");

    built::write_built_file().expect("Failed to acquire build-time information");
}
