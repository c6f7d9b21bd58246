pub fn gmu_version_str() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
