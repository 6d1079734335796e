/// Path to a fixture file of `module`, e.g. `test_fixture!("resources", "deployment.json")`
#[macro_export]
macro_rules! test_fixture {
    ($module:expr, $file:expr) => {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join($module)
            .join("fixtures")
            .join($file)
    };
}
