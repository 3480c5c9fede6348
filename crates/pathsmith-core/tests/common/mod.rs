use pathsmith_core::{Context, DaytonaProbe, InkeepProbe, Probe, Settings, ToolCommand};
use tempfile::TempDir;

pub const API_KEY: &str = "dtn_live_0123456789abcdefghijklmnop";

/// Probes wired to CLIs that cannot exist, so runs never depend on the host PATH
pub fn offline_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(pathsmith_core::ConvexProbe::new()),
        Box::new(InkeepProbe::with_cli(ToolCommand::new(
            "pathsmith-test-missing-inkeep",
            ["--version"],
        ))),
        Box::new(DaytonaProbe::with_cli(ToolCommand::new(
            "pathsmith-test-missing-daytona",
            ["version"],
        ))),
    ]
}

pub fn create_agents_project(temp: &TempDir) {
    let root = temp.path().join("inkeep-agents");
    std::fs::create_dir_all(root.join("src/default")).unwrap();
    std::fs::write(root.join("package.json"), r#"{"name": "inkeep-agents"}"#).unwrap();
    std::fs::write(root.join("src/default/weather.graph.ts"), "export {};\n").unwrap();
    std::fs::write(root.join("src/default/inkeep.config.ts"), "export {};\n").unwrap();
}

pub fn create_test_context(temp: &TempDir, convex_url: Option<String>, api_key: bool) -> Context {
    let settings = Settings::new(
        convex_url,
        api_key.then(|| API_KEY.to_string()),
        Some("https://app.daytona.io/api".to_string()),
    );
    Context::new(temp.path(), settings)
}
