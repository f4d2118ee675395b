/// Integration tests for the application layer
mod test_utilities;

use ai_bom_visualizer::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use test_utilities::mocks::*;

const MINIMAL: &str =
    r#"{"bomFormat":"CycloneDX","specVersion":"1.6","version":1,"components":[],"dependencies":[]}"#;

fn sample_bom_text() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample-bom.json");
    std::fs::read_to_string(path).unwrap()
}

/// Extracts the text of `<script type="application/json" id="...">`
fn embedded_json(html: &str, id: &str) -> serde_json::Value {
    let marker = format!("id=\"{}\">", id);
    let start = html.find(&marker).unwrap() + marker.len();
    let end = start + html[start..].find("</script>").unwrap();
    serde_json::from_str(&html[start..end]).unwrap()
}

#[tokio::test]
async fn test_visualize_sample_bom_happy_path() {
    let presenter = MockPresenter::new();
    let progress_reporter = MockProgressReporter::new();

    let use_case = VisualizeBomUseCase::new(
        MockInputSource::from_fixture("sample-bom.json"),
        HtmlViewerRenderer::new(),
        presenter.clone(),
        MockBrowserLauncher::new(),
        progress_reporter.clone(),
    );

    let request = VisualizeRequest::builder()
        .title("SampleApp AI-BOM")
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.output_path, PathBuf::from(MockPresenter::PATH));
    assert_eq!(response.node_count, 16);
    assert_eq!(response.edge_count, 15);
    assert_eq!(response.unresolved_edge_count, 0);
    assert!(response.duplicate_ids.is_empty());
    assert!(!response.opened_in_browser);

    let html = presenter.content();
    assert!(html.contains("<title>SampleApp AI-BOM</title>"));
    assert!(html.contains("SampleApp"));
    assert!(!html.contains("Unresolved references"));

    // The extracted document is embedded unchanged
    assert_eq!(
        embedded_json(&html, "bom-data"),
        serde_json::from_str::<serde_json::Value>(&sample_bom_text()).unwrap()
    );

    let messages = progress_reporter.get_messages();
    assert!(messages.iter().any(|m| m.starts_with("Waiting: ")));
    assert!(messages
        .iter()
        .any(|m| m.contains("Projected 16 node(s) and 15 edge(s)")));
    assert!(progress_reporter.warnings().is_empty());
}

#[tokio::test]
async fn test_visualize_sample_bom_graph_data() {
    let presenter = MockPresenter::new();
    let use_case = VisualizeBomUseCase::new(
        MockInputSource::from_fixture("sample-bom.json"),
        HtmlViewerRenderer::new(),
        presenter.clone(),
        MockBrowserLauncher::new(),
        MockProgressReporter::new(),
    );
    use_case.execute(VisualizeRequest::default()).await.unwrap();

    let graph = embedded_json(&presenter.content(), "graph-data");
    let nodes = graph["nodes"].as_array().unwrap();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for node in nodes {
        *counts
            .entry(node["type"].as_str().unwrap().to_string())
            .or_default() += 1;
    }
    assert_eq!(counts["model"], 5);
    assert_eq!(counts["agent"], 2);
    assert_eq!(counts["library"], 2);
    assert_eq!(counts["mcp-server"], 2);
    assert_eq!(counts["mcp-client"], 1);
    assert_eq!(counts["mcp-resource"], 1);
    assert_eq!(counts["tool"], 1);
    assert_eq!(counts["service"], 1);
    assert_eq!(counts["application"], 1);
    assert!(!counts.contains_key("data"));

    let blip = nodes
        .iter()
        .find(|node| node["id"] == "model:Salesforce/blip-vqa-base")
        .unwrap();
    assert_eq!(blip["label"], "blip-vqa-base");
    assert_eq!(blip["fullName"], "Salesforce/blip-vqa-base");
    assert_eq!(blip["details"]["publisher"], "Hugging Face Inc");
    assert_eq!(blip["details"]["model"]["task"], "visual-question-answering");

    // Services keep their full name as label and are always services
    let deepseek = nodes
        .iter()
        .find(|node| node["id"] == "service:deepseek")
        .unwrap();
    assert_eq!(deepseek["label"], "deepseek");
    assert_eq!(deepseek["kind"], "service");
    assert_eq!(
        deepseek["details"]["endpoints"][0],
        "https://api.deepseek.com/chat/completions"
    );

    assert_eq!(graph["document"]["scanner"], "Snyk");
    assert_eq!(graph["legend"][0]["type"], "model");
    assert_eq!(graph["legend"][0]["count"], 5);
}

#[tokio::test]
async fn test_visualize_noisy_stdin_from_slow_producer() {
    let presenter = MockPresenter::new();
    let use_case = VisualizeBomUseCase::new(
        MockInputSource::slow(
            &["\\ Creating file bundle\n", "- Analyzing\n", MINIMAL],
            Duration::from_millis(20),
        ),
        HtmlViewerRenderer::new(),
        presenter.clone(),
        MockBrowserLauncher::new(),
        MockProgressReporter::new(),
    );

    let response = use_case.execute(VisualizeRequest::default()).await.unwrap();
    assert_eq!(response.node_count, 0);
    assert!(presenter.content().contains("\"bomFormat\":\"CycloneDX\""));
}

#[tokio::test]
async fn test_visualize_dangling_and_duplicate_references() {
    let bom = r#"{
        "components": [
            {"bom-ref": "application:app", "name": "app"},
            {"bom-ref": "pkg:openai", "name": "openai"},
            {"bom-ref": "pkg:openai", "name": "openai"}
        ],
        "dependencies": [
            {"ref": "application:app", "dependsOn": ["pkg:openai", "pkg:openai", "model:gone"]},
            {"ref": "ghost", "dependsOn": ["application:app"]}
        ]
    }"#;

    let presenter = MockPresenter::new();
    let progress_reporter = MockProgressReporter::new();
    let use_case = VisualizeBomUseCase::new(
        MockInputSource::new(bom),
        HtmlViewerRenderer::new(),
        presenter.clone(),
        MockBrowserLauncher::new(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(VisualizeRequest::default()).await.unwrap();
    assert_eq!(response.node_count, 3);
    // Repeated targets are kept
    assert_eq!(response.edge_count, 4);
    assert_eq!(response.unresolved_edge_count, 2);
    assert_eq!(response.duplicate_ids, vec!["pkg:openai".to_string()]);

    let warnings = progress_reporter.warnings();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[1].contains("application:app → model:gone"));
    assert!(warnings[1].contains("ghost → application:app"));

    let html = presenter.content();
    assert!(html.contains("Unresolved references"));
    assert!(html.contains("model:gone (missing)"));
    assert!(html.contains("ghost (missing)"));
}

#[tokio::test]
async fn test_visualize_opens_browser_on_request() {
    let browser = MockBrowserLauncher::new();
    let use_case = VisualizeBomUseCase::new(
        MockInputSource::new(MINIMAL),
        HtmlViewerRenderer::new(),
        MockPresenter::new(),
        browser.clone(),
        MockProgressReporter::new(),
    );

    let request = VisualizeRequest::builder()
        .open_in_browser(true)
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();

    assert!(response.opened_in_browser);
    assert_eq!(browser.opened(), vec![PathBuf::from(MockPresenter::PATH)]);
}

#[tokio::test]
async fn test_visualize_browser_failure_still_succeeds() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = VisualizeBomUseCase::new(
        MockInputSource::new(MINIMAL),
        HtmlViewerRenderer::new(),
        MockPresenter::new(),
        MockBrowserLauncher::failing(),
        progress_reporter.clone(),
    );

    let request = VisualizeRequest::builder()
        .open_in_browser(true)
        .build()
        .unwrap();
    let response = use_case.execute(request).await.unwrap();

    assert!(!response.opened_in_browser);
    assert_eq!(progress_reporter.warnings().len(), 1);
    assert!(progress_reporter.warnings()[0].contains("no browser available"));
}

#[tokio::test]
async fn test_visualize_invalid_json() {
    let presenter = MockPresenter::new();
    let use_case = VisualizeBomUseCase::new(
        MockInputSource::new("not json"),
        HtmlViewerRenderer::new(),
        presenter.clone(),
        MockBrowserLauncher::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(VisualizeRequest::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid AI-BOM JSON"));
    assert!(presenter.content().is_empty());
}

#[tokio::test]
async fn test_visualize_writes_real_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output_path = temp_dir.path().join("viewer.html");

    let use_case = VisualizeBomUseCase::new(
        MockInputSource::new(MINIMAL),
        HtmlViewerRenderer::new(),
        FileSystemWriter::new(output_path.clone()),
        MockBrowserLauncher::new(),
        MockProgressReporter::new(),
    );

    let response = use_case.execute(VisualizeRequest::default()).await.unwrap();
    assert_eq!(response.output_path, output_path);

    let html = std::fs::read_to_string(&output_path).unwrap();
    assert!(html.contains(MINIMAL));
}

#[tokio::test]
async fn test_visualize_through_inbound_port() {
    let use_case = VisualizeBomUseCase::new(
        MockInputSource::new(MINIMAL),
        HtmlViewerRenderer::new(),
        MockPresenter::new(),
        MockBrowserLauncher::new(),
        MockProgressReporter::new(),
    );
    let port: Box<dyn BomVisualizationPort> = Box::new(use_case);

    let response = port.visualize(VisualizeRequest::default()).await.unwrap();
    assert_eq!(response.edge_count, 0);
}

#[test]
fn test_core_without_adapters() {
    let parsed = BomParser::parse(&sample_bom_text()).unwrap();
    let graph = GraphProjector::project(&parsed.bom);

    assert_eq!(graph.node_count(), 16);
    assert_eq!(graph.edge_count(), 15);
    assert!(graph.dangling_edges().is_empty());

    let root = graph.node("application:SampleApp").unwrap();
    assert_eq!(root.node_type, NodeType::Application);
    assert_eq!(graph.outgoing("application:SampleApp").len(), 12);

    // Node back-references point into the parsed document
    let deepseek = graph.node("service:deepseek").unwrap();
    let service = deepseek.raw.as_service().unwrap();
    assert!(std::ptr::eq(
        service,
        &parsed.bom.services.as_ref().unwrap()[0]
    ));
}
