use crate::application::dto::{VisualizeRequest, VisualizeResponse};
use crate::application::read_models::GraphReadModelBuilder;
use crate::bom_graph::domain::GraphData;
use crate::bom_graph::services::{BomParser, GraphProjector};
use crate::ports::inbound::BomVisualizationPort;
use crate::ports::outbound::{
    BrowserLauncher, GraphRenderer, InputSource, OutputPresenter, ProgressReporter,
};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// How many dangling references are spelled out in the warning
const MAX_LISTED_DANGLING: usize = 5;

/// VisualizeBomUseCase - Core use case for AI-BOM visualization
///
/// This use case orchestrates the visualization workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `IS` - InputSource implementation
/// * `GR` - GraphRenderer implementation
/// * `OP` - OutputPresenter implementation
/// * `BL` - BrowserLauncher implementation
/// * `PR` - ProgressReporter implementation
pub struct VisualizeBomUseCase<IS, GR, OP, BL, PR> {
    input_source: IS,
    renderer: GR,
    presenter: OP,
    browser_launcher: BL,
    progress_reporter: PR,
}

impl<IS, GR, OP, BL, PR> VisualizeBomUseCase<IS, GR, OP, BL, PR>
where
    IS: InputSource,
    GR: GraphRenderer,
    OP: OutputPresenter,
    BL: BrowserLauncher,
    PR: ProgressReporter,
{
    /// Creates a new VisualizeBomUseCase with injected dependencies
    pub fn new(
        input_source: IS,
        renderer: GR,
        presenter: OP,
        browser_launcher: BL,
        progress_reporter: PR,
    ) -> Self {
        Self {
            input_source,
            renderer,
            presenter,
            browser_launcher,
            progress_reporter,
        }
    }

    /// Executes the visualization use case
    ///
    /// # Arguments
    /// * `request` - Run options
    ///
    /// # Returns
    /// VisualizeResponse with the written path and graph statistics
    pub async fn execute(&self, request: VisualizeRequest) -> Result<VisualizeResponse> {
        // Step 1: Collect the raw producer output
        let raw = self.collect_input().await?;

        // Step 2: Extract and parse the JSON document
        let parsed = BomParser::parse(&raw)?;

        // Step 3: Project the graph and report what was found
        let graph = GraphProjector::project(&parsed.bom);
        self.report_graph(&graph);

        // Step 4: Build the read model and render it
        let model = GraphReadModelBuilder::build(&graph, &parsed.bom, &request.title);
        self.progress_reporter.report("🎨 Rendering viewer...");
        let document = self.renderer.render(&model, &parsed.json)?;

        // Step 5: Write the viewer
        let output_path = self.presenter.present(&document)?;
        self.progress_reporter.report_completion(&format!(
            "✅ Viewer written to {}",
            output_path.display()
        ));

        // Step 6: Optionally open it
        let opened_in_browser = request.open_in_browser && self.open_viewer(&output_path);

        Ok(VisualizeResponse {
            output_path,
            node_count: model.stats.node_count,
            edge_count: model.stats.edge_count,
            unresolved_edge_count: model.stats.unresolved_edge_count,
            duplicate_ids: model.stats.duplicate_ids,
            opened_in_browser,
        })
    }

    /// Reads the whole input while the waiting indicator runs
    async fn collect_input(&self) -> Result<String> {
        let source = self.input_source.describe();
        self.progress_reporter
            .start_waiting(&format!("Reading AI-BOM from {}...", source));
        let result = self.input_source.read_to_end().await;
        self.progress_reporter.stop_waiting();

        let raw = result?;
        self.progress_reporter
            .report(&format!("📥 Read {} byte(s) from {}", raw.len(), source));
        Ok(raw)
    }

    fn report_graph(&self, graph: &GraphData<'_>) {
        self.progress_reporter.report(&format!(
            "📊 Projected {} node(s) and {} edge(s)",
            graph.node_count(),
            graph.edge_count()
        ));

        let duplicates = graph.duplicate_ids();
        if !duplicates.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "{} bom-ref(s) are used by more than one entity: {}",
                duplicates.len(),
                duplicates.join(", ")
            ));
        }

        let dangling: Vec<String> = graph
            .dangling_edges()
            .iter()
            .map(|edge| format!("{} → {}", edge.from, edge.to))
            .collect();
        if !dangling.is_empty() {
            let mut listed = dangling
                .iter()
                .take(MAX_LISTED_DANGLING)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            if dangling.len() > MAX_LISTED_DANGLING {
                listed.push_str(&format!(", and {} more", dangling.len() - MAX_LISTED_DANGLING));
            }
            self.progress_reporter.report_warning(&format!(
                "{} dependency reference(s) name no component or service: {}",
                dangling.len(),
                listed
            ));
        }
    }

    /// Opens the viewer; a launch failure is only a warning
    fn open_viewer(&self, path: &Path) -> bool {
        match self.browser_launcher.open(path) {
            Ok(()) => {
                self.progress_reporter
                    .report("🌐 Opened the viewer in your browser");
                true
            }
            Err(e) => {
                self.progress_reporter.report_warning(&format!(
                    "{}\n   Open {} manually.",
                    e,
                    path.display()
                ));
                false
            }
        }
    }
}

#[async_trait]
impl<IS, GR, OP, BL, PR> BomVisualizationPort for VisualizeBomUseCase<IS, GR, OP, BL, PR>
where
    IS: InputSource,
    GR: GraphRenderer,
    OP: OutputPresenter,
    BL: BrowserLauncher,
    PR: ProgressReporter,
{
    async fn visualize(&self, request: VisualizeRequest) -> Result<VisualizeResponse> {
        self.execute(request).await
    }
}
