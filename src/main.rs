use ai_bom_visualizer::adapters::outbound::browser::SystemBrowserLauncher;
use ai_bom_visualizer::adapters::outbound::console::StderrProgressReporter;
use ai_bom_visualizer::adapters::outbound::renderers::HtmlViewerRenderer;
use ai_bom_visualizer::application::dto::{VisualizeRequest, VisualizeResponse};
use ai_bom_visualizer::application::factories::{
    InputSourceFactory, InputType, PresenterFactory, PresenterType,
};
use ai_bom_visualizer::application::use_cases::VisualizeBomUseCase;
use ai_bom_visualizer::cli::Args;
use ai_bom_visualizer::config::{merge_config, resolve_config};
use ai_bom_visualizer::ports::outbound::ProgressReporter;
use ai_bom_visualizer::shared::error::ExitCode;
use ai_bom_visualizer::shared::Result;
use anyhow::Context;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on argument errors and 0 for --help/--version
    let args = Args::parse_args();

    match run(args).await {
        Ok(response) => {
            // stdout carries only the viewer path
            println!("{}", response.output_path.display());
        }
        Err(e) => {
            let mut message = format!("ai-bom-visualizer: {}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                message.push_str(&format!("\n\nCaused by: {}", cause));
            }

            eprintln!();
            StderrProgressReporter::new().report_error(&message);
            eprintln!();
            process::exit(ExitCode::for_error(&e).as_i32());
        }
    }
}

async fn run(args: Args) -> Result<VisualizeResponse> {
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let config = resolve_config(&args, &cwd)?;
    let merged = merge_config(&args, config);

    let request = VisualizeRequest::builder()
        .title(merged.title)
        .open_in_browser(merged.view)
        .build()?;

    let input_type = match merged.file {
        Some(path) => InputType::File(path),
        None => InputType::Stdin {
            timeout_secs: merged.stdin_timeout_secs,
        },
    };

    // Create adapters (Dependency Injection)
    let use_case = VisualizeBomUseCase::new(
        InputSourceFactory::create(input_type),
        HtmlViewerRenderer::new(),
        PresenterFactory::create(PresenterType::from_output(merged.output)),
        SystemBrowserLauncher::new(),
        StderrProgressReporter::new(),
    );

    use_case.execute(request).await
}
