//! UI command

use crate::input;
use crate::output;
use apidocs_conf::sources::EnvSource;
use apidocs_renderers::{Renderer, RendererContext, UIRenderer};
use bytes::Bytes;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub(crate) struct UiArgs {
	/// Schema document the page describes (JSON or YAML)
	#[arg(value_name = "INPUT")]
	pub input: PathBuf,

	/// Documentation viewer
	#[arg(long, value_enum, default_value = "swagger")]
	pub viewer: ViewerArg,

	/// Settings file (TOML or JSON); APIDOCS_* environment variables apply on top
	#[arg(short, long, value_name = "FILE")]
	pub settings: Option<PathBuf>,

	/// URL the page loads the spec document from
	#[arg(long, value_name = "URL", default_value = "openapi.json")]
	pub spec_url: String,

	/// Write to FILE instead of stdout
	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub(crate) enum ViewerArg {
	Swagger,
	Redoc,
}

/// Render the documentation page, layering `env` over the settings file
pub(crate) async fn render(args: &UiArgs, env: EnvSource) -> anyhow::Result<Bytes> {
	let settings = input::load_settings(args.settings.as_deref(), env)?;
	let schema = input::load_schema(&args.input)?;

	let renderer = match args.viewer {
		ViewerArg::Swagger => UIRenderer::swagger_ui(),
		ViewerArg::Redoc => UIRenderer::redoc(),
	}
	.with_settings(settings);

	output::info(&format!(
		"Rendering {} page for {}",
		renderer.format().unwrap_or_default(),
		args.input.display()
	));

	let mut context = RendererContext::new().with_extra("spec_url", args.spec_url.as_str());
	Ok(renderer.render(&schema, &mut context).await?)
}

pub(crate) async fn execute(args: UiArgs) -> anyhow::Result<()> {
	let body = render(&args, EnvSource::new()).await?;
	output::emit(&body, args.output.as_deref())
}
