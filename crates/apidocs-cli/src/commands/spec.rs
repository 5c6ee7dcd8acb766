//! Spec command

use crate::input;
use crate::output;
use apidocs_codec::ValidatorSet;
use apidocs_renderers::{Renderer, RendererContext, SpecRenderer};
use bytes::Bytes;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub(crate) struct SpecArgs {
	/// Schema document to render (JSON or YAML)
	#[arg(value_name = "INPUT")]
	pub input: PathBuf,

	/// Output format
	#[arg(short = 'f', long, value_enum, default_value = "openapi")]
	pub format: SpecFormatArg,

	/// Validators to run, in order (structure, semantics)
	#[arg(long, value_delimiter = ',', conflicts_with = "no_validate")]
	pub validators: Option<Vec<String>>,

	/// Skip validation entirely
	#[arg(long)]
	pub no_validate: bool,

	/// Pretty print JSON output
	#[arg(long)]
	pub pretty: bool,

	/// Write to FILE instead of stdout
	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub(crate) enum SpecFormatArg {
	Openapi,
	Json,
	Yaml,
}

impl SpecArgs {
	fn renderer(&self) -> anyhow::Result<SpecRenderer> {
		let renderer = match self.format {
			SpecFormatArg::Openapi => SpecRenderer::openapi(),
			SpecFormatArg::Json => SpecRenderer::swagger_json(),
			SpecFormatArg::Yaml => SpecRenderer::swagger_yaml(),
		}
		.pretty(self.pretty);

		Ok(match (&self.validators, self.no_validate) {
			(_, true) => renderer.validators(ValidatorSet::none()),
			(Some(names), false) => renderer.with_validators(names)?,
			(None, false) => renderer,
		})
	}
}

/// Render the schema with the selected spec renderer
pub(crate) async fn render(args: &SpecArgs) -> anyhow::Result<Bytes> {
	let renderer = args.renderer()?;
	let schema = input::load_schema(&args.input)?;

	output::info(&format!(
		"Rendering {} as {} (validators: {})",
		args.input.display(),
		renderer.media_type(),
		renderer.validator_set().names().join(", ")
	));

	Ok(renderer.render(&schema, &mut RendererContext::new()).await?)
}

pub(crate) async fn execute(args: SpecArgs) -> anyhow::Result<()> {
	let body = render(&args).await?;
	output::emit(&body, args.output.as_deref())
}
