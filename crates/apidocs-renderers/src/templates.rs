//! Built-in viewer templates

use once_cell::sync::OnceCell;
use tera::Tera;

pub const SWAGGER_UI_TEMPLATE: &str = "apidocs/swagger-ui.html";
pub const REDOC_TEMPLATE: &str = "apidocs/redoc.html";

static BUILTIN: OnceCell<Tera> = OnceCell::new();

/// Tera instance holding the embedded viewer templates
///
/// Parsed on first use. Template names end in `.html`, so Tera autoescapes
/// every variable not marked `safe`.
pub fn builtin() -> tera::Result<&'static Tera> {
	BUILTIN.get_or_try_init(|| {
		let mut tera = Tera::default();
		tera.add_raw_templates(vec![
			(
				SWAGGER_UI_TEMPLATE,
				include_str!("../templates/apidocs/swagger-ui.html"),
			),
			(REDOC_TEMPLATE, include_str!("../templates/apidocs/redoc.html")),
		])?;
		tracing::debug!("loaded built-in viewer templates");
		Ok(tera)
	})
}
