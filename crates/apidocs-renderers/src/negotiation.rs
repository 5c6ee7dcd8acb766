//! `Accept` header parsing for renderer selection

/// One media range from an `Accept` header
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRange {
	pub type_: String,
	pub subtype: String,
	pub quality: f32,
}

impl MediaRange {
	/// Parses a single media range such as `application/json;q=0.8`
	///
	/// Media type parameters other than `q` are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_renderers::negotiation::MediaRange;
	///
	/// let range = MediaRange::parse("Application/YAML; q=0.5").unwrap();
	/// assert_eq!(range.type_, "application");
	/// assert_eq!(range.subtype, "yaml");
	/// assert_eq!(range.quality, 0.5);
	///
	/// assert!(MediaRange::parse("not-a-media-type").is_none());
	/// ```
	pub fn parse(s: &str) -> Option<Self> {
		let mut parts = s.split(';');
		let essence = parts.next()?.trim();
		let (type_, subtype) = essence.split_once('/')?;
		let (type_, subtype) = (type_.trim(), subtype.trim());
		if type_.is_empty() || subtype.is_empty() {
			return None;
		}

		let mut quality = 1.0;
		for param in parts {
			if let Some((key, value)) = param.trim().split_once('=')
				&& key.trim().eq_ignore_ascii_case("q")
				&& let Ok(q) = value.trim().parse::<f32>()
			{
				quality = q.clamp(0.0, 1.0);
			}
		}

		Some(Self {
			type_: type_.to_ascii_lowercase(),
			subtype: subtype.to_ascii_lowercase(),
			quality,
		})
	}

	/// Whether this range accepts `media_type` (`type/subtype`, parameters ignored)
	pub fn matches(&self, media_type: &str) -> bool {
		let essence = media_type.split(';').next().unwrap_or_default().trim();
		let Some((type_, subtype)) = essence.split_once('/') else {
			return false;
		};

		(self.type_ == "*" || self.type_.eq_ignore_ascii_case(type_))
			&& (self.subtype == "*" || self.subtype.eq_ignore_ascii_case(subtype))
	}

	/// 0 for `*/*`, 1 for `type/*`, 2 for a full media type
	pub fn specificity(&self) -> u8 {
		match (self.type_.as_str(), self.subtype.as_str()) {
			("*", _) => 0,
			(_, "*") => 1,
			_ => 2,
		}
	}

	pub fn is_wildcard(&self) -> bool {
		self.specificity() == 0
	}
}

/// Parses an `Accept` header into acceptable ranges, best first
///
/// Ranges with `q=0` are dropped. Ties on quality go to the more specific
/// range; otherwise header order is kept.
///
/// # Examples
///
/// ```
/// use apidocs_renderers::negotiation::parse_accept;
///
/// let ranges = parse_accept("*/*;q=0.8, text/*, text/html, application/xml;q=0");
/// let essences: Vec<_> = ranges
///     .iter()
///     .map(|r| format!("{}/{}", r.type_, r.subtype))
///     .collect();
/// assert_eq!(essences, ["text/html", "text/*", "*/*"]);
/// ```
pub fn parse_accept(header: &str) -> Vec<MediaRange> {
	let mut ranges: Vec<MediaRange> = header
		.split(',')
		.filter_map(|s| MediaRange::parse(s.trim()))
		.filter(|range| range.quality > 0.0)
		.collect();

	ranges.sort_by(|a, b| {
		b.quality
			.total_cmp(&a.quality)
			.then_with(|| b.specificity().cmp(&a.specificity()))
	});
	ranges
}
