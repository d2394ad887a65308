use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", summary_text(config));
}

fn summary_text(config: &ResolvedConfig) -> String {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Index: {}", config.index_path.display()),
		format!("  Excerpt words: {}", config.index.excerpt_words),
		format!("  Debounce: {}ms", config.palette.debounce.as_millis()),
		format!("  Max query length: {}", config.palette.max_query_chars),
		format!("  Max results: {}", config.palette.max_rendered_results),
		format!(
			"  Announcement: {}ms",
			config.palette.announcement_ttl.as_millis()
		),
		format!("  Browse link: {}", config.palette.browse_url),
		format!("  Page: {} ({})", config.page.title, config.page.url),
	];
	if config.page.links.is_empty() {
		lines.push("  Links: (none)".to_string());
	} else {
		let links: Vec<String> = config
			.page
			.links
			.iter()
			.map(|link| format!("{} -> {}", link.label, link.url))
			.collect();
		lines.push(format!("  Links: {}", links.join(", ")));
	}
	lines.push(format!("  Log file: {}", config.log_file.display()));
	lines.push(format!("  Log filter: {}", config.log_filter));

	let mut text = lines.join("\n");
	text.push('\n');
	text
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use quire_palette::PaletteConfig;
	use quire_static_index::StaticIndexOptions;
	use quire_tui::{PageLink, PageSpec};

	use super::*;

	#[test]
	fn summary_lists_links_and_index() {
		let config = ResolvedConfig {
			palette: PaletteConfig::default(),
			index_path: PathBuf::from("/srv/site/index.json"),
			index: StaticIndexOptions::default(),
			page: PageSpec {
				title: "Home".into(),
				url: "/".into(),
				links: vec![PageLink {
					label: "Blog".into(),
					url: "/blog/".into(),
				}],
			},
			log_file: PathBuf::from("/tmp/quire.log"),
			log_filter: "quire=debug".into(),
		};

		let text = summary_text(&config);
		assert!(text.contains("Index: /srv/site/index.json"));
		assert!(text.contains("Debounce: 300ms"));
		assert!(text.contains("Links: Blog -> /blog/"));
		assert!(text.ends_with("Log filter: quire=debug\n"));
	}
}
