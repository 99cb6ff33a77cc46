//! Static HTML output for built pages.
//!
//! Produces one `index.html` per page under the output directory plus a
//! `pages.json` manifest of every descriptor. The markup is intentionally
//! plain; styling belongs to the hosting front-end.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{Options, Parser};

use crate::builder::{BuildError, Breadcrumb, GuideLink, PageContext, PageDescriptor};
use crate::schema::ResolvedFrontmatter;

/// Manifest file written next to the pages.
pub const MANIFEST_FILENAME: &str = "pages.json";

/// Render a complete static HTML page.
pub fn render_page(page: &PageDescriptor, site_title: &str) -> String {
    let mut html = String::with_capacity(4096);
    let title = page.context.title();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(
        html,
        "<title>{} | {}</title>",
        escape(title),
        escape(site_title)
    );
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<header><a href=\"/\">{}</a></header>", escape(site_title));

    match &page.context {
        PageContext::Guide(guide) => {
            render_sidebar(&mut html, &guide.section.name, &guide.siblings);
            html.push_str("<main>\n");
            render_breadcrumbs(&mut html, &guide.breadcrumbs);
            let _ = writeln!(html, "<h1>{}</h1>", escape(&guide.title));
            if let Some(frontmatter) = &guide.frontmatter {
                render_byline(&mut html, frontmatter);
            }
            if let Some(body) = &guide.body {
                render_markdown(&mut html, body);
            }
            render_pager(&mut html, guide.previous.as_ref(), guide.next.as_ref());
            html.push_str("</main>\n");
        }
        PageContext::Document(doc) => {
            html.push_str("<main>\n");
            let _ = writeln!(html, "<h1>{}</h1>", escape(&doc.title));
            render_byline(&mut html, &doc.frontmatter);
            render_markdown(&mut html, &doc.body);
            html.push_str("</main>\n");
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_sidebar(html: &mut String, section_name: &str, guides: &[GuideLink]) {
    html.push_str("<aside>\n");
    let _ = writeln!(html, "<h2>{}</h2>", escape(section_name));
    html.push_str("<ul>\n");
    for guide in guides {
        let class = if guide.active { " class=\"active\"" } else { "" };
        let _ = writeln!(
            html,
            "<li{}><a href=\"{}\">{}</a></li>",
            class,
            escape(&guide.path),
            escape(&guide.title),
        );
    }
    html.push_str("</ul>\n</aside>\n");
}

fn render_breadcrumbs(html: &mut String, breadcrumbs: &[Breadcrumb]) {
    if breadcrumbs.is_empty() {
        return;
    }
    html.push_str("<nav class=\"breadcrumbs\">\n<ol>\n");
    for crumb in breadcrumbs {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            escape(&crumb.path),
            escape(&crumb.title),
        );
    }
    html.push_str("</ol>\n</nav>\n");
}

fn render_byline(html: &mut String, frontmatter: &ResolvedFrontmatter) {
    if let Some(author) = &frontmatter.author {
        let _ = writeln!(html, "<p class=\"byline\">By {}</p>", escape(&author.name));
    }
}

fn render_pager(html: &mut String, previous: Option<&GuideLink>, next: Option<&GuideLink>) {
    if previous.is_none() && next.is_none() {
        return;
    }
    html.push_str("<nav class=\"pager\">\n");
    if let Some(prev) = previous {
        let _ = writeln!(
            html,
            "<a rel=\"prev\" href=\"{}\">{}</a>",
            escape(&prev.path),
            escape(&prev.title)
        );
    }
    if let Some(next) = next {
        let _ = writeln!(
            html,
            "<a rel=\"next\" href=\"{}\">{}</a>",
            escape(&next.path),
            escape(&next.title)
        );
    }
    html.push_str("</nav>\n");
}

fn render_markdown(html: &mut String, markdown: &str) {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    html.push_str("<article>\n");
    pulldown_cmark::html::push_html(html, Parser::new_ext(markdown, options));
    html.push_str("</article>\n");
}

/// Output file for a URL path (`/a/b` -> `<out>/a/b/index.html`).
fn output_file(output_dir: &Path, url_path: &str) -> PathBuf {
    url_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(output_dir.to_path_buf(), |dir, segment| dir.join(segment))
        .join("index.html")
}

/// Write every page and the manifest under `output_dir`.
///
/// Returns the number of HTML files written.
pub fn write_site(
    pages: &[PageDescriptor],
    output_dir: &Path,
    site_title: &str,
) -> Result<usize, BuildError> {
    fs::create_dir_all(output_dir)?;

    for page in pages {
        let file = output_file(output_dir, &page.url_path);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file, render_page(page, site_title))?;
        tracing::debug!(file = %file.display(), "Wrote page");
    }

    let manifest = serde_json::to_string_pretty(pages)?;
    fs::write(output_dir.join(MANIFEST_FILENAME), manifest)?;

    Ok(pages.len())
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
