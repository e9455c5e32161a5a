// src/core/render.rs
use std::io::{self, Write};

use crate::models::TagCloud;
use crate::utils::escape_html;

/// Stylesheets linked by default: the course-hosted copy and a local
/// `tagcloud.css` next to the output.
pub const DEFAULT_STYLESHEETS: &[&str] = &[
    "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css",
    "tagcloud.css",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub stylesheets: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            stylesheets: DEFAULT_STYLESHEETS.iter().map(|&s| s.to_owned()).collect(),
        }
    }
}

/// CSS class for a font size, e.g. `f29`. Matches the companion stylesheet.
#[inline]
#[must_use]
pub fn font_class(font_size: u32) -> String {
    format!("f{font_size}")
}

#[inline]
#[must_use]
pub fn heading(cloud: &TagCloud) -> String {
    format!("Top {} words in {}", cloud.len(), cloud.title)
}

/// Writes the header block: title, stylesheet links and the opening of the
/// cloud container.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_header<W: Write>(cloud: &TagCloud, options: &RenderOptions, out: &mut W) -> io::Result<()> {
    let heading = escape_html(&heading(cloud)).into_owned();

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{heading}</title>")?;
    for href in &options.stylesheets {
        writeln!(
            out,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            escape_html(href)
        )?;
    }
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{heading}</h2>")?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "<p class=\"cbox\">")?;
    Ok(())
}

/// Writes one span per entry, in the cloud's display order.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_cloud<W: Write>(cloud: &TagCloud, out: &mut W) -> io::Result<()> {
    for entry in &cloud.entries {
        writeln!(
            out,
            "<span style=\"cursor:default\" class=\"{}\" title=\"count: {}\">{}</span>",
            font_class(entry.font_size),
            entry.count,
            escape_html(&entry.word)
        )?;
    }
    Ok(())
}

/// # Errors
///
/// Propagates any error from `out`.
pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

/// Renders the full document: header, word spans and closing block.
///
/// # Errors
///
/// Propagates any error from `out`. Nothing is flushed here.
#[inline]
pub fn render_html<W: Write>(cloud: &TagCloud, options: &RenderOptions, out: &mut W) -> io::Result<()> {
    write_header(cloud, options, out)?;
    write_cloud(cloud, out)?;
    write_footer(out)
}

/// Convenience wrapper returning the document as a `String`.
#[must_use]
pub fn render_to_string(cloud: &TagCloud, options: &RenderOptions) -> String {
    let mut buffer = Vec::new();
    // A Vec sink never fails, so the empty fallback is unreachable.
    render_html(cloud, options, &mut buffer).map_or_else(
        |_| String::new(),
        |()| String::from_utf8_lossy(&buffer).into_owned(),
    )
}
