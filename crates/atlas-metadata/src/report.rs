//! Static HTML preview of the info snapshot.

use crate::snapshot::{read_records, write_text};
use atlas_core::error::Result;
use atlas_core::{ColorKind, EmojiRecord};
use std::path::Path;

const HEAD: &str = "<!doctype html>
<html>
<head>
\t<title>NotoEmoji Preview</title>
\t<meta http-equiv=\"content-type\" content=\"text/html; charset=UTF-8\">
\t<meta id=\"gameViewport\" name=\"viewport\" content=\"width=device-width initial-scale=1\">
\t<link href=\"styles.css\" rel=\"stylesheet\" type=\"text/css\">
</head>

";

const INTRO: &str = "<body>
<h1>NotoEmoji Preview</h1>
<p>This shows all emoji supported by <a href=\"https://github.com/tommyettinger/noto-emoji-atlas\">NotoEmojiAtlas</a>, along with the names each can be looked up by.</p>
<p>The atlases and all image assets are licensed under the <a href=\"https://github.com/tommyettinger/noto-emoji-atlas/blob/main/LICENSE.txt\">OFL 1.1</a>.</p>
<p>Thanks to the entire <a href=\"https://github.com/googlefonts/noto-emoji/\">Noto Emoji project</a>!</p>
";

/// Render the preview page. Images are referenced as `<kind>/name/<name>.png`.
pub fn render_html(records: &[EmojiRecord], kind: ColorKind) -> Result<String> {
    let mut html = String::with_capacity(4096 + records.len() * 128);
    html.push_str(HEAD);
    html.push_str(INTRO);
    html.push_str("<div class=\"box\">\n");
    for record in records {
        let name = record.name()?;
        html.push_str("\t<div class=\"item\">\n");
        html.push_str(&format!("\t\t<img src=\"{kind}/name/{name}.png\" alt=\"{name}\" />\n"));
        if let Some(emoji) = record.emoji().filter(|e| !e.is_empty()) {
            html.push_str(&format!("\t\t<p>{emoji}</p>\n"));
        }
        html.push_str(&format!("\t\t<p>{name}</p>\n"));
        html.push_str("\t</div>\n");
    }
    html.push_str("</div>\n</body>\n</html>\n");
    Ok(html)
}

/// Render the info snapshot at `info` into `output`. Returns the item count.
pub fn write_html(info: &Path, output: &Path, kind: ColorKind) -> Result<usize> {
    let records = read_records(info)?;
    let html = render_html(&records, kind)?;
    write_text(output, &html)?;
    tracing::info!("wrote {} preview items to {}", records.len(), output.display());
    Ok(records.len())
}
