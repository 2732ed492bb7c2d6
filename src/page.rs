use crate::extract::get_filename_from_url;
use crate::session::{NoticeLevel, SearchSession};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;

pub const GRID_COLUMNS: usize = 5;
pub const THUMBNAIL_WIDTH: u32 = 125;

const TITLE: &str = "Google Images Grid";
const PLACEHOLDER: &str = "Ex: paisagens, receitas, moda...";

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
form { display: flex; gap: .5rem; margin-bottom: 1rem; }
input[type=text] { flex: 1; padding: .5rem; }
.notice { padding: .75rem 1rem; border-radius: .25rem; margin-bottom: 1rem; }
.notice.info { background: #e8f0fe; }
.notice.success { background: #e6f4ea; }
.notice.warning { background: #fef7e0; }
.notice.error { background: #fce8e6; }
#spinner { display: none; margin-bottom: 1rem; }
.grid { display: grid; gap: 1rem; }
.cell { word-break: break-all; font-size: .8rem; }
"#;

const SCRIPT: &str = r#"
document.getElementById("search").addEventListener("submit", function () {
  document.getElementById("spinner").style.display = "block";
});
"#;

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "success",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    }
}

/// Render the full page for a session in any state.
pub fn render(session: &SearchSession) -> String {
    let notice = session.outcome();
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"pt-br\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n",
        title = TITLE,
    );
    let _ = write!(
        html,
        "<form id=\"search\" method=\"get\" action=\"/\">\n<input type=\"text\" name=\"q\" aria-label=\"Digite sua busca\" placeholder=\"{}\" value=\"{}\">\n<button type=\"submit\">Buscar</button>\n</form>\n",
        attr(PLACEHOLDER),
        attr(session.query()),
    );
    html.push_str("<div id=\"spinner\">Buscando imagens...</div>\n");
    let _ = writeln!(
        html,
        "<div class=\"notice {}\">{}</div>",
        level_class(notice.level),
        text(&notice.message),
    );

    let images = session.images();
    if !images.is_empty() {
        html.push_str(&render_grid(images));
    }

    let _ = write!(html, "<script>{SCRIPT}</script>\n</body>\n</html>\n");
    html
}

/// Grid of thumbnails, [`GRID_COLUMNS`] per row, each with a download link.
pub fn render_grid(images: &[String]) -> String {
    let mut html = format!(
        "<div class=\"grid\" style=\"grid-template-columns: repeat({}, 1fr)\">\n",
        GRID_COLUMNS
    );
    for url in images {
        let filename = get_filename_from_url(url);
        let _ = writeln!(
            html,
            "<div class=\"cell\"><img src=\"{url}\" width=\"{width}\" loading=\"lazy\"><br><a href=\"{url}\" download=\"{file_attr}\" target=\"_blank\">📥 Baixar {file_text}</a></div>",
            url = attr(url),
            width = THUMBNAIL_WIDTH,
            file_attr = attr(filename),
            file_text = text(filename),
        );
    }
    html.push_str("</div>\n");
    html
}
