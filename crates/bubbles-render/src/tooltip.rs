use crate::svg::escape_xml_into;
use bubbles_core::Detail;

/// Folder the portrait file names are relative to.
pub const IMAGE_DIR: &str = "img/tetes/";

/// Tooltip body for a hovered bubble: name, description and portrait.
pub fn tooltip_html(detail: &Detail) -> String {
    let mut out = String::new();
    out.push_str(r#"<span class="name">"#);
    escape_xml_into(&mut out, &detail.name);
    out.push_str(r#"</span><br/><span class="name">Description: </span><span class="value">"#);
    escape_xml_into(&mut out, &detail.description);
    out.push_str(r#"</span><br/><center><span class="value"><img style="max-width:300px" src=""#);
    out.push_str(IMAGE_DIR);
    escape_xml_into(&mut out, &detail.image);
    out.push_str(r#"" /></span></center>"#);
    out
}
