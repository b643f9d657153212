use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
       ─────────────────────────────────────
        ((p implies q) and (q implies p))
       ─────────────────────────────────────
"#;
pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_PATH: StyleId = 2;
pub(crate) const STYLE_FAILURE: StyleId = 3;
pub(crate) const STYLE_SUMMARY: StyleId = 4;
