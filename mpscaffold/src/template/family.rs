//! Template families
//!
//! A family is the template set of one target ecosystem: which files an
//! artifact consists of, what goes in them, and which remote repository new
//! projects start from.

use super::files::{
    COMPONENT_HTML, COMPONENT_JS, COMPONENT_JSON, COMPONENT_LESS, COMPONENT_STYL, PAGE_HTML,
    PAGE_JS, PAGE_JSON, PAGE_LESS, PAGE_STYL,
};
use crate::artifact::ArtifactKind;

/// Static template registry for one target ecosystem
pub trait TemplateFamily: Send + Sync {
    /// Family name, used in messages
    fn name(&self) -> &'static str;

    /// File extensions every artifact gets, in write order
    fn extensions(&self) -> &'static [&'static str];

    /// Template source for a kind/extension pair
    fn template(&self, kind: ArtifactKind, extension: &str) -> Option<&'static str>;

    /// Remote project template reference (`owner/repo[#branch]`)
    fn project_template(&self) -> &'static str;
}

/// Stylus-based family used by the `wemp` tool
#[derive(Debug, Clone, Copy, Default)]
pub struct Wemp;

/// Less-based family used by the `wxapp` tool
#[derive(Debug, Clone, Copy, Default)]
pub struct Wxapp;

/// Script, markup and config templates both families share
fn shared(kind: ArtifactKind, extension: &str) -> Option<&'static str> {
    match (kind, extension) {
        (ArtifactKind::Page, "js") => Some(PAGE_JS),
        (ArtifactKind::Page, "html") => Some(PAGE_HTML),
        (ArtifactKind::Page, "json") => Some(PAGE_JSON),
        (ArtifactKind::Component, "js") => Some(COMPONENT_JS),
        (ArtifactKind::Component, "html") => Some(COMPONENT_HTML),
        (ArtifactKind::Component, "json") => Some(COMPONENT_JSON),
        _ => None,
    }
}

impl TemplateFamily for Wemp {
    fn name(&self) -> &'static str {
        "wemp"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["styl", "js", "html", "json"]
    }

    fn template(&self, kind: ArtifactKind, extension: &str) -> Option<&'static str> {
        match (kind, extension) {
            (ArtifactKind::Page, "styl") => Some(PAGE_STYL),
            (ArtifactKind::Component, "styl") => Some(COMPONENT_STYL),
            _ => shared(kind, extension),
        }
    }

    fn project_template(&self) -> &'static str {
        "LuoHuacheng/wemp-template"
    }
}

impl TemplateFamily for Wxapp {
    fn name(&self) -> &'static str {
        "wxapp"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["less", "js", "html", "json"]
    }

    fn template(&self, kind: ArtifactKind, extension: &str) -> Option<&'static str> {
        match (kind, extension) {
            (ArtifactKind::Page, "less") => Some(PAGE_LESS),
            (ArtifactKind::Component, "less") => Some(COMPONENT_LESS),
            _ => shared(kind, extension),
        }
    }

    fn project_template(&self) -> &'static str {
        "LuoHuacheng/wxapp-template"
    }
}
