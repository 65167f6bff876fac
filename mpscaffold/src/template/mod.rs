//! Artifact template rendering
//!
//! Templates are compiled into a handlebars registry once, when the renderer
//! is built, keyed by `<kind dir>/<extension>`. Which templates exist is
//! decided by the [`TemplateFamily`] the renderer was built for.

use convert_case::{Case, Casing};
use handlebars::Handlebars;
use serde::Serialize;

use crate::artifact::ArtifactKind;
use crate::error::{Result, ScaffoldError};

pub mod family;
pub mod files;
pub use family::{TemplateFamily, Wemp, Wxapp};

/// Variables available to every artifact template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    /// Kind directory (`views` or `components`)
    pub kind: &'static str,
    /// Artifact name as given
    pub name: String,
    /// Name in `PascalCase`
    pub pascal_name: String,
    /// Name in Title Case
    pub title: String,
}

impl TemplateParams {
    /// Build the parameters for one artifact
    #[must_use]
    pub fn new(kind: ArtifactKind, name: &str) -> Self {
        Self {
            kind: kind.dir_name(),
            name: name.to_string(),
            pascal_name: name.to_case(Case::Pascal),
            title: name.to_case(Case::Title),
        }
    }
}

/// Artifact template renderer for one family
pub struct TemplateRenderer {
    family: Box<dyn TemplateFamily>,
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Compile every template of `family`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Template`] if a template fails to compile.
    pub fn new(family: impl TemplateFamily + 'static) -> Result<Self> {
        Self::from_boxed(Box::new(family))
    }

    /// Compile every template of an already boxed family
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Template`] if a template fails to compile.
    pub fn from_boxed(family: Box<dyn TemplateFamily>) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Generated files are code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        for kind in ArtifactKind::ALL {
            for extension in family.extensions() {
                if let Some(source) = family.template(kind, extension) {
                    handlebars
                        .register_template_string(&template_key(kind, extension), source)
                        .map_err(|e| {
                            ScaffoldError::Template(format!(
                                "{} {kind} .{extension}: {e}",
                                family.name()
                            ))
                        })?;
                }
            }
        }

        Ok(Self { family, handlebars })
    }

    /// Family this renderer was built for
    #[must_use]
    pub fn family(&self) -> &dyn TemplateFamily {
        self.family.as_ref()
    }

    /// Extensions every artifact of this family gets, in write order
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        self.family.extensions()
    }

    /// Render the `extension` file of a `kind` artifact
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::TemplateNotRegistered`] if the family has no such template
    /// - [`ScaffoldError::Template`] if rendering fails
    pub fn render(
        &self,
        kind: ArtifactKind,
        extension: &str,
        params: &TemplateParams,
    ) -> Result<String> {
        let key = template_key(kind, extension);
        if !self.handlebars.has_template(&key) {
            return Err(ScaffoldError::TemplateNotRegistered {
                family: self.family.name(),
                kind: kind.label(),
                extension: extension.to_string(),
            });
        }

        self.handlebars
            .render(&key, params)
            .map_err(|e| ScaffoldError::Template(format!("{key}: {e}")))
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("family", &self.family.name())
            .finish_non_exhaustive()
    }
}

fn template_key(kind: ArtifactKind, extension: &str) -> String {
    format!("{}/{extension}", kind.dir_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params() {
        let params = TemplateParams::new(ArtifactKind::Page, "user-profile");
        assert_eq!(params.kind, "views");
        assert_eq!(params.name, "user-profile");
        assert_eq!(params.pascal_name, "UserProfile");
        assert_eq!(params.title, "User Profile");
    }

    #[test]
    fn test_render_page_script() {
        let renderer = TemplateRenderer::new(Wemp).unwrap();
        let params = TemplateParams::new(ArtifactKind::Page, "about");
        let rendered = renderer.render(ArtifactKind::Page, "js", &params).unwrap();
        assert!(rendered.starts_with("Page({"));
        assert!(rendered.contains("title: 'About'"));
        assert!(rendered.contains("path: '/views/about/about'"));
    }

    #[test]
    fn test_render_component_config() {
        let renderer = TemplateRenderer::new(Wxapp).unwrap();
        let params = TemplateParams::new(ArtifactKind::Component, "button");
        let rendered = renderer.render(ArtifactKind::Component, "json", &params).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["component"], true);
    }

    #[test]
    fn test_rendered_page_config_is_json() {
        let renderer = TemplateRenderer::new(Wemp).unwrap();
        let params = TemplateParams::new(ArtifactKind::Page, "order_list");
        let rendered = renderer.render(ArtifactKind::Page, "json", &params).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["navigationBarTitleText"], "Order List");
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let renderer = TemplateRenderer::new(Wemp).unwrap();
        let params = TemplateParams::new(ArtifactKind::Component, "card");
        let rendered = renderer.render(ArtifactKind::Component, "html", &params).unwrap();
        assert_eq!(rendered, "<view class=\"card\">\n  <slot></slot>\n</view>\n");
    }

    #[test]
    fn test_stylesheet_dialects() {
        let params = TemplateParams::new(ArtifactKind::Page, "home");

        let wemp = TemplateRenderer::new(Wemp).unwrap();
        let styl = wemp.render(ArtifactKind::Page, "styl", &params).unwrap();
        assert!(styl.starts_with(".home\n  display block"));

        let wxapp = TemplateRenderer::new(Wxapp).unwrap();
        let less = wxapp.render(ArtifactKind::Page, "less", &params).unwrap();
        assert!(less.starts_with(".home {\n  display: block;"));
    }

    #[test]
    fn test_unregistered_template() {
        let renderer = TemplateRenderer::new(Wemp).unwrap();
        let params = TemplateParams::new(ArtifactKind::Page, "home");
        let result = renderer.render(ArtifactKind::Page, "less", &params);
        assert!(matches!(
            result,
            Err(ScaffoldError::TemplateNotRegistered { family: "wemp", kind: "page", .. })
        ));
    }
}
