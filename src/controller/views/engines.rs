use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{controller::views::ViewRenderer, Error, Result};

pub static DEFAULT_ASSET_FOLDER: &str = "assets";

/// Tera backed view engine. Templates are loaded once, from every `.html`
/// file below the views directory.
#[derive(Clone, Debug)]
pub struct TeraView {
    pub tera: tera::Tera,
    pub default_context: tera::Context,
}

impl TeraView {
    /// Create a Tera view engine from `assets/views`
    ///
    /// # Errors
    ///
    /// This function will return an error if building fails
    pub fn build() -> Result<Self> {
        Self::from_custom_dir(&PathBuf::from(DEFAULT_ASSET_FOLDER).join("views"))
    }

    /// Create a Tera view engine from a custom directory
    ///
    /// # Errors
    ///
    /// This function will return an error if the directory is missing or a
    /// template does not parse
    pub fn from_custom_dir<P: AsRef<Path>>(path: &P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Err(Error::string(&format!(
                "missing views directory: `{}`",
                path.as_ref().display()
            )));
        }

        let glob = path.as_ref().join("**").join("*.html");
        let glob = glob
            .to_str()
            .ok_or_else(|| Error::string("invalid glob"))?;
        let tera = tera::Tera::new(glob)?;
        tracing::debug!(
            templates = tera.get_template_names().count(),
            "view templates loaded"
        );

        Ok(Self {
            tera,
            default_context: tera::Context::default(),
        })
    }
}

impl ViewRenderer for TeraView {
    fn render<S: Serialize>(&self, key: &str, data: S) -> Result<String> {
        let mut context = self.default_context.clone();
        context.extend(tera::Context::from_serialize(data)?);
        Ok(self.tera.render(key, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tree_fs::TreeBuilder;

    use super::*;

    #[test]
    fn can_render_nested_template() {
        let tree = TreeBuilder::default()
            .add(
                "views/core/landing.html",
                "<h1>{{ title | default(value=\"welcome\") }}</h1>",
            )
            .create()
            .unwrap();

        let v = TeraView::from_custom_dir(&tree.root.join("views")).unwrap();
        assert_eq!(
            v.render("core/landing.html", json!({})).unwrap(),
            "<h1>welcome</h1>"
        );
        assert_eq!(
            v.render("core/landing.html", json!({"title": "hi"})).unwrap(),
            "<h1>hi</h1>"
        );
    }

    #[test]
    fn missing_template_is_an_error() {
        let tree = TreeBuilder::default()
            .add("views/other.html", "other")
            .create()
            .unwrap();

        let v = TeraView::from_custom_dir(&tree.root.join("views")).unwrap();
        assert!(matches!(
            v.render("core/landing.html", json!({})),
            Err(Error::Tera(_))
        ));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tree = TreeBuilder::default().create().unwrap();
        let err = TeraView::from_custom_dir(&tree.root.join("views")).unwrap_err();
        assert!(err.to_string().contains("missing views directory"));
    }
}
