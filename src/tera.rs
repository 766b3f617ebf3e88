use tera::{Context, Tera};

use crate::Result;

/// Render a one-off template string, used to expand config files before
/// they are parsed.
pub fn render_string(tera_template: &str, locals: &serde_json::Value) -> Result<String> {
    let text = Tera::one_off(tera_template, &Context::from_serialize(locals)?, false)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn can_render_with_locals() {
        let res = render_string("port: {{ port }}", &json!({"port": 5150})).unwrap();
        assert_eq!(res, "port: 5150");
    }

    #[test]
    fn can_fall_back_to_env_default() {
        let res = render_string(
            r#"port: {{ get_env(name="LANDING_TEST_UNSET_PORT", default=5151) }}"#,
            &json!({}),
        )
        .unwrap();
        assert_eq!(res, "port: 5151");
    }
}
