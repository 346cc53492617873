#[cfg(test)]
mod tests {
    use super::super::settings::*;
    use crate::registry::Form;
    use std::path::Path;

    #[test]
    fn test_empty_config_uses_form_i() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::empty());
        assert_eq!(config.output.form, Form::FormI);
    }

    #[test]
    fn test_output_form() {
        let config = Config::from_toml(
            r#"
[output]
form = "form-ii-upper"
"#,
        )
        .unwrap();
        assert_eq!(config.output.form, Form::FormIIUpper);

        let config = Config::from_toml("[output]\nform = \"lower\"\n").unwrap();
        assert_eq!(config.output.form, Form::FormIILower);
    }

    #[test]
    fn test_unknown_form_is_rejected() {
        let err = Config::from_toml("[output]\nform = \"form-iii\"\n").unwrap_err();
        assert!(err.to_string().contains("Unknown form: form-iii"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("iso2955-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[output]\nform = \"upper\"\n").unwrap();

        let config = Config::resolve(Some(&path)).unwrap();
        assert_eq!(config.output.form, Form::FormIIUpper);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Config::resolve(Some(Path::new("/nonexistent/iso2955.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_default_file_falls_back() {
        // Tests run from the crate root, which carries no iso2955.toml
        let config = Config::resolve(None).unwrap();
        assert_eq!(config, Config::empty());
    }
}
