#[cfg(test)]
mod tests {
    use super::super::export::TableExport;
    use super::super::formatter::*;
    use crate::registry::*;
    use serde_json::Value;

    #[test]
    fn test_unit_line_uses_selected_form() {
        let line = format_unit_line(&OHM, Form::FormI);
        assert!(line.starts_with("ohm (Ω)"));
        assert!(line.ends_with(" Ohm"));

        let line = format_unit_line(&OHM, Form::FormIIUpper);
        assert!(line.ends_with(" OHM"));
    }

    #[test]
    fn test_prefix_line_shows_factor() {
        let line = format_prefix_line(&KILO, Form::FormIIUpper);
        assert!(line.starts_with("kilo (k)"));
        assert!(line.contains("1e3"));
        assert!(line.ends_with(" K"));

        let line = format_prefix_line(&MILLI, Form::FormI);
        assert!(line.contains("1e-3"));
    }

    #[test]
    fn test_unit_details() {
        let details = format_unit_details(&DEGREE_CELSIUS);
        let lines: Vec<&str> = details.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Unit: degree Celsius",
                "Category: derived",
                "International symbol: ℃",
                "Form I: Cel",
                "Form II (lower): cel",
                "Form II (upper): CEL",
            ]
        );
    }

    #[test]
    fn test_prefix_details() {
        let details = format_prefix_details(&MICRO);
        assert!(details.contains("Prefix: micro"));
        assert!(details.contains("Multiplication factor: 1e-6"));
        assert!(details.contains("International symbol: µ"));
        assert!(details.contains("Form II (upper): U"));
    }

    #[test]
    fn test_full_export() {
        let json = TableExport::full().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let units = value["units"].as_array().unwrap();
        let prefixes = value["prefixes"].as_array().unwrap();
        assert_eq!(units.len(), 48);
        assert_eq!(prefixes.len(), 16);

        let ohm = units.iter().find(|u| u["name"] == "ohm").unwrap();
        assert_eq!(ohm["international_symbol"], "Ω");
        assert_eq!(ohm["category"], "derived");
        assert_eq!(ohm["representation"]["form_i"], "Ohm");
        assert_eq!(ohm["representation"]["form_ii"]["single_case_upper"], "OHM");

        let exa = &prefixes[0];
        assert_eq!(exa["prefix"], "exa");
        assert_eq!(exa["multiplication_factor"].as_f64(), Some(1e18));
    }

    #[test]
    fn test_category_export() {
        let export = TableExport::category(Category::Supplementary);
        assert!(export.prefixes.is_empty());

        let names: Vec<&str> = export.units.iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["radian", "steradian"]);

        let pretty = export.to_json_pretty().unwrap();
        assert!(pretty.contains("\"steradian\""));
        assert!(pretty.contains('\n'));
    }
}
