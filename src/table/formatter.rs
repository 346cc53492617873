use crate::registry::{Form, PrefixRepresentation, Unit};

// Width of the description column in list output
const DESCRIBE_WIDTH: usize = 28;

/// One line of `list` output: description followed by the chosen encoding
pub fn format_unit_line(unit: &Unit, form: Form) -> String {
    format!(
        "{:<width$} {}",
        unit.describe(),
        unit.encoding(form),
        width = DESCRIBE_WIDTH
    )
}

/// One line of `prefixes` output: description, factor and the chosen encoding
pub fn format_prefix_line(prefix: &PrefixRepresentation, form: Form) -> String {
    format!(
        "{:<width$} {:<8} {}",
        prefix.describe(),
        format!("{:e}", prefix.multiplication_factor),
        prefix.encoding(form),
        width = DESCRIBE_WIDTH
    )
}

pub fn format_unit_details(unit: &Unit) -> String {
    let form_ii = &unit.representation.form_ii;
    [
        format!("Unit: {}", unit.name),
        format!("Category: {}", unit.category),
        format!("International symbol: {}", unit.international_symbol),
        format!("Form I: {}", unit.representation.form_i),
        format!("Form II (lower): {}", form_ii.single_case_lower),
        format!("Form II (upper): {}", form_ii.single_case_upper),
    ]
    .join("\n")
}

pub fn format_prefix_details(prefix: &PrefixRepresentation) -> String {
    [
        format!("Prefix: {}", prefix.prefix),
        format!("Multiplication factor: {:e}", prefix.multiplication_factor),
        format!("International symbol: {}", prefix.international_symbol),
        format!("Form I: {}", prefix.form_i),
        format!("Form II (lower): {}", prefix.form_ii.single_case_lower),
        format!("Form II (upper): {}", prefix.form_ii.single_case_upper),
    ]
    .join("\n")
}
