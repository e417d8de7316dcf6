//! Serialization of generated tables as Rust constant declarations.

/// `pub static NAME: [f64; N] = [...];`
///
/// Elements use `{:?}` formatting so whole values keep their decimal point
/// and stay valid float literals.
pub fn float_table_decl(name: &str, values: &[f64]) -> String {
    table_decl(name, "f64", values.iter().map(|v| format!("{v:?}")))
}

/// `pub static NAME: [usize; N] = [...];`
pub fn index_table_decl(name: &str, values: &[usize]) -> String {
    table_decl(name, "usize", values.iter().map(|v| v.to_string()))
}

fn table_decl(name: &str, elem_type: &str, values: impl ExactSizeIterator<Item = String>) -> String {
    let len = values.len();
    let body = values.collect::<Vec<_>>().join(", ");
    format!("pub static {name}: [{elem_type}; {len}] = [{body}];")
}
