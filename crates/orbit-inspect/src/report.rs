use orbit_interop::RecordLayout;

/// Renders a layout as a fixed-width table.
pub fn layout_table(layout: &RecordLayout) -> String {
    let mut out = format!(
        "{} (version {}, {} bytes)\n",
        layout.name, layout.version, layout.size
    );
    out.push_str(&row("field", "offset", "size", "pad", "format"));
    for (i, field) in layout.fields.iter().enumerate() {
        out.push_str(&row(
            field.name,
            field.offset,
            field.format.size(),
            layout.trailing_padding(i),
            field.format,
        ));
    }
    out
}

fn row(
    name: impl std::fmt::Display,
    offset: impl std::fmt::Display,
    size: impl std::fmt::Display,
    pad: impl std::fmt::Display,
    format: impl std::fmt::Display,
) -> String {
    format!("  {name:<24}{offset:>8}{size:>8}{pad:>8}  {format}\n")
}

#[cfg(test)]
mod tests {
    use orbit_interop::{ConstantRecord, VertexRecord};

    use super::*;

    #[test]
    fn vertex_table_lists_every_field() {
        let table = layout_table(&VertexRecord::LAYOUT);
        assert!(table.starts_with("VertexRecord (version 1, 80 bytes)"));
        // header + title + 5 fields
        assert_eq!(table.lines().count(), 7);
        let style = table.lines().find(|l| l.trim_start().starts_with("draw_style")).unwrap();
        let cols: Vec<&str> = style.split_whitespace().collect();
        assert_eq!(cols, ["draw_style", "64", "1", "15", "uint8"]);
    }

    #[test]
    fn constant_table_shows_light_padding() {
        let table = layout_table(&ConstantRecord::LAYOUT);
        let light = table.lines().find(|l| l.trim_start().starts_with("light")).unwrap();
        let cols: Vec<&str> = light.split_whitespace().collect();
        assert_eq!(cols, ["light", "64", "12", "4", "float32x3"]);
    }
}
