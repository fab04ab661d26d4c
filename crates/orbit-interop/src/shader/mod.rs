//! WGSL declarations of the interop records.
//!
//! Prepend [`WGSL_DECLARATIONS`] to shader sources instead of restating the
//! structs by hand, e.g.
//!
//! ```ignore
//! let src = format!("{}\n{}", orbit_interop::shader::WGSL_DECLARATIONS, body);
//! ```

/// `VertexInput` and `Constants` struct declarations.
pub const WGSL_DECLARATIONS: &str = include_str!("interop.wgsl");

#[cfg(test)]
mod tests {
    use naga::{Binding, TypeInner};

    use super::WGSL_DECLARATIONS;
    use crate::records::{ConstantRecord, VertexRecord};

    fn struct_members(module: &naga::Module, name: &str) -> (Vec<naga::StructMember>, u32) {
        module
            .types
            .iter()
            .find_map(|(_, ty)| match &ty.inner {
                TypeInner::Struct { members, span } if ty.name.as_deref() == Some(name) => {
                    Some((members.clone(), *span))
                }
                _ => None,
            })
            .unwrap_or_else(|| panic!("struct `{name}` not declared"))
    }

    fn parse() -> naga::Module {
        naga::front::wgsl::parse_str(WGSL_DECLARATIONS).unwrap()
    }

    #[test]
    fn constants_struct_matches_record_layout() {
        let module = parse();
        let (members, span) = struct_members(&module, "Constants");

        assert_eq!(u64::from(span), ConstantRecord::LAYOUT.size);
        assert_eq!(members.len(), ConstantRecord::LAYOUT.fields.len());
        for (member, field) in members.iter().zip(ConstantRecord::LAYOUT.fields) {
            assert_eq!(member.name.as_deref(), Some(field.name));
            assert_eq!(u64::from(member.offset), field.offset, "{}", field.name);
        }
    }

    #[test]
    fn vertex_input_locations_match_buffer_layout() {
        let module = parse();
        let (members, _) = struct_members(&module, "VertexInput");
        let attrs = VertexRecord::layout().attributes;

        assert_eq!(members.len(), attrs.len());
        for ((member, attr), field) in members.iter().zip(attrs).zip(VertexRecord::LAYOUT.fields) {
            assert_eq!(member.name.as_deref(), Some(field.name));
            match member.binding {
                Some(Binding::Location { location, .. }) => {
                    assert_eq!(location, attr.shader_location, "{}", field.name)
                }
                ref other => panic!("{}: expected a location binding, got {other:?}", field.name),
            }
        }
    }
}
