//! Unit tests for attribute parsing, slot classification, and expansion.

use rstest::rstest;
use syn::parse_quote;

use super::build::{Slot, classify};
use super::{expand, parse};

fn first_field(item: &syn::ItemStruct) -> syn::Field {
    item.fields.iter().next().cloned().expect("struct has a field")
}

#[test]
fn parses_binding_controls() {
    let item: syn::ItemStruct = parse_quote! {
        struct T {
            #[treebind(key = "addr", nilable, external)]
            address: Field,
        }
    };
    let attrs = parse::parse_field_attrs(&first_field(&item)).expect("attributes parse");
    assert_eq!(attrs.key.as_deref(), Some("addr"));
    assert!(attrs.nilable);
    assert!(attrs.external);
    assert!(!attrs.skip);
    assert_eq!(
        attrs.attrs,
        vec![
            ("key".to_owned(), "addr".to_owned()),
            ("nilable".to_owned(), String::new()),
            ("external".to_owned(), String::new()),
        ]
    );
}

#[test]
fn empty_key_alias_falls_back_to_field_name() {
    let item: syn::ItemStruct = parse_quote! {
        struct T {
            #[treebind(key = "")]
            timeout: Field,
        }
    };
    let attrs = parse::parse_field_attrs(&first_field(&item)).expect("attributes parse");
    assert_eq!(attrs.key, None);
    assert_eq!(attrs.attrs, vec![("key".to_owned(), String::new())]);
}

#[test]
fn flag_values_are_irrelevant() {
    let item: syn::ItemStruct = parse_quote! {
        struct T {
            #[treebind(nilable = "no")]
            retries: Field,
        }
    };
    let attrs = parse::parse_field_attrs(&first_field(&item)).expect("attributes parse");
    assert!(attrs.nilable);
}

#[test]
fn repeated_attributes_accumulate_in_order() {
    let item: syn::ItemStruct = parse_quote! {
        struct T {
            #[treebind(note = "first", scope = "net")]
            #[treebind(note = "second")]
            address: Field,
        }
    };
    let attrs = parse::parse_field_attrs(&first_field(&item)).expect("attributes parse");
    assert_eq!(
        attrs.attrs,
        vec![
            ("note".to_owned(), "first".to_owned()),
            ("scope".to_owned(), "net".to_owned()),
            ("note".to_owned(), "second".to_owned()),
        ]
    );
}

#[test]
fn skip_is_recognised() {
    let item: syn::ItemStruct = parse_quote! {
        struct T {
            #[treebind(skip)]
            internal: Field,
        }
    };
    let attrs = parse::parse_field_attrs(&first_field(&item)).expect("attributes parse");
    assert!(attrs.skip);
}

#[test]
fn struct_crate_attribute_parses_as_path() {
    let item: syn::ItemStruct = parse_quote! {
        #[treebind(crate = "my_ns::treebind")]
        struct T {
            name: Field,
        }
    };
    let attrs = parse::parse_struct_attrs(&item.attrs).expect("attributes parse");
    let path = attrs.crate_path.expect("crate path recorded");
    assert_eq!(path.segments.len(), 2);
}

#[test]
fn unknown_struct_attributes_are_discarded() {
    let item: syn::ItemStruct = parse_quote! {
        #[treebind(future_knob = "on")]
        struct T {
            name: Field,
        }
    };
    let attrs = parse::parse_struct_attrs(&item.attrs).expect("attributes parse");
    assert!(attrs.crate_path.is_none());
}

#[rstest]
#[case::plain_wrapper(parse_quote!(Field), Slot::Wrapper)]
#[case::qualified_wrapper(parse_quote!(treebind::Field), Slot::Wrapper)]
#[case::boxed_wrapper(parse_quote!(Box<Field>), Slot::BoxedWrapper)]
#[case::qualified_boxed(parse_quote!(std::boxed::Box<treebind::Field>), Slot::BoxedWrapper)]
#[case::nested_section(parse_quote!(Subsection), Slot::Nested)]
#[case::boxed_section(parse_quote!(Box<Subsection>), Slot::Nested)]
#[case::collection(parse_quote!(Vec<Field>), Slot::Nested)]
fn classifies_slot_shapes(#[case] ty: syn::Type, #[case] expected: Slot) {
    assert_eq!(classify(&ty), expected);
}

#[test]
fn rejects_enums() {
    let input: syn::DeriveInput = parse_quote! {
        enum E {
            A,
        }
    };
    let err = expand(&input).expect_err("enums are rejected");
    assert!(err.to_string().contains("can only be derived for structs"));
}

#[test]
fn rejects_tuple_structs() {
    let input: syn::DeriveInput = parse_quote! {
        struct T(Field);
    };
    let err = expand(&input).expect_err("tuple structs are rejected");
    assert!(err.to_string().contains("requires named fields"));
}

#[test]
fn skip_fields_emit_no_binding() {
    let input: syn::DeriveInput = parse_quote! {
        struct T {
            #[treebind(skip)]
            internal: Field,
            name: Field,
        }
    };
    let tokens = expand(&input).expect("expansion succeeds").to_string();
    assert!(tokens.contains("\"name\""));
    assert!(!tokens.contains("\"internal\""));
}

#[test]
fn crate_alias_redirects_generated_paths() {
    let input: syn::DeriveInput = parse_quote! {
        #[treebind(crate = "alias")]
        struct T {
            name: Field,
        }
    };
    let tokens = expand(&input).expect("expansion succeeds").to_string();
    assert!(tokens.contains("alias :: TreeBind"));
    assert!(!tokens.contains("treebind :: TreeBind"));
}

#[test]
fn empty_structs_expand_to_a_trivial_pass() {
    let input: syn::DeriveInput = parse_quote! {
        struct Empty {}
    };
    let tokens = expand(&input).expect("expansion succeeds").to_string();
    assert!(tokens.contains("bind_fields"));
}
