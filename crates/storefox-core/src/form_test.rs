use super::*;

fn filled_form() -> FormData {
    let mut form = FormData::default();
    for (field, value) in [
        ("name", "Downtown"),
        ("city", "Austin"),
        ("region", "TX"),
        ("tenantId", "42"),
        ("deviceId", "dev-1"),
        ("store_id", "99"),
        ("token", "T"),
    ] {
        form.set_field(field, value).expect("known field");
    }
    form
}

#[test]
fn set_field_stores_text_fields_verbatim() {
    let form = filled_form();
    assert_eq!(form.name, "Downtown");
    assert_eq!(form.city, "Austin");
    assert_eq!(form.region, "TX");
    assert_eq!(form.device_id, "dev-1");
    assert_eq!(form.store_id, "99");
    assert_eq!(form.token, "T");
}

#[test]
fn set_field_coerces_tenant_id() {
    let mut form = FormData::default();
    form.set_field("tenantId", "42").unwrap();
    assert_eq!(form.tenant_id, 42);
}

#[test]
fn unparsable_tenant_id_becomes_zero() {
    let mut form = FormData::default();
    for raw in ["", "abc", "-", "  ", "x12", "99999999999999999999999"] {
        form.tenant_id = 7;
        form.set_field("tenantId", raw).unwrap();
        assert_eq!(form.tenant_id, 0, "input {raw:?} should coerce to 0");
    }
}

#[test]
fn tenant_id_reads_leading_integer() {
    assert_eq!(parse_tenant_id("42abc"), 42);
    assert_eq!(parse_tenant_id("3.9"), 3);
    assert_eq!(parse_tenant_id("  17"), 17);
    assert_eq!(parse_tenant_id("-5"), -5);
    assert_eq!(parse_tenant_id("+8"), 8);
}

#[test]
fn zero_spellings_parse_as_integers() {
    for raw in ["0", "00", "-0", "+0", " 0x"] {
        assert_eq!(try_parse_tenant_id(raw), Some(0), "raw: {raw:?}");
    }
    for raw in ["", "abc", "-", "+x", "99999999999999999999"] {
        assert_eq!(try_parse_tenant_id(raw), None, "raw: {raw:?}");
    }
}

#[test]
fn snake_case_field_names_are_accepted() {
    let mut form = FormData::default();
    form.set_field("tenant_id", "3").unwrap();
    form.set_field("device_id", "d").unwrap();
    assert_eq!(form.tenant_id, 3);
    assert_eq!(form.device_id, "d");
}

#[test]
fn unknown_field_is_rejected_without_mutation() {
    let mut form = filled_form();
    let before = form.clone();
    let err = form.set_field("email", "a@b.c").unwrap_err();
    assert_eq!(err, FormError::UnknownField("email".to_string()));
    assert_eq!(form, before);
}

#[test]
fn set_field_leaves_other_fields_untouched() {
    let mut form = filled_form();
    form.set_field("city", "Dallas").unwrap();
    assert_eq!(form.city, "Dallas");
    assert_eq!(form.name, "Downtown");
    assert_eq!(form.tenant_id, 42);
}

#[test]
fn reset_restores_all_seven_fields() {
    let mut form = filled_form();
    form.reset();
    assert_eq!(form.name, "");
    assert_eq!(form.city, "");
    assert_eq!(form.region, "");
    assert_eq!(form.tenant_id, 0);
    assert_eq!(form.device_id, "");
    assert_eq!(form.store_id, "");
    assert_eq!(form.token, "");
    assert_eq!(form, FormData::default());
}

#[test]
fn debug_redacts_token() {
    let form = filled_form();
    let rendered = format!("{form:?}");
    assert!(rendered.contains("[redacted]"));
    assert!(!rendered.contains("token: \"T\""));
}

#[test]
fn mapping_form_clear_inputs_are_independent() {
    let mut mapping = MappingForm {
        device_id: "dev-9".to_string(),
        token: "M".to_string(),
    };
    mapping.clear_token();
    assert_eq!(mapping.token, "");
    assert_eq!(mapping.device_id, "dev-9");
    mapping.clear_device_id();
    assert_eq!(mapping.device_id, "");
}

#[test]
fn form_field_round_trips_through_wire_name() {
    for field in [
        FormField::Name,
        FormField::City,
        FormField::Region,
        FormField::TenantId,
        FormField::DeviceId,
        FormField::StoreId,
        FormField::Token,
    ] {
        assert_eq!(field.as_str().parse::<FormField>().unwrap(), field);
    }
}
