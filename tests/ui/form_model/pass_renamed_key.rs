use contact_form::form::{FieldKey, FieldLens, FormModel};

#[derive(Clone, contact_form::form::FormModel)]
struct Callback {
    #[form(key = "phoneNumber")]
    phone_number: String,
    best_time: String,
}

fn main() {
    let fields = Callback::fields();
    assert_eq!(fields.phone_number().key().as_str(), "phoneNumber");
    assert_eq!(fields.best_time().key().as_str(), "best_time");
    assert_eq!(
        Callback::FIELD_KEYS,
        &[FieldKey::new("phoneNumber"), FieldKey::new("best_time")]
    );

    let mut model = Callback {
        phone_number: String::new(),
        best_time: "mornings".to_string(),
    };
    fields.phone_number().set(&mut model, "555-0100".to_string());
    assert_eq!(model.phone_number, "555-0100");
    assert_eq!(fields.best_time().get(&model), "mornings");
}
