use propbind::core::{BindingError, BindingInfo};
use propbind_macro_tests::model::{
    Address, AddressBinding, City, Customer, CustomerBinding, Holder, HolderBinding, Point,
    PointBinding,
};

fn customer_in(city: &str) -> Customer {
    let mut customer = Customer::new("Ada", "hunter2");
    customer.address = Some(Address {
        street: "Main St".to_string(),
        city: Some(City {
            name: city.to_string(),
            zip: "0150".to_string(),
        }),
    });

    customer
}

#[test]
fn point_fields_round_trip() {
    let point = PointBinding::new();
    let mut value = Point { x: 1, y: 2 };

    assert_eq!(point.x().get_with_root(&value), Ok(Some(1)));
    point.y().set_with_root(&mut value, 7).unwrap();
    assert_eq!(value, Point { x: 1, y: 7 });
}

#[test]
fn standalone_binding_holds_its_root() {
    let point = PointBinding::with_value(Point { x: 3, y: 4 });

    point.x().set(10).unwrap();
    assert_eq!(point.x().get(), Ok(Some(10)));
    assert_eq!(point.get(), Ok(Some(Point { x: 10, y: 4 })));
    assert!(point.is_standalone());
}

#[test]
fn empty_standalone_binding_takes_the_first_value() {
    let point = PointBinding::new();

    assert_eq!(point.get(), Ok(None));
    assert!(matches!(point.x().get(), Err(BindingError::Unbound { .. })));

    point.set(Point { x: 5, y: 6 }).unwrap();
    assert_eq!(point.y().get(), Ok(Some(6)));
}

#[test]
fn reserved_names_are_suffixed() {
    let customer = CustomerBinding::new();
    let value = Customer::new("Ada", "hunter2");

    assert_eq!(
        customer.name_property().get_with_root(&value),
        Ok(Some("Ada".to_string()))
    );
    assert_eq!(customer.name_property().name(), "name");
}

#[test]
fn crate_visible_fields_are_bound() {
    let customer = CustomerBinding::new();
    let mut value = Customer::new("Ada", "hunter2");

    customer.rank().set_with_root(&mut value, 3).unwrap();
    assert_eq!(customer.rank().get_with_root(&value), Ok(Some(3)));
    assert!(value.has_secret());
}

#[test]
fn nested_paths_read_and_write_in_place() {
    let city_name = CustomerBinding::new().address().city().name_property();
    let mut value = customer_in("Oslo");

    assert_eq!(city_name.path(), "address.city.name");
    assert_eq!(city_name.type_name(), "String");
    assert_eq!(city_name.get_with_root(&value), Ok(Some("Oslo".to_string())));

    city_name
        .set_with_root(&mut value, "Bergen".to_string())
        .unwrap();
    let city = value.address.and_then(|address| address.city);
    assert_eq!(city.map(|city| city.name).as_deref(), Some("Bergen"));
}

#[test]
fn absent_prefixes_degrade_safely() {
    let city_name = CustomerBinding::new().address().city().name_property();
    let value = Customer::new("Ada", "hunter2");

    assert_eq!(city_name.get_safely_with_root(&value), None);
    let err = city_name.get_with_root(&value).unwrap_err();
    assert_eq!(err, BindingError::Absent { path: "address".to_string() });
}

#[test]
fn root_binding_walks_up_one_level() {
    let street = CustomerBinding::new().address().street();

    let parent = street.root_binding();
    assert_eq!(parent.name(), "address");
    assert_eq!(parent.type_name(), "Address");
    assert_eq!(parent.parent().map(BindingInfo::name), Some(""));
}

#[test]
fn nested_bindings_share_the_held_root() {
    let customer = CustomerBinding::with_value(customer_in("Oslo"));
    let address = customer.address();

    address.street().set("Side St".to_string()).unwrap();
    let stored = customer.get().unwrap().and_then(|value| value.address);
    assert_eq!(stored.map(|address| address.street).as_deref(), Some("Side St"));
}

#[test]
fn nested_binding_can_stand_alone() {
    let address = AddressBinding::with_value(Address::default());

    address.street().set("Quay".to_string()).unwrap();
    assert_eq!(address.street().get(), Ok(Some("Quay".to_string())));
    assert_eq!(address.city().name_property().get(), Err(BindingError::Absent {
        path: "city".to_string()
    }));
}

#[test]
fn optional_fields_bind_their_inner_value() {
    let label = HolderBinding::<u8>::new().label();
    let mut value = Holder { value: 1_u8, label: None };

    assert_eq!(label.get_with_root(&value), Ok(None));
    label.set_with_root(&mut value, "first".to_string()).unwrap();
    assert_eq!(value.label.as_deref(), Some("first"));
}

#[test]
fn generic_bindings_follow_their_parameter() {
    let holder = HolderBinding::with_value(Holder {
        value: vec![1, 2],
        label: None,
    });

    holder.value().set(vec![3]).unwrap();
    assert_eq!(holder.value().get(), Ok(Some(vec![3])));
    assert_eq!(holder.value().type_name(), "T");
}
