use tailwind_styled::{create, BaseClass, RenderRequest, StyleOptions, Tag, Target};

#[test]
fn test_plain_base_class() {
    let component = create("px-4 py-2", StyleOptions::new());
    assert_eq!(component.class_name(&RenderRequest::new()), "px-4 py-2");
}

#[test]
fn test_registered_and_unknown_variants() {
    let text = create("text-base", StyleOptions::new().variant("primary", "text-blue-500"));

    assert_eq!(
        text.class_name(&RenderRequest::new().variant("primary")),
        "text-base text-blue-500"
    );
    assert_eq!(text.class_name(&RenderRequest::new().variant("secondary")), "text-base");
}

#[test]
fn test_dynamic_class_and_configured_target() {
    let section = create(
        "p-4",
        StyleOptions::new().with_as(Tag::Section).dynamic_class(|p| {
            if p.is_truthy("isActive") {
                "bg-green-500".to_string()
            } else {
                "bg-red-500".to_string()
            }
        }),
    );

    let active = section.render(RenderRequest::new().prop("isActive", true));
    assert_eq!(active.class_name, "p-4 bg-green-500");
    assert_eq!(active.target, Target::Tag(Tag::Section));

    let inactive = section.render(RenderRequest::new().prop("isActive", false));
    assert_eq!(inactive.class_name, "p-4 bg-red-500");
}

#[test]
fn test_explicit_class_name_is_appended() {
    let component = create("p-4", StyleOptions::new());
    assert_eq!(component.class_name(&RenderRequest::new().class_name("m-2")), "p-4 m-2");
}

#[test]
fn test_explicit_class_name_is_last_fragment() {
    let component = create(
        BaseClass::dynamic(|p| format!("gap-{}", p.get_str("gap").unwrap_or("2"))),
        StyleOptions::new()
            .dynamic_class(|_| "flex".to_string())
            .variant("row", "flex-row"),
    );
    let request = RenderRequest::new()
        .prop("gap", "4")
        .variant("row")
        .class_name("p-4 p-2");

    let class_name = component.class_name(&request);
    assert_eq!(class_name, "gap-4 flex flex-row p-4 p-2");
    assert!(class_name.ends_with("p-4 p-2"));
}

#[test]
fn test_omitted_variant_never_adds_variant_classes() {
    let component = create(
        "btn",
        StyleOptions::new()
            .variant("primary", "bg-blue-500")
            .variant("danger", "bg-red-500"),
    );
    let class_name = component.class_name(&RenderRequest::new());
    assert_eq!(class_name, "btn");
    assert!(!class_name.contains("bg-"));
}

#[test]
fn test_unknown_variant_equals_omitted_variant() {
    let component = create("btn", StyleOptions::new().variant("primary", "bg-blue-500"));
    let base = RenderRequest::new().prop("id", "x").class_name("m-1");

    for unknown in ["secondary", "", "PRIMARY"] {
        assert_eq!(
            component.render(base.clone().variant(unknown)),
            component.render(base.clone())
        );
    }
}

#[test]
fn test_render_is_idempotent() {
    let component = create(
        BaseClass::dynamic(|p| format!("w-{}", p.get_str("width").unwrap_or("full"))),
        StyleOptions::new().variant("card", "shadow"),
    );
    let request = RenderRequest::new().prop("width", "1/2").variant("card").text("hi");

    assert_eq!(component.render(request.clone()), component.render(request));
}

#[test]
fn test_reserved_props_do_not_reach_class_functions() {
    let component = create(
        BaseClass::dynamic(|p| {
            let names: Vec<&str> = p.iter().map(|(k, _)| k.as_str()).collect();
            names.join(" ")
        }),
        StyleOptions::new(),
    );
    let request = RenderRequest::from_props(
        [
            ("className", "m-2"),
            ("variant", "primary"),
            ("as", "span"),
            ("children", "text"),
            ("data-id", "7"),
        ]
        .into_iter()
        .collect(),
    )
    .unwrap();

    assert_eq!(component.class_name(&request), "data-id m-2");
}

#[test]
fn test_call_site_as_wins_over_configuration() {
    let component = create("p-4", StyleOptions::new().with_as(Tag::Section));
    let element = component.render(RenderRequest::new().with_as(Target::parse("x-card").unwrap()));
    assert_eq!(element.target, Target::Element("x-card".to_string()));
}

#[test]
fn test_components_are_shareable_across_threads() {
    let component = create("p-4", StyleOptions::new().dynamic_class(|p| {
        if p.is_truthy("wide") { "w-full".into() } else { String::new() }
    }));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let component = component.clone();
            std::thread::spawn(move || component.class_name(&RenderRequest::new().prop("wide", i % 2 == 0)))
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["p-4 w-full", "p-4", "p-4 w-full", "p-4"]);
}
