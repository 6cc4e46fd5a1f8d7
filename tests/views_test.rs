use etsyproxy::views::Views;

#[test]
fn test_load_views_directory() {
    let views = Views::load(concat!(env!("CARGO_MANIFEST_DIR"), "/views")).unwrap();

    assert!(views.has("index"));
    let page = views.render("index").unwrap();
    assert!(page.contains("<html"));
}

#[test]
fn test_load_missing_directory() {
    assert!(Views::load("/definitely/not/a/views/dir").is_err());
}

#[test]
fn test_render_from_templates() {
    let views = Views::from_templates([("index", "<h1>hello</h1>")]).unwrap();
    assert_eq!(views.render("index").unwrap(), "<h1>hello</h1>");
}

#[test]
fn test_render_missing_template() {
    let views = Views::empty();
    assert!(!views.has("index"));
    assert!(views.render("index").is_err());
}

#[test]
fn test_invalid_template() {
    assert!(Views::from_templates([("broken", "{{#if ready}}never closed")]).is_err());
}
